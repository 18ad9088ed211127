use std::collections::BTreeMap;

use tracing::{info, warn};
use validator::{Validate, ValidationErrors};

use crate::{
    features::contact::schemas::{ContactField, ContactForm, ContactSubmission, SubmitStatus},
    services::form_intake::FormIntake,
    utilities::{errors::AppError, i18n::TranslationStore},
};

/// The agency inbox reads Spanish regardless of the visitor's locale.
const SUBJECT_PREFIX: &str = "Nuevo contacto de";
const GENERAL_INTEREST: &str = "Información General";

impl ContactForm {
    pub fn subject(&self) -> String {
        let interest = match self.interest.trim() {
            "" => GENERAL_INTEREST,
            interest => interest,
        };
        format!("{SUBJECT_PREFIX} {} - {interest}", self.name.trim())
    }

    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            interest: self.interest.clone(),
            message: self.message.clone(),
            subject: self.subject(),
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Interest => &mut self.interest,
            ContactField::Message => &mut self.message,
        }
    }
}

/// Field name to translated message, one entry per failing field.
pub fn field_errors(errors: &ValidationErrors, store: &TranslationStore) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_keys()
        .map(|field| {
            let message = store.t(&format!("contact.errors.{field}"));
            (field.to_string(), message)
        })
        .collect()
}

/// Contact form with its per-field errors and submission status.
#[derive(Default, Clone, Debug)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub errors: BTreeMap<String, String>,
    pub status: SubmitStatus,
}

impl ContactFormState {
    pub fn with_form(form: ContactForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// Editing a field clears its error and returns the form to idle.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.form.field_mut(field) = value.into();
        self.errors.remove(field.as_str());
        if self.status != SubmitStatus::Idle {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Validates locally, then forwards to `intake` exactly once.
    ///
    /// Validation failures never reach the network. On success the form is
    /// cleared; on any failure it keeps the visitor's input.
    pub async fn submit<I>(&mut self, intake: &I, store: &TranslationStore) -> Result<(), AppError>
    where
        I: FormIntake,
    {
        if let Err(errors) = self.form.validate() {
            self.errors = field_errors(&errors, store);
            self.status = SubmitStatus::Error;
            return Err(AppError::FieldValidationErrors(self.errors.clone()));
        }

        self.errors.clear();
        self.status = SubmitStatus::Sending;

        match intake.submit(&self.form.to_submission()).await {
            Ok(true) => {
                info!("contact submission accepted");
                self.form = ContactForm::default();
                self.status = SubmitStatus::Success;
                Ok(())
            }
            Ok(false) => {
                warn!("contact submission rejected by the intake endpoint");
                self.status = SubmitStatus::Error;
                Err(AppError::SubmissionError(store.t("contact.error")))
            }
            Err(e) => {
                warn!("contact submission failed: {e}");
                self.status = SubmitStatus::Error;
                Err(AppError::SubmissionError(store.t("contact.error")))
            }
        }
    }
}
