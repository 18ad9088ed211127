use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::{
    features::contact::{
        implementations::ContactFormState,
        schemas::{ContactField, ContactForm, ContactSubmission, SubmitStatus},
    },
    services::form_intake::FormIntake,
    utilities::{
        errors::AppError,
        i18n::{Locale, TranslationStore, Translations},
    },
};

/// Intake double that counts calls and answers with a fixed outcome.
#[derive(Clone)]
struct FakeIntake {
    calls: Arc<AtomicUsize>,
    outcome: fn() -> Result<bool, AppError>,
}

impl FakeIntake {
    fn new(outcome: fn() -> Result<bool, AppError>) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            outcome,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FormIntake for FakeIntake {
    async fn submit(&self, _submission: &ContactSubmission) -> Result<bool, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.outcome)()
    }
}

fn store() -> TranslationStore {
    let translations = Translations::embedded().expect("embedded tables");
    TranslationStore::new(translations, Locale::Es)
}

fn valid_form() -> ContactForm {
    ContactForm {
        name: "Ana López".to_string(),
        email: "ana@example.com".to_string(),
        phone: "(833) 123-4567".to_string(),
        interest: "Compra".to_string(),
        message: "Me interesa la casa".to_string(),
    }
}

#[tokio::test]
async fn blank_name_is_reported_without_a_network_call() {
    let intake = FakeIntake::new(|| Ok(true));
    let store = store();
    let mut state = ContactFormState::with_form(ContactForm {
        name: String::new(),
        email: "a@b.com".to_string(),
        phone: "1234567890".to_string(),
        ..ContactForm::default()
    });

    let result = state.submit(&intake, &store).await;

    assert!(matches!(result, Err(AppError::FieldValidationErrors(_))));
    assert_eq!(intake.calls(), 0);
    assert_eq!(state.status, SubmitStatus::Error);
    assert_eq!(
        state.errors.keys().collect::<Vec<_>>(),
        vec!["name"],
        "{:?}",
        state.errors
    );
    assert_eq!(state.errors["name"], store.t("contact.errors.name"));
}

#[tokio::test]
async fn every_invalid_field_gets_its_own_message() {
    let intake = FakeIntake::new(|| Ok(true));
    let store = store();
    let mut state = ContactFormState::with_form(ContactForm {
        name: "   ".to_string(),
        email: "not-an-email".to_string(),
        phone: "12345".to_string(),
        ..ContactForm::default()
    });

    let _ = state.submit(&intake, &store).await;

    assert_eq!(
        state.errors.keys().collect::<Vec<_>>(),
        vec!["email", "name", "phone"]
    );
    assert_eq!(intake.calls(), 0);
}

#[tokio::test]
async fn phone_rejects_letters_even_when_long_enough() {
    let intake = FakeIntake::new(|| Ok(true));
    let mut state = ContactFormState::with_form(ContactForm {
        phone: "833-CALL-NOW".to_string(),
        ..valid_form()
    });

    let _ = state.submit(&intake, &store()).await;

    assert!(state.errors.contains_key("phone"));
    assert_eq!(intake.calls(), 0);
}

#[tokio::test]
async fn accepted_submission_clears_the_form() {
    let intake = FakeIntake::new(|| Ok(true));
    let mut state = ContactFormState::with_form(valid_form());

    state.submit(&intake, &store()).await.expect("submit");

    assert_eq!(intake.calls(), 1);
    assert_eq!(state.status, SubmitStatus::Success);
    assert_eq!(state.form, ContactForm::default());
    assert!(state.errors.is_empty());
}

#[tokio::test]
async fn rejected_or_failed_submission_keeps_the_form() {
    let rejected = FakeIntake::new(|| Ok(false));
    let unreachable =
        FakeIntake::new(|| Err(AppError::SubmissionError("connection refused".to_string())));
    let store = store();

    for intake in [rejected, unreachable] {
        let mut state = ContactFormState::with_form(valid_form());
        let result = state.submit(&intake, &store).await;

        match result {
            Err(AppError::SubmissionError(message)) => {
                assert_eq!(message, store.t("contact.error"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(intake.calls(), 1);
        assert_eq!(state.status, SubmitStatus::Error);
        assert_eq!(state.form, valid_form());
    }
}

#[tokio::test]
async fn editing_a_field_clears_its_error_and_resets_status() {
    let intake = FakeIntake::new(|| Ok(true));
    let mut state = ContactFormState::with_form(ContactForm {
        name: String::new(),
        phone: "1".to_string(),
        ..valid_form()
    });
    let _ = state.submit(&intake, &store()).await;
    assert_eq!(state.errors.len(), 2);

    state.update_field(ContactField::Name, "Ana");

    assert_eq!(state.status, SubmitStatus::Idle);
    assert!(!state.errors.contains_key("name"));
    assert!(state.errors.contains_key("phone"));
    assert_eq!(state.form.name, "Ana");
}

#[test]
fn subject_names_the_interest_or_general_information() {
    let form = valid_form();
    assert_eq!(form.subject(), "Nuevo contacto de Ana López - Compra");

    let form = ContactForm {
        interest: "  ".to_string(),
        ..valid_form()
    };
    assert_eq!(
        form.subject(),
        "Nuevo contacto de Ana López - Información General"
    );
    assert_eq!(form.to_submission().subject, form.subject());
}
