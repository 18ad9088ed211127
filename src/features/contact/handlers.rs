use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::WithRejection;

use crate::{
    features::contact::{
        implementations::ContactFormState,
        schemas::{ContactForm, ContactResponse},
    },
    services::form_intake::Web3FormsClient,
    utilities::{errors::AppError, i18n::TranslationStore},
};

pub async fn submit_contact_handler(
    State(intake): State<Web3FormsClient>,
    store: TranslationStore,
    WithRejection(Json(form), _): WithRejection<Json<ContactForm>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let mut state = ContactFormState::with_form(form);
    state.submit(&intake, &store).await?;

    Ok(Json(ContactResponse {
        status: state.status,
        message: store.t("contact.success"),
        errors: state.errors,
    }))
}
