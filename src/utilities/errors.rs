use std::collections::BTreeMap;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0} is not set")]
    EnvironmentVariableNotSetError(String),
    #[error("File read error, {0}")]
    FileReadError(String),
    #[error("{message}")]
    NotFoundError { message: String, home: String },
    #[error("Validation errors on {} field(s)", .0.len())]
    FieldValidationErrors(BTreeMap<String, String>),
    #[error("Submission error, {0}")]
    SubmissionError(String),
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Url parse error: {0}")]
    UrlParseError(#[from] url::ParseError),
    #[error("Serde json error: {0}")]
    SerdejsonError(#[from] serde_json::Error),
    #[error("Json body error, {0}")]
    JsonBodyError(#[from] JsonRejection),
    #[error("Invalid value, {0}")]
    InvalidValue(String),
    #[error("Unsupported locale, {0}")]
    UnsupportedLocale(String),
    #[error("Internal error, {0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::EnvironmentVariableNotSetError(key) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": format!("{key} is not set")}),
            ),
            Self::FileReadError(e) => (StatusCode::INTERNAL_SERVER_ERROR, json!({"error": e})),
            Self::NotFoundError { message, home } => {
                (StatusCode::NOT_FOUND, json!({"error": message, "home": home}))
            }
            Self::FieldValidationErrors(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, json!({"errors": errors}))
            }
            Self::SubmissionError(e) => (StatusCode::BAD_GATEWAY, json!({"error": e})),
            Self::Request(e) => (StatusCode::BAD_GATEWAY, json!({"error": e.to_string()})),
            Self::UrlParseError(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({"error": format!("Url parse error, {e}")}),
            ),
            Self::SerdejsonError(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({"error": e.to_string()}),
            ),
            Self::JsonBodyError(e) => (e.status(), json!({"error": e.body_text()})),
            Self::InvalidValue(e) => (StatusCode::UNPROCESSABLE_ENTITY, json!({"error": e})),
            Self::UnsupportedLocale(locale) => (
                StatusCode::BAD_REQUEST,
                json!({"error": format!("Unsupported locale, {locale}")}),
            ),
            Self::InternalError(e) => (StatusCode::INTERNAL_SERVER_ERROR, json!({"error": e})),
        };

        (status, Json(body)).into_response()
    }
}
