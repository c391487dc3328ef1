use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contacts_core::ContactError;
use serde_json::json;

/// Maps contact errors onto HTTP responses. Store failures are logged and
/// reported without detail.
#[derive(Debug)]
pub struct HttpError(pub ContactError);

impl From<ContactError> for HttpError {
    fn from(err: ContactError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ContactError::NotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            ContactError::Validation(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            ContactError::Decode(_)
            | ContactError::Io(_)
            | ContactError::IdsExhausted
            | ContactError::Transport(_) => {
                tracing::error!("contact store failure: {}", self.0);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "contact store failure".to_owned(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
