use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::services::ContactService;

pub mod contacts;
pub mod error;
pub mod health;

pub use error::HttpError;

pub fn http_router(contact_service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/contacts",
            get(contacts::list_contacts).post(contacts::create_contact),
        )
        .route(
            "/contacts/:id",
            get(contacts::get_contact)
                .put(contacts::update_contact)
                .delete(contacts::delete_contact),
        )
        .layer(Extension(contact_service))
        .layer(TraceLayer::new_for_http())
}
