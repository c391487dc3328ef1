use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use contacts_core::Contact;
use std::sync::Arc;

use super::HttpError;
use crate::services::ContactService;

#[tracing::instrument(name = "http::list_contacts", skip_all)]
pub async fn list_contacts(
    Extension(contact_service): Extension<Arc<ContactService>>,
) -> Result<Json<Vec<Contact>>, HttpError> {
    let contacts = contact_service.list().await?;

    Ok(Json(contacts))
}

#[tracing::instrument(name = "http::get_contact", skip_all, fields(id = id))]
pub async fn get_contact(
    Path(id): Path<i64>,
    Extension(contact_service): Extension<Arc<ContactService>>,
) -> Result<Json<Contact>, HttpError> {
    let contact = contact_service.get_by_id(id).await?;

    Ok(Json(contact))
}

#[tracing::instrument(name = "http::create_contact", skip_all)]
pub async fn create_contact(
    Extension(contact_service): Extension<Arc<ContactService>>,
    Json(contact): Json<Contact>,
) -> Result<impl IntoResponse, HttpError> {
    let created_contact = contact_service.create(&contact).await?;

    let location = format!("/contacts/{}", created_contact.id.unwrap_or_default());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created_contact),
    ))
}

#[tracing::instrument(name = "http::update_contact", skip_all, fields(id = id))]
pub async fn update_contact(
    Path(id): Path<i64>,
    Extension(contact_service): Extension<Arc<ContactService>>,
    Json(contact): Json<Contact>,
) -> Result<StatusCode, HttpError> {
    contact_service.update(id, &contact).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[tracing::instrument(name = "http::delete_contact", skip_all, fields(id = id))]
pub async fn delete_contact(
    Path(id): Path<i64>,
    Extension(contact_service): Extension<Arc<ContactService>>,
) -> Result<StatusCode, HttpError> {
    contact_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
