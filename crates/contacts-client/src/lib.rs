mod client;
mod data_service;
mod feedback;
pub mod form;
mod list;

pub use client::HttpContactClient;
pub use data_service::ContactDataService;
pub use feedback::{Feedback, FEEDBACK_DELAY};
pub use form::{ContactForm, FieldError, FormError, Validator};
pub use list::{Confirmation, ContactsListView, DELETE_PROMPT};
