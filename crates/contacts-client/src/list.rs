use contacts_core::Contact;
use std::sync::Arc;
use tokio::sync::watch;

use crate::{ContactDataService, Feedback};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this contact?";

const ADDED: &str = "Contact added successfully!";
const UPDATED: &str = "Contact updated successfully!";
const DELETED: &str = "Contact deleted successfully!";
const ADD_FAILED: &str = "Failed to add contact.";
const UPDATE_FAILED: &str = "Failed to update contact.";
const DELETE_FAILED: &str = "Failed to delete contact.";

/// Yes/no answer from the user before a destructive action.
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

pub struct ContactsListView {
    data_service: Arc<ContactDataService>,
    contacts: watch::Receiver<Vec<Contact>>,
    selected_contact: Option<Contact>,
    show_add_form: bool,
    feedback: Feedback,
}

impl ContactsListView {
    pub fn new(data_service: Arc<ContactDataService>) -> Self {
        Self::with_feedback(data_service, Feedback::default())
    }

    pub fn with_feedback(data_service: Arc<ContactDataService>, feedback: Feedback) -> Self {
        let contacts = data_service.subscribe();

        Self {
            data_service,
            contacts,
            selected_contact: None,
            show_add_form: false,
            feedback,
        }
    }

    /// Loads the initial contact list; false if the backend could not be listed.
    pub async fn init(&self) -> bool {
        self.data_service.refresh().await
    }

    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.borrow().clone()
    }

    pub fn selected_contact(&self) -> Option<&Contact> {
        self.selected_contact.as_ref()
    }

    pub fn show_add_form(&self) -> bool {
        self.show_add_form
    }

    pub fn feedback_message(&self) -> Option<String> {
        self.feedback.message()
    }

    pub fn clear_feedback(&self) {
        self.feedback.clear();
    }

    pub fn add_new_contact(&mut self) {
        self.feedback.clear();
        self.selected_contact = None;
        self.show_add_form = true;
    }

    pub fn edit_contact(&mut self, contact: Contact) {
        self.feedback.clear();
        self.selected_contact = Some(contact);
        self.show_add_form = true;
    }

    /// Handles a contact emitted by the form: contacts carrying an id are
    /// updated, the rest are created. Returns whether the backend accepted it.
    pub async fn submit_contact(&mut self, contact: Contact) -> bool {
        self.feedback.clear();

        let succeeded = if contact.id.is_some() {
            match self.data_service.update(&contact).await {
                Ok(()) => {
                    self.data_service.refresh().await;
                    self.feedback.display(UPDATED);
                    true
                }
                Err(err) => {
                    tracing::error!("error updating contact: {}", err);
                    self.feedback.display(UPDATE_FAILED);
                    false
                }
            }
        } else {
            match self.data_service.create(&contact).await {
                Ok(_) => {
                    self.data_service.refresh().await;
                    self.feedback.display(ADDED);
                    true
                }
                Err(err) => {
                    tracing::error!("error adding contact: {}", err);
                    self.feedback.display(ADD_FAILED);
                    false
                }
            }
        };

        self.show_add_form = false;

        succeeded
    }

    /// Returns whether the contact was deleted. Declining the confirmation
    /// leaves everything untouched.
    pub async fn delete_contact(&mut self, id: i64, confirmation: &dyn Confirmation) -> bool {
        self.feedback.clear();

        if !confirmation.confirm(DELETE_PROMPT) {
            return false;
        }

        match self.data_service.delete(id).await {
            Ok(()) => {
                self.data_service.refresh().await;
                self.feedback.display(DELETED);
                true
            }
            Err(err) => {
                tracing::error!("error deleting contact: {}", err);
                self.feedback.display(DELETE_FAILED);
                false
            }
        }
    }
}
