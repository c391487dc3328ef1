use contacts_core::{Contact, ContactApi, ContactError, Result};
use std::sync::Arc;
use tokio::sync::watch;

/// Client-side access to contacts. The last successfully listed collection is
/// published through a `watch` channel; mutations never refresh it on their own.
pub struct ContactDataService {
    api: Arc<dyn ContactApi>,
    contacts: watch::Sender<Vec<Contact>>,
}

impl ContactDataService {
    pub fn new(api: Arc<dyn ContactApi>) -> Self {
        let (contacts, _) = watch::channel(Vec::new());

        Self { api, contacts }
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Contact>> {
        self.contacts.subscribe()
    }

    pub fn current(&self) -> Vec<Contact> {
        self.contacts.borrow().clone()
    }

    /// Re-lists contacts and publishes them. A failed list keeps the
    /// previously published collection and returns false.
    pub async fn refresh(&self) -> bool {
        match self.api.list().await {
            Ok(contacts) => {
                self.contacts.send_replace(contacts);
                true
            }
            Err(err) => {
                tracing::warn!("refreshing contacts failed, keeping previous list: {}", err);
                false
            }
        }
    }

    pub async fn get(&self, id: i64) -> Result<Contact> {
        self.api.get_by_id(id).await
    }

    /// Creates a contact; the id is always assigned by the backend.
    pub async fn create(&self, contact: &Contact) -> Result<Contact> {
        let new_contact = Contact {
            id: None,
            ..contact.clone()
        };

        self.api.create(&new_contact).await
    }

    pub async fn update(&self, contact: &Contact) -> Result<()> {
        let id = contact.id.ok_or_else(|| {
            ContactError::Validation("contact to update has no id".to_owned())
        })?;

        self.api.update(id, contact).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(id).await
    }
}
