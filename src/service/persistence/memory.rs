use async_trait::async_trait;
use contacts_core::{Contact, ContactPersistence};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Debug, Default)]
pub struct MemoryPersistence {
    contacts: Arc<Mutex<Vec<Contact>>>,
}

impl MemoryPersistence {
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Arc::new(Mutex::new(contacts)),
        }
    }
}

#[async_trait]
impl ContactPersistence for MemoryPersistence {
    async fn load(&self) -> contacts_core::Result<Vec<Contact>> {
        let locked_contacts = self.contacts.lock().await;

        Ok(locked_contacts.clone())
    }

    async fn save(&self, contacts: &[Contact]) -> contacts_core::Result<()> {
        let mut locked_contacts = self.contacts.lock().await;

        *locked_contacts = contacts.to_vec();

        Ok(())
    }
}
