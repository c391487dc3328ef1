use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Mutex, MutexGuard,
};

use crate::{next_contact_id, Contact, ContactApi, ContactError, Result};

/// In-memory stand-in for the contacts backend. `set_failing(true)` makes
/// every call fail with a transport error, the way an unreachable server would.
#[derive(Debug, Default)]
pub struct MockContactApi {
    contacts: Mutex<Vec<Contact>>,
    failing: AtomicBool,
    list_calls: AtomicUsize,
}

impl MockContactApi {
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Mutex::new(contacts),
            ..Default::default()
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<Contact> {
        match self.contacts.lock() {
            Ok(contacts) => contacts.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn get_contacts_locked(&self) -> Result<MutexGuard<Vec<Contact>>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ContactError::Transport("mock api unavailable".to_owned()));
        }

        self.contacts
            .lock()
            .map_err(|_| ContactError::Transport("failed to acquire lock".to_owned()))
    }
}

#[async_trait]
impl ContactApi for MockContactApi {
    async fn list(&self) -> Result<Vec<Contact>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        let contacts = self.get_contacts_locked()?;

        Ok(contacts.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<Contact> {
        let contacts = self.get_contacts_locked()?;

        contacts
            .iter()
            .find(|contact| contact.id == Some(id))
            .cloned()
            .ok_or(ContactError::NotFound(id))
    }

    async fn create(&self, contact: &Contact) -> Result<Contact> {
        let mut contacts = self.get_contacts_locked()?;

        let created = contact.clone().with_id(next_contact_id(&contacts)?);
        contacts.push(created.clone());

        Ok(created)
    }

    async fn update(&self, id: i64, contact: &Contact) -> Result<()> {
        let mut contacts = self.get_contacts_locked()?;

        match contacts.iter_mut().find(|existing| existing.id == Some(id)) {
            Some(existing) => {
                existing.overwrite_fields(contact);
                Ok(())
            }
            None => Err(ContactError::NotFound(id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut contacts = self.get_contacts_locked()?;

        let starting_len = contacts.len();
        contacts.retain(|contact| contact.id != Some(id));

        if contacts.len() == starting_len {
            return Err(ContactError::NotFound(id));
        }

        Ok(())
    }
}
