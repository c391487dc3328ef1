use async_trait::async_trait;
use contacts_core::{
    next_contact_id, Contact, ContactApi, ContactError, ContactPersistence, Result,
};
use tokio::sync::Mutex;

/// CRUD over the persisted contact collection. Every mutation loads the full
/// collection, changes it and saves it back.
pub struct ContactService {
    pub persistence: Box<dyn ContactPersistence>,

    // held across load -> save so mutations within this process don't race
    write_lock: Mutex<()>,
}

impl ContactService {
    pub fn new(persistence: Box<dyn ContactPersistence>) -> Self {
        Self {
            persistence,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn list(&self) -> Result<Vec<Contact>> {
        self.persistence.load().await
    }

    pub async fn get_by_id(&self, contact_id: i64) -> Result<Contact> {
        let contacts = self.persistence.load().await?;

        contacts
            .into_iter()
            .find(|contact| contact.id == Some(contact_id))
            .ok_or(ContactError::NotFound(contact_id))
    }

    pub async fn create(&self, contact: &Contact) -> Result<Contact> {
        let _guard = self.write_lock.lock().await;

        let mut contacts = self.persistence.load().await?;

        let created_contact = contact.clone().with_id(next_contact_id(&contacts)?);
        contacts.push(created_contact.clone());

        self.persistence.save(&contacts).await?;

        tracing::info!("contact {:?} created", created_contact.id);

        Ok(created_contact)
    }

    pub async fn update(&self, contact_id: i64, contact: &Contact) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut contacts = self.persistence.load().await?;

        let contact_to_update = match contacts
            .iter_mut()
            .find(|existing| existing.id == Some(contact_id))
        {
            Some(contact_to_update) => contact_to_update,
            None => return Err(ContactError::NotFound(contact_id)),
        };

        contact_to_update.overwrite_fields(contact);

        self.persistence.save(&contacts).await?;

        tracing::info!("contact {contact_id} updated");

        Ok(())
    }

    pub async fn delete(&self, contact_id: i64) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut contacts = self.persistence.load().await?;

        let position = match contacts
            .iter()
            .position(|contact| contact.id == Some(contact_id))
        {
            Some(position) => position,
            None => return Err(ContactError::NotFound(contact_id)),
        };

        contacts.remove(position);

        self.persistence.save(&contacts).await?;

        tracing::info!("contact {contact_id} deleted");

        Ok(())
    }
}

#[async_trait]
impl ContactApi for ContactService {
    async fn list(&self) -> Result<Vec<Contact>> {
        ContactService::list(self).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Contact> {
        ContactService::get_by_id(self, id).await
    }

    async fn create(&self, contact: &Contact) -> Result<Contact> {
        ContactService::create(self, contact).await
    }

    async fn update(&self, id: i64, contact: &Contact) -> Result<()> {
        ContactService::update(self, id, contact).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        ContactService::delete(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use contacts_core::test::{get_contact_fixture, get_second_contact_fixture};
    use std::sync::Arc;

    use super::*;

    use crate::persistence::{JsonFilePersistence, MemoryPersistence};

    fn service_with(contacts: Vec<Contact>) -> (ContactService, MemoryPersistence) {
        let contact_persistence = MemoryPersistence::with_contacts(contacts);
        let contact_service = ContactService::new(Box::new(contact_persistence.clone()));

        (contact_service, contact_persistence)
    }

    #[tokio::test]
    async fn test_create_on_empty_store_assigns_one() {
        let (contact_service, contact_persistence) = service_with(Vec::new());

        let created_contact = contact_service
            .create(&get_contact_fixture(None))
            .await
            .unwrap();

        assert_eq!(created_contact.id, Some(1));

        let stored_contacts = contact_persistence.load().await.unwrap();
        assert_eq!(stored_contacts, vec![get_contact_fixture(Some(1))]);
    }

    #[tokio::test]
    async fn test_create_assigns_max_plus_one() {
        let (contact_service, _) = service_with(vec![get_second_contact_fixture(Some(1))]);

        let created_contact = contact_service
            .create(&get_contact_fixture(None))
            .await
            .unwrap();
        assert_eq!(created_contact.id, Some(2));

        let (contact_service, _) = service_with(vec![
            get_second_contact_fixture(Some(9)),
            get_second_contact_fixture(Some(4)),
        ]);

        let created_contact = contact_service
            .create(&get_contact_fixture(None))
            .await
            .unwrap();
        assert_eq!(created_contact.id, Some(10));
    }

    #[tokio::test]
    async fn test_create_with_exhausted_ids_leaves_store_untouched() {
        let (contact_service, contact_persistence) =
            service_with(vec![get_second_contact_fixture(Some(i64::MAX))]);

        let err = contact_service
            .create(&get_contact_fixture(None))
            .await
            .unwrap_err();
        assert!(matches!(err, ContactError::IdsExhausted));

        let stored_contacts = contact_persistence.load().await.unwrap();
        assert_eq!(stored_contacts, vec![get_second_contact_fixture(Some(i64::MAX))]);
    }

    #[tokio::test]
    async fn test_create_ignores_caller_id() {
        let (contact_service, _) = service_with(vec![get_second_contact_fixture(Some(1))]);

        let created_contact = contact_service
            .create(&get_contact_fixture(Some(77)))
            .await
            .unwrap();

        assert_eq!(created_contact.id, Some(2));
    }

    #[tokio::test]
    async fn test_update_keeps_id() {
        let (contact_service, contact_persistence) =
            service_with(vec![get_second_contact_fixture(Some(1))]);

        contact_service
            .update(1, &get_contact_fixture(Some(5)))
            .await
            .unwrap();

        let stored_contacts = contact_persistence.load().await.unwrap();
        assert_eq!(stored_contacts, vec![get_contact_fixture(Some(1))]);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let (contact_service, contact_persistence) =
            service_with(vec![get_second_contact_fixture(Some(1))]);

        let err = contact_service
            .update(2, &get_contact_fixture(Some(2)))
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let stored_contacts = contact_persistence.load().await.unwrap();
        assert_eq!(stored_contacts, vec![get_second_contact_fixture(Some(1))]);
    }

    #[tokio::test]
    async fn test_delete() {
        let (contact_service, contact_persistence) = service_with(vec![
            get_contact_fixture(Some(1)),
            get_second_contact_fixture(Some(2)),
        ]);

        contact_service.delete(1).await.unwrap();

        let stored_contacts = contact_persistence.load().await.unwrap();
        assert_eq!(stored_contacts, vec![get_second_contact_fixture(Some(2))]);

        let err = contact_service.delete(1).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(contact_persistence.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let (contact_service, _) = service_with(vec![get_contact_fixture(Some(3))]);

        let fetched_contact = contact_service.get_by_id(3).await.unwrap();
        assert_eq!(fetched_contact.first_name, "John");

        assert!(contact_service.get_by_id(4).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_concurrent_creates_do_not_lose_updates() {
        let dir = tempfile::tempdir().unwrap();
        let contact_persistence = JsonFilePersistence::new(dir.path().join("contacts.json"));
        let contact_service = Arc::new(ContactService::new(Box::new(contact_persistence)));

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let contact_service = Arc::clone(&contact_service);
                tokio::spawn(async move {
                    contact_service
                        .create(&get_contact_fixture(None))
                        .await
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        let mut ids: Vec<i64> = contact_service
            .list()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|contact| contact.id)
            .collect();
        ids.sort_unstable();

        assert_eq!(ids, (1..=10).collect::<Vec<i64>>());
    }
}
