use async_trait::async_trait;

use crate::{Contact, Result};

pub mod mock;

/// The operations the client side needs from the contacts backend.
#[async_trait]
pub trait ContactApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Contact>>;
    async fn get_by_id(&self, id: i64) -> Result<Contact>;
    async fn create(&self, contact: &Contact) -> Result<Contact>;
    async fn update(&self, id: i64, contact: &Contact) -> Result<()>;
    async fn delete(&self, id: i64) -> Result<()>;
}
