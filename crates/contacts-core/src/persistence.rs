use async_trait::async_trait;

use crate::{Contact, Result};

/// Whole-collection storage for contacts. Every mutation is a full `load`
/// followed by a full `save`; there are no partial writes.
#[async_trait]
pub trait ContactPersistence: Send + Sync {
    async fn load(&self) -> Result<Vec<Contact>>;
    async fn save(&self, contacts: &[Contact]) -> Result<()>;
}
