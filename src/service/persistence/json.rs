use async_trait::async_trait;
use contacts_core::{Contact, ContactPersistence};
use serde::Deserialize;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use uuid::Uuid;

/// Stores the whole contact collection as one pretty-printed JSON array.
#[derive(Clone, Debug)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path
            .with_extension(format!("{}.tmp", Uuid::new_v4().simple()))
    }
}

// Every persisted record carries an id; the wire model leaves it optional.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredContact {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
}

impl From<StoredContact> for Contact {
    fn from(stored: StoredContact) -> Self {
        Contact {
            id: Some(stored.id),
            first_name: stored.first_name,
            last_name: stored.last_name,
            email: stored.email,
            phone: stored.phone,
        }
    }
}

#[async_trait]
impl ContactPersistence for JsonFilePersistence {
    #[tracing::instrument(name = "persistence::json::load", skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> contacts_core::Result<Vec<Contact>> {
        let contacts_json = match tokio::fs::read_to_string(&self.path).await {
            Ok(contacts_json) => contacts_json,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        if contacts_json.trim().is_empty() {
            return Ok(Vec::new());
        }

        let stored_contacts: Option<Vec<StoredContact>> = serde_json::from_str(&contacts_json)?;

        Ok(stored_contacts
            .unwrap_or_default()
            .into_iter()
            .map(Contact::from)
            .collect())
    }

    #[tracing::instrument(name = "persistence::json::save", skip_all, fields(path = %self.path.display(), count = contacts.len()))]
    async fn save(&self, contacts: &[Contact]) -> contacts_core::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let contacts_json = serde_json::to_vec_pretty(contacts)?;

        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, contacts_json).await?;

        if let Err(err) = tokio::fs::rename(&temp_path, &self.path).await {
            if let Err(cleanup_err) = tokio::fs::remove_file(&temp_path).await {
                tracing::warn!(
                    "failed to remove temp file {}: {}",
                    temp_path.display(),
                    cleanup_err
                );
            }

            return Err(err.into());
        }

        Ok(())
    }
}
