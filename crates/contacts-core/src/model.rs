use serde::{Deserialize, Serialize};

use crate::{ContactError, Result};

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    pub fn new(first_name: &str, last_name: &str, email: &str, phone: &str) -> Self {
        Self {
            id: None,
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: email.to_owned(),
            phone: phone.to_owned(),
        }
    }

    pub fn with_id(self, id: i64) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    /// Overwrites every field except the id.
    pub fn overwrite_fields(&mut self, other: &Contact) {
        self.first_name = other.first_name.clone();
        self.last_name = other.last_name.clone();
        self.email = other.email.clone();
        self.phone = other.phone.clone();
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The id the store hands to the next created contact: one past the
/// current maximum, or 1 for an empty collection.
pub fn next_contact_id(contacts: &[Contact]) -> Result<i64> {
    match contacts.iter().filter_map(|contact| contact.id).max() {
        Some(max_id) => max_id.checked_add(1).ok_or(ContactError::IdsExhausted),
        None => Ok(1),
    }
}
