mod api;
mod error;
mod model;
mod persistence;

pub mod test;

pub use api::{mock, ContactApi};
pub use error::{ContactError, Result};
pub use model::{next_contact_id, Contact};
pub use persistence::ContactPersistence;
