use contacts_client::{ContactDataService, ContactsListView, HttpContactClient};
use contacts_core::ContactApi;
use std::sync::Arc;

const DEFAULT_ENDPOINT: &str = "http://localhost:7099";

pub struct Context {
    pub endpoint: String,
    pub data_service: Arc<ContactDataService>,
}

impl Context {
    pub fn from_env() -> anyhow::Result<Self> {
        let endpoint =
            dotenvy::var("CONTACTS_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_owned());

        let client: Arc<dyn ContactApi> = Arc::new(HttpContactClient::new(&endpoint)?);
        let data_service = Arc::new(ContactDataService::new(client));

        Ok(Self {
            endpoint,
            data_service,
        })
    }

    pub fn list_view(&self) -> ContactsListView {
        ContactsListView::new(Arc::clone(&self.data_service))
    }
}

/// Prints the list view's feedback message, or fails with it.
pub fn report(list_view: &ContactsListView, succeeded: bool) -> anyhow::Result<()> {
    let message = list_view.feedback_message().unwrap_or_default();

    if !succeeded {
        return Err(anyhow::anyhow!(message));
    }

    println!("{message}");

    Ok(())
}
