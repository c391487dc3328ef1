use async_trait::async_trait;
use contacts_core::{Contact, ContactApi, ContactError, Result};
use reqwest::{Response, StatusCode};
use url::Url;

/// `ContactApi` over the contacts HTTP service.
#[derive(Clone, Debug)]
pub struct HttpContactClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpContactClient {
    pub fn new(endpoint: &str) -> anyhow::Result<Self> {
        let mut endpoint = Url::parse(endpoint)?;

        // joins are relative to the last path segment
        if !endpoint.path().ends_with('/') {
            let path = format!("{}/", endpoint.path());
            endpoint.set_path(&path);
        }

        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn contacts_url(&self, id: Option<i64>) -> Result<Url> {
        let path = match id {
            Some(id) => format!("contacts/{id}"),
            None => "contacts".to_owned(),
        };

        self.endpoint
            .join(&path)
            .map_err(|err| ContactError::Transport(err.to_string()))
    }
}

fn transport_error(err: reqwest::Error) -> ContactError {
    ContactError::Transport(err.to_string())
}

fn check_status(response: Response, id: Option<i64>, expected: StatusCode) -> Result<Response> {
    match response.status() {
        status if status == expected => Ok(response),
        StatusCode::NOT_FOUND => match id {
            Some(id) => Err(ContactError::NotFound(id)),
            None => Err(ContactError::Transport(format!(
                "{} not found",
                response.url()
            ))),
        },
        status => Err(ContactError::Transport(format!(
            "{} returned {}, expected {}",
            response.url(),
            status,
            expected
        ))),
    }
}

#[async_trait]
impl ContactApi for HttpContactClient {
    #[tracing::instrument(name = "client::list", skip(self))]
    async fn list(&self) -> Result<Vec<Contact>> {
        let response = self
            .http
            .get(self.contacts_url(None)?)
            .send()
            .await
            .map_err(transport_error)?;

        check_status(response, None, StatusCode::OK)?
            .json()
            .await
            .map_err(transport_error)
    }

    #[tracing::instrument(name = "client::get_by_id", skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Contact> {
        let response = self
            .http
            .get(self.contacts_url(Some(id))?)
            .send()
            .await
            .map_err(transport_error)?;

        check_status(response, Some(id), StatusCode::OK)?
            .json()
            .await
            .map_err(transport_error)
    }

    #[tracing::instrument(name = "client::create", skip_all)]
    async fn create(&self, contact: &Contact) -> Result<Contact> {
        let response = self
            .http
            .post(self.contacts_url(None)?)
            .json(contact)
            .send()
            .await
            .map_err(transport_error)?;

        check_status(response, None, StatusCode::CREATED)?
            .json()
            .await
            .map_err(transport_error)
    }

    #[tracing::instrument(name = "client::update", skip(self, contact))]
    async fn update(&self, id: i64, contact: &Contact) -> Result<()> {
        let response = self
            .http
            .put(self.contacts_url(Some(id))?)
            .json(contact)
            .send()
            .await
            .map_err(transport_error)?;

        check_status(response, Some(id), StatusCode::NO_CONTENT)?;

        Ok(())
    }

    #[tracing::instrument(name = "client::delete", skip(self))]
    async fn delete(&self, id: i64) -> Result<()> {
        let response = self
            .http
            .delete(self.contacts_url(Some(id))?)
            .send()
            .await
            .map_err(transport_error)?;

        check_status(response, Some(id), StatusCode::NO_CONTENT)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contacts_urls() {
        let client = HttpContactClient::new("http://localhost:7099").unwrap();
        assert_eq!(
            client.contacts_url(None).unwrap().as_str(),
            "http://localhost:7099/contacts"
        );
        assert_eq!(
            client.contacts_url(Some(3)).unwrap().as_str(),
            "http://localhost:7099/contacts/3"
        );

        let client = HttpContactClient::new("https://example.com/api").unwrap();
        assert_eq!(
            client.contacts_url(Some(3)).unwrap().as_str(),
            "https://example.com/api/contacts/3"
        );
    }

    #[test]
    fn test_invalid_endpoint() {
        assert!(HttpContactClient::new("not a url").is_err());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let client = HttpContactClient::new("http://127.0.0.1:1").unwrap();

        let err = client.list().await.unwrap_err();

        assert!(matches!(err, ContactError::Transport(_)));
    }
}
