use std::{net::SocketAddr, path::PathBuf};

const DEFAULT_ENDPOINT: &str = "127.0.0.1:7099";
const DEFAULT_DATA_FILE: &str = "Data/contacts.json";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceConfig {
    pub endpoint: SocketAddr,
    pub data_file: PathBuf,
}

impl ServiceConfig {
    /// Reads `ENDPOINT` and `CONTACTS_DATA_FILE` from the environment (and `.env`).
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let endpoint = lookup("ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());
        let endpoint = endpoint
            .parse::<SocketAddr>()
            .map_err(|err| anyhow::anyhow!("invalid ENDPOINT '{endpoint}': {err}"))?;

        let data_file = lookup("CONTACTS_DATA_FILE")
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_owned())
            .into();

        Ok(Self {
            endpoint,
            data_file,
        })
    }
}
