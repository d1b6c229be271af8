//! Remote resource access.
//!
//! The pipeline only ever reads JSON by URL, so the seam is a single
//! [`Transport`] method. [`ResourceGateway`] layers the catalog's URL scheme
//! and typed decoding on top of whichever transport it is given.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::config::PokedexConfig;
use crate::errors::{ConfigError, MalformedDataError, PokedexResult, ResourceFetchError};
use schema::{EntryDetail, EntryPage, SpeciesInfo};

#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` and return the parsed JSON body.
    async fn get_json(&self, url: &str) -> PokedexResult<Value>;
}

/// Transport backed by a shared `reqwest` client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> PokedexResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pokedex-explorer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> PokedexResult<Value> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ResourceFetchError::Transport {
                url: url.to_string(),
                details: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResourceFetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| MalformedDataError::Undecodable {
                url: url.to_string(),
                details: e.to_string(),
            })?;
        Ok(body)
    }
}

/// Typed access to the catalog API.
pub struct ResourceGateway<T> {
    transport: T,
    base_url: String,
}

impl ResourceGateway<HttpTransport> {
    pub fn from_config(config: &PokedexConfig) -> PokedexResult<Self> {
        let transport = HttpTransport::new(Duration::from_secs(config.request_timeout_secs))?;
        Ok(Self::new(transport, &config.api_base_url))
    }
}

impl<T: Transport> ResourceGateway<T> {
    pub fn new(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// One page of the entry listing.
    pub async fn fetch_entry_page(&self, limit: u32, offset: u32) -> PokedexResult<EntryPage> {
        let url = format!("{}/pokemon?limit={}&offset={}", self.base_url, limit, offset);
        self.fetch_resource(&url).await
    }

    /// The primary record for an entry. Identifiers are case-insensitive.
    pub async fn fetch_entry_detail(&self, id_or_name: &str) -> PokedexResult<EntryDetail> {
        let url = self.entry_url("pokemon", id_or_name);
        self.fetch_resource(&url).await
    }

    /// The species record for an entry. Identifiers are case-insensitive.
    pub async fn fetch_entry_species(&self, id_or_name: &str) -> PokedexResult<SpeciesInfo> {
        let url = self.entry_url("pokemon-species", id_or_name);
        self.fetch_resource(&url).await
    }

    /// Fetch any resource by absolute URL; the caller names the expected shape.
    pub async fn fetch_resource<R: DeserializeOwned>(&self, url: &str) -> PokedexResult<R> {
        debug!(url, "fetching resource");
        let body = self.transport.get_json(url).await?;
        let resource = serde_json::from_value(body).map_err(|e| MalformedDataError::Undecodable {
            url: url.to_string(),
            details: e.to_string(),
        })?;
        Ok(resource)
    }

    pub fn entry_url(&self, endpoint: &str, id_or_name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            endpoint,
            id_or_name.trim().to_lowercase()
        )
    }
}
