//! Wikidata query client
//!
//! Rate-limited HTTP client over the public SPARQL endpoint and the
//! `wbgetclaims` action API.
//!
//! # Important
//!
//! Wikimedia endpoints expect a descriptive User-Agent with contact info.

use super::results::ResultSet;
use super::QueryService;
use crate::claims::ClaimSet;
use crate::error::{Error, Result};
use crate::ids::EntityId;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tokio::time::sleep;

const SPARQL_ENDPOINT: &str = "https://query.wikidata.org/sparql";
const ACTION_API_BASE: &str = "https://www.wikidata.org/w/api.php";
const DEFAULT_USER_AGENT: &str = "wikiharvest/0.1 (wikiharvest@example.com)";
const RATE_LIMIT_DELAY_MS: u64 = 250; // ~4 req/sec, polite for the public endpoint

/// Endpoint and identification settings for [`WikidataClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// SPARQL query endpoint URL.
    pub sparql_endpoint: String,
    /// MediaWiki action API base URL (claim fetches).
    pub api_base: String,
    /// User-Agent header sent on every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            sparql_endpoint: SPARQL_ENDPOINT.to_string(),
            api_base: ACTION_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// HTTP client for the public Wikidata service.
pub struct WikidataClient {
    http: Client,
    sparql_endpoint: String,
    api_base: String,
    last_request: Mutex<Instant>,
}

impl WikidataClient {
    /// Create a client with default endpoints and user agent.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client honoring `WIKIHARVEST_USER_AGENT` if set.
    pub fn from_env() -> Result<Self> {
        let mut config = ClientConfig::default();
        if let Ok(agent) = std::env::var("WIKIHARVEST_USER_AGENT") {
            config.user_agent = agent;
        }
        Self::with_config(config)
    }

    /// Create a client with the given configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(config.user_agent)
            .build()
            .context("Failed to create HTTP client")
            .map_err(Error::service)?;

        Ok(Self {
            http,
            sparql_endpoint: config.sparql_endpoint,
            api_base: config.api_base,
            last_request: Mutex::new(Instant::now()),
        })
    }

    /// Enforce rate limiting between requests
    async fn rate_limit(&self) {
        let elapsed = {
            let last = self.last_request.lock().unwrap_or_else(|e| e.into_inner());
            last.elapsed()
        };

        if elapsed < Duration::from_millis(RATE_LIMIT_DELAY_MS) {
            sleep(Duration::from_millis(RATE_LIMIT_DELAY_MS) - elapsed).await;
        }

        let mut last = self.last_request.lock().unwrap_or_else(|e| e.into_inner());
        *last = Instant::now();
    }

    /// Make a GET request and parse the JSON body
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        what: &str,
    ) -> anyhow::Result<T> {
        self.rate_limit().await;

        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", what))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "Wikidata service error {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            ));
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse response for {}", what))
    }
}

/// Envelope of a `wbgetclaims` response.
#[derive(Debug, Deserialize)]
struct WbGetClaimsResponse {
    claims: ClaimSet,
}

#[async_trait]
impl QueryService for WikidataClient {
    async fn query(&self, sparql: &str) -> Result<ResultSet> {
        let url = format!(
            "{}?query={}&format=json",
            self.sparql_endpoint,
            urlencoding::encode(sparql)
        );
        tracing::debug!(endpoint = %self.sparql_endpoint, "executing SPARQL query");
        self.get_json(&url, "SPARQL query").await.map_err(Error::service)
    }

    async fn get_claims(&self, entity: &EntityId) -> Result<ClaimSet> {
        let url = format!(
            "{}?action=wbgetclaims&entity={}&format=json",
            self.api_base,
            urlencoding::encode(entity.as_str())
        );
        tracing::debug!(entity = %entity, "fetching claims");
        let response: WbGetClaimsResponse = self
            .get_json(&url, &format!("claims of {}", entity))
            .await
            .map_err(Error::service)?;
        Ok(response.claims)
    }
}
