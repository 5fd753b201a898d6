//! Multi-relay fetch helper.
//!
//! Public quote endpoints are unreliable from restricted networks, so every
//! fetch is attempted directly first and then through CORS-style relay
//! endpoints, each attempt bounded by its own timeout. The first response with
//! a success status wins; otherwise the last error is raised.

use anyhow::{Result, anyhow};
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relay {
    Direct,
    AllOrigins,
    Jina,
}

impl std::fmt::Display for Relay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relay::Direct => write!(f, "direct"),
            Relay::AllOrigins => write!(f, "allorigins"),
            Relay::Jina => write!(f, "jina"),
        }
    }
}

pub struct RelayClient {
    client: reqwest::Client,
    allorigins_base: String,
    jina_base: String,
    force_proxy: bool,
    timeout: Duration,
}

impl RelayClient {
    pub fn new(
        allorigins_base: &str,
        jina_base: &str,
        force_proxy: bool,
        timeout_ms: u64,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("quotefx/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(RelayClient {
            client,
            allorigins_base: allorigins_base.trim_end_matches('/').to_string(),
            jina_base: jina_base.trim_end_matches('/').to_string(),
            force_proxy,
            timeout: Duration::from_millis(timeout_ms),
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Wraps a target URL for the given relay.
    pub fn proxy_url(&self, relay: Relay, url: &str) -> Result<Url> {
        match relay {
            Relay::Direct => Url::parse(url).map_err(|e| anyhow!("Invalid URL {url}: {e}")),
            Relay::AllOrigins => {
                Url::parse_with_params(&format!("{}/raw", self.allorigins_base), [("url", url)])
                    .map_err(|e| anyhow!("Invalid relay URL: {e}"))
            }
            Relay::Jina => {
                let stripped = url
                    .trim_start_matches("https://")
                    .trim_start_matches("http://");
                Url::parse(&format!("{}/http://{}", self.jina_base, stripped))
                    .map_err(|e| anyhow!("Invalid relay URL: {e}"))
            }
        }
    }

    /// Fetches the URL, falling back through the relays in order.
    pub async fn get(&self, url: &str) -> Result<reqwest::Response> {
        let relays: &[Relay] = if self.force_proxy {
            &[Relay::AllOrigins, Relay::Jina]
        } else {
            &[Relay::Direct, Relay::AllOrigins, Relay::Jina]
        };

        let mut last_error = None;
        for relay in relays {
            let target = self.proxy_url(*relay, url)?;
            debug!(%relay, %target, "Fetching");
            match self
                .client
                .get(target)
                .timeout(self.timeout)
                .send()
                .await
            {
                Ok(response) if response.status().is_success() => {
                    debug!(%relay, "Fetch succeeded");
                    return Ok(response);
                }
                Ok(response) => {
                    warn!(%relay, status = %response.status(), "Non-success status");
                    last_error = Some(anyhow!("{} status {}", relay, response.status()));
                }
                Err(e) => {
                    warn!(%relay, error = %e, "Fetch attempt failed");
                    last_error = Some(anyhow!("{relay}: {e}"));
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow!("All fetch attempts failed")))
    }
}
