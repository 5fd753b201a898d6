use crate::core::currency::CurrencyProvider;
use crate::providers::util::parse_json_flexible;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Frankfurter exchange-rate API: currency listing plus amount conversion.
pub struct FrankfurterProvider {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl FrankfurterProvider {
    pub fn new(base_url: &str, timeout_ms: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("quotefx/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(FrankfurterProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    rates: HashMap<String, f64>,
}

#[async_trait]
impl CurrencyProvider for FrankfurterProvider {
    async fn currencies(&self) -> Result<Vec<String>> {
        let url = format!("{}/currencies", self.base_url);
        debug!("Requesting currency list from {}", url);
        let response = self.client.get(&url).timeout(self.timeout).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: {} for currency list", response.status()));
        }

        let body = response.text().await?;
        // serde_json's preserve_order keeps the dropdown order identical to
        // the response order.
        let currencies: serde_json::Map<String, serde_json::Value> = parse_json_flexible(&body)?;
        Ok(currencies.keys().cloned().collect())
    }

    async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64> {
        let url = Url::parse_with_params(
            &format!("{}/latest", self.base_url),
            [
                ("amount", amount.to_string().as_str()),
                ("from", from),
                ("to", to),
            ],
        )?;
        debug!(%url, "Requesting conversion");
        let response = self.client.get(url).timeout(self.timeout).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for conversion {} -> {}",
                response.status(),
                from,
                to
            ));
        }

        let body = response.text().await?;
        let data: LatestResponse = parse_json_flexible(&body)?;
        data.rates
            .get(to)
            .copied()
            .ok_or_else(|| anyhow!("No rate found for currency: {to}"))
    }
}
