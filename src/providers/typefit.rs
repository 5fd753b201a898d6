use crate::core::quote::{Quote, QuoteProvider};
use crate::providers::relay::RelayClient;
use crate::providers::util::{matches_keyword, parse_json_flexible, pick_random};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Type.fit: serves its full quote list in one response; filter client-side
/// and pick uniformly at random from the pool.
pub struct TypeFitProvider {
    base_url: String,
    relay: Arc<RelayClient>,
}

impl TypeFitProvider {
    pub fn new(base_url: &str, relay: Arc<RelayClient>) -> Self {
        TypeFitProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            relay,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TypeFitQuote {
    text: String,
    author: Option<String>,
}

#[async_trait]
impl QuoteProvider for TypeFitProvider {
    fn name(&self) -> &'static str {
        "Type.fit"
    }

    async fn fetch_quote(&self, filter: Option<&str>) -> Result<Quote> {
        let url = format!("{}/api/quotes", self.base_url);
        let response = self.relay.get(&url).await?;
        let body = response.text().await?;
        let list: Vec<TypeFitQuote> = parse_json_flexible(&body)?;

        let pool: Vec<&TypeFitQuote> = match filter {
            Some(keyword) => list
                .iter()
                .filter(|q| matches_keyword(&q.text, q.author.as_deref().unwrap_or(""), keyword))
                .collect(),
            None => list.iter().collect(),
        };
        debug!(total = list.len(), pool = pool.len(), "Type.fit list filtered");

        match pick_random(&pool) {
            Some(item) => Ok(Quote::new(
                item.text.clone(),
                item.author.clone().unwrap_or_default(),
            )),
            None => Err(anyhow!("Type.fit had no matching quotes")),
        }
    }
}
