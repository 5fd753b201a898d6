use crate::core::quote::{Quote, QuoteProvider};
use crate::providers::relay::RelayClient;
use crate::providers::util::{matches_keyword, parse_json_flexible};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

/// ZenQuotes: one-element list with `q`/`a` fields. The endpoint rate-limits
/// aggressively and signals it inside an HTTP 200 body, so responses go
/// through a content heuristic before being accepted.
pub struct ZenQuotesProvider {
    base_url: String,
    relay: Arc<RelayClient>,
}

impl ZenQuotesProvider {
    pub fn new(base_url: &str, relay: Arc<RelayClient>) -> Self {
        ZenQuotesProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            relay,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ZenQuote {
    q: String,
    a: Option<String>,
}

// Known rate-limit phrasing; the author field carries the site domain when the
// body is a service message rather than a quote.
fn looks_rate_limited(text: &str, author: &str) -> bool {
    text.to_lowercase().contains("too many requests")
        || author.to_lowercase().contains("zenquotes.io")
}

#[async_trait]
impl QuoteProvider for ZenQuotesProvider {
    fn name(&self) -> &'static str {
        "ZenQuotes"
    }

    async fn fetch_quote(&self, filter: Option<&str>) -> Result<Quote> {
        let url = format!(
            "{}/api/random?ts={}",
            self.base_url,
            Utc::now().timestamp_millis()
        );
        let response = self.relay.get(&url).await?;
        let body = response.text().await?;
        let quotes: Vec<ZenQuote> = parse_json_flexible(&body)?;
        let item = quotes
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("ZenQuotes returned an empty list"))?;

        let author = item.a.unwrap_or_default();
        if looks_rate_limited(&item.q, &author) {
            warn!("ZenQuotes rate-limited, skipping to next provider");
            return Err(anyhow!("ZenQuotes is rate-limited"));
        }
        if item.q.is_empty() {
            return Err(anyhow!("ZenQuotes returned an empty quote"));
        }
        if let Some(keyword) = filter {
            if !matches_keyword(&item.q, &author, keyword) {
                return Err(anyhow!("ZenQuotes quote did not match keyword: {keyword}"));
            }
        }
        Ok(Quote::new(item.q, author))
    }
}
