use crate::core::quote::{Quote, QuoteProvider};
use crate::providers::relay::RelayClient;
use crate::providers::util::{matches_keyword, parse_json_flexible};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

/// DummyJSON: single random quote; keyword filtering is client-side.
pub struct DummyJsonProvider {
    base_url: String,
    relay: Arc<RelayClient>,
}

impl DummyJsonProvider {
    pub fn new(base_url: &str, relay: Arc<RelayClient>) -> Self {
        DummyJsonProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            relay,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DummyJsonQuote {
    #[serde(alias = "text")]
    quote: String,
    author: Option<String>,
}

#[async_trait]
impl QuoteProvider for DummyJsonProvider {
    fn name(&self) -> &'static str {
        "DummyJSON"
    }

    async fn fetch_quote(&self, filter: Option<&str>) -> Result<Quote> {
        let url = format!(
            "{}/quotes/random?ts={}",
            self.base_url,
            Utc::now().timestamp_millis()
        );
        let response = self.relay.get(&url).await?;
        let body = response.text().await?;
        let item: DummyJsonQuote = parse_json_flexible(&body)?;

        let author = item.author.unwrap_or_default();
        if item.quote.is_empty() {
            return Err(anyhow!("DummyJSON returned an empty quote"));
        }
        if let Some(keyword) = filter {
            if !matches_keyword(&item.quote, &author, keyword) {
                return Err(anyhow!("DummyJSON quote did not match keyword: {keyword}"));
            }
        }
        Ok(Quote::new(item.quote, author))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(server: &MockServer) -> DummyJsonProvider {
        let relay =
            Arc::new(RelayClient::new("http://127.0.0.1:1", "http://127.0.0.1:1", false, 5_000).unwrap());
        DummyJsonProvider::new(&server.uri(), relay)
    }

    async fn mock_random(server: &MockServer, body: &str) {
        Mock::given(method("GET"))
            .and(path("/quotes/random"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_random_quote() {
        let server = MockServer::start().await;
        mock_random(
            &server,
            r#"{"id": 1, "quote": "Dream big.", "author": "Anon"}"#,
        )
        .await;

        let quote = provider(&server).fetch_quote(None).await.unwrap();
        assert_eq!(quote.text, "Dream big.");
        assert_eq!(quote.author.as_deref(), Some("Anon"));
    }

    #[tokio::test]
    async fn test_text_field_alias() {
        let server = MockServer::start().await;
        mock_random(&server, r#"{"text": "Dream big.", "author": "Anon"}"#).await;

        let quote = provider(&server).fetch_quote(None).await.unwrap();
        assert_eq!(quote.text, "Dream big.");
    }

    #[tokio::test]
    async fn test_keyword_mismatch_is_rejected() {
        let server = MockServer::start().await;
        mock_random(
            &server,
            r#"{"quote": "Dream big.", "author": "Anon"}"#,
        )
        .await;

        let err = provider(&server)
            .fetch_quote(Some("courage"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("did not match keyword"));
    }

    #[tokio::test]
    async fn test_keyword_match_in_author_is_accepted() {
        let server = MockServer::start().await;
        mock_random(
            &server,
            r#"{"quote": "Dream big.", "author": "Eleanor Roosevelt"}"#,
        )
        .await;

        let quote = provider(&server)
            .fetch_quote(Some("roosevelt"))
            .await
            .unwrap();
        assert_eq!(quote.text, "Dream big.");
    }
}
