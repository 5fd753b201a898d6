use crate::core::quote::{Quote, QuoteProvider};
use crate::providers::relay::RelayClient;
use crate::providers::util::{parse_json_flexible, pick_random};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Url;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Quotable: random endpoint, or a server-side contains search when a keyword
/// is set.
pub struct QuotableProvider {
    base_url: String,
    relay: Arc<RelayClient>,
}

impl QuotableProvider {
    pub fn new(base_url: &str, relay: Arc<RelayClient>) -> Self {
        QuotableProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            relay,
        }
    }
}

#[derive(Debug, Deserialize)]
struct QuotableQuote {
    content: String,
    author: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuotableSearchResponse {
    results: Vec<QuotableQuote>,
}

impl From<QuotableQuote> for Quote {
    fn from(q: QuotableQuote) -> Quote {
        Quote::new(q.content, q.author.unwrap_or_default())
    }
}

#[async_trait]
impl QuoteProvider for QuotableProvider {
    fn name(&self) -> &'static str {
        "Quotable"
    }

    async fn fetch_quote(&self, filter: Option<&str>) -> Result<Quote> {
        let ts = Utc::now().timestamp_millis().to_string();

        if let Some(keyword) = filter {
            let url = Url::parse_with_params(
                &format!("{}/search/quotes", self.base_url),
                [("query", keyword), ("limit", "50"), ("ts", &ts)],
            )?;
            let response = self.relay.get(url.as_str()).await?;
            let body = response.text().await?;
            let search: QuotableSearchResponse = parse_json_flexible(&body)?;
            debug!(results = search.results.len(), "Quotable search completed");

            return match pick_random(&search.results) {
                Some(item) => Ok(Quote::new(
                    item.content.clone(),
                    item.author.clone().unwrap_or_default(),
                )),
                None => Err(anyhow!("Quotable search returned no matches for: {keyword}")),
            };
        }

        let url = format!("{}/random?ts={}", self.base_url, ts);
        let response = self.relay.get(&url).await?;
        let body = response.text().await?;
        let quote: QuotableQuote = parse_json_flexible(&body)?;
        if quote.content.is_empty() {
            return Err(anyhow!("Quotable returned an empty quote"));
        }
        Ok(quote.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(server: &MockServer) -> QuotableProvider {
        let relay =
            Arc::new(RelayClient::new("http://127.0.0.1:1", "http://127.0.0.1:1", false, 5_000).unwrap());
        QuotableProvider::new(&server.uri(), relay)
    }

    #[tokio::test]
    async fn test_random_quote() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/random"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"content": "Be curious.", "author": "Stephen Hawking"}"#,
            ))
            .mount(&server)
            .await;

        let quote = provider(&server).fetch_quote(None).await.unwrap();
        assert_eq!(quote.text, "Be curious.");
        assert_eq!(quote.author.as_deref(), Some("Stephen Hawking"));
    }

    #[tokio::test]
    async fn test_search_picks_from_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/quotes"))
            .and(query_param("query", "curious"))
            .and(query_param("limit", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"results": [{"content": "Be curious.", "author": "Stephen Hawking"}]}"#,
            ))
            .mount(&server)
            .await;

        let quote = provider(&server).fetch_quote(Some("curious")).await.unwrap();
        assert_eq!(quote.text, "Be curious.");
    }

    #[tokio::test]
    async fn test_search_with_no_results_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/quotes"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"results": []}"#))
            .mount(&server)
            .await;

        let err = provider(&server)
            .fetch_quote(Some("nomatch"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("no matches"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/random"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let err = provider(&server).fetch_quote(None).await.unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON:"));
    }
}
