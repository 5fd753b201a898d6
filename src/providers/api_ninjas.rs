use crate::core::quote::{Quote, QuoteProvider};
use crate::providers::util::parse_json_flexible;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// API Ninjas: the only keyed provider. It needs an `X-Api-Key` header, which
/// relays do not forward reliably, so it always fetches direct.
pub struct ApiNinjasProvider {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl ApiNinjasProvider {
    pub fn new(base_url: &str, api_key: &str, timeout_ms: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("quotefx/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(ApiNinjasProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}

#[derive(Debug, Deserialize)]
struct NinjasQuote {
    #[serde(alias = "text")]
    quote: Option<String>,
    #[serde(alias = "source")]
    author: Option<String>,
}

// The endpoint has returned both a bare object and a one-element list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NinjasResponse {
    Many(Vec<NinjasQuote>),
    One(NinjasQuote),
}

#[async_trait]
impl QuoteProvider for ApiNinjasProvider {
    fn name(&self) -> &'static str {
        "API Ninjas"
    }

    async fn fetch_quote(&self, _filter: Option<&str>) -> Result<Quote> {
        let url = format!("{}/v1/quotes", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("API Ninjas HTTP error: {}", response.status()));
        }

        let body = response.text().await?;
        let item = match parse_json_flexible::<NinjasResponse>(&body)? {
            NinjasResponse::One(item) => item,
            NinjasResponse::Many(items) => items
                .into_iter()
                .next()
                .ok_or_else(|| anyhow!("API Ninjas returned an empty list"))?,
        };

        let text = item.quote.unwrap_or_default();
        if text.is_empty() {
            return Err(anyhow!("API Ninjas returned no quote text"));
        }
        Ok(Quote::new(text, item.author.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(server: &MockServer) -> ApiNinjasProvider {
        ApiNinjasProvider::new(&server.uri(), "test-key", 5_000).unwrap()
    }

    #[tokio::test]
    async fn test_sends_api_key_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/quotes"))
            .and(header("X-Api-Key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"quote": "Simplicity is the ultimate sophistication.", "author": "Leonardo da Vinci"}]"#,
            ))
            .mount(&server)
            .await;

        let quote = provider(&server).fetch_quote(None).await.unwrap();
        assert_eq!(quote.text, "Simplicity is the ultimate sophistication.");
        assert_eq!(quote.author.as_deref(), Some("Leonardo da Vinci"));
    }

    #[tokio::test]
    async fn test_bare_object_with_text_and_source_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/quotes"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"text": "Less is more.", "source": "Mies van der Rohe"}"#,
            ))
            .mount(&server)
            .await;

        let quote = provider(&server).fetch_quote(None).await.unwrap();
        assert_eq!(quote.text, "Less is more.");
        assert_eq!(quote.author.as_deref(), Some("Mies van der Rohe"));
    }

    #[tokio::test]
    async fn test_unauthorized_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/quotes"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = provider(&server).fetch_quote(None).await.unwrap_err();
        assert_eq!(err.to_string(), "API Ninjas HTTP error: 401 Unauthorized");
    }

    #[tokio::test]
    async fn test_empty_list_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/quotes"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;

        let err = provider(&server).fetch_quote(None).await.unwrap_err();
        assert!(err.to_string().contains("empty list"));
    }
}
