//! Quote abstractions and the provider fallback chain.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use rand::Rng;
use tracing::{debug, warn};

/// A single displayable quote. Ephemeral; only the most recently displayed
/// value matters.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub text: String,
    pub author: Option<String>,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        let author = author.into();
        Quote {
            text: text.into(),
            author: if author.is_empty() { None } else { Some(author) },
        }
    }
}

/// An external quote source with its own response schema.
///
/// A provider "failing" covers non-success status, timeout, malformed body and
/// heuristic rejection alike; the chain treats them all the same way.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fetch one quote, applying the keyword filter where the source supports
    /// it (server-side search or client-side substring match).
    async fn fetch_quote(&self, filter: Option<&str>) -> Result<Quote>;
}

/// Walks the providers in order and returns the first usable quote.
///
/// Every per-provider failure is logged and advances the chain; exhaustion
/// surfaces the last error encountered.
pub async fn first_success(
    providers: &[Box<dyn QuoteProvider>],
    filter: Option<&str>,
) -> Result<Quote> {
    let mut last_error = anyhow!("No quote providers configured");

    for provider in providers {
        debug!(provider = provider.name(), "Trying quote provider");
        match provider.fetch_quote(filter).await {
            Ok(quote) if !quote.text.is_empty() => {
                debug!(provider = provider.name(), "Provider succeeded");
                return Ok(quote);
            }
            Ok(_) => {
                warn!(provider = provider.name(), "Provider returned an empty quote");
                last_error = anyhow!("{} returned an empty quote", provider.name());
            }
            Err(e) => {
                warn!(provider = provider.name(), error = %e, "Provider failed, trying next");
                last_error = e;
            }
        }
    }

    Err(last_error)
}

/// Built-in quotes used when the chain is exhausted and `require_api` is off.
pub const FALLBACK_QUOTES: [(&str, &str); 5] = [
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "Life is what happens to you while you're busy making other plans.",
        "John Lennon",
    ),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    (
        "Whether you think you can or you think you can't, you're right.",
        "Henry Ford",
    ),
    ("It always seems impossible until it's done.", "Nelson Mandela"),
];

/// Picks one of the built-in quotes uniformly at random.
pub fn local_fallback() -> Quote {
    let mut rng = rand::rng();
    let (text, author) = FALLBACK_QUOTES[rng.random_range(0..FALLBACK_QUOTES.len())];
    Quote::new(text, author)
}
