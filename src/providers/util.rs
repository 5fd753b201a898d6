use anyhow::{Result, anyhow};
use rand::Rng;
use serde::de::DeserializeOwned;

const SNIPPET_LEN: usize = 120;

/// Parses a response body that should be JSON.
///
/// Provider bodies arrive through relays that occasionally wrap or truncate
/// them; on parse failure the error carries a short snippet of the offending
/// text instead of the whole body.
pub fn parse_json_flexible<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|_| {
        let mut snippet: String = text.chars().take(SNIPPET_LEN).collect();
        if text.chars().count() > SNIPPET_LEN {
            snippet.push('…');
        }
        anyhow!("Invalid JSON: {snippet}")
    })
}

/// Case-insensitive substring match over the combined text and author.
pub fn matches_keyword(text: &str, author: &str, keyword: &str) -> bool {
    format!("{text} {author}")
        .to_lowercase()
        .contains(&keyword.to_lowercase())
}

/// Uniform random pick; `None` on an empty slice.
pub fn pick_random<T>(items: &[T]) -> Option<&T> {
    if items.is_empty() {
        return None;
    }
    let mut rng = rand::rng();
    items.get(rng.random_range(0..items.len()))
}
