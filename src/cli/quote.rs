//! The quote-fetching flow: ordered provider chain with a guaranteed terminal
//! state (quote displayed, or an explicit error / local fallback).

use crate::core::quote::{self, QuoteProvider};
use crate::core::ui::UiPort;
use anyhow::Result;
use tracing::{debug, error};

const MIN_KEYWORD_LEN: usize = 2;

fn api_error_message(details: &str) -> String {
    let base = "⚠️ Unable to load a quote from the API right now.";
    if details.is_empty() {
        format!("{base}\nPlease try again.")
    } else {
        format!("{base}\n{details}")
    }
}

/// Runs the whole chain and leaves the UI in a terminal state. Never returns
/// an error for provider failures; exhaustion is rendered, not propagated.
pub async fn run(
    providers: &[Box<dyn QuoteProvider>],
    ui: &mut dyn UiPort,
    filter: Option<&str>,
    require_api: bool,
) -> Result<()> {
    let keyword = filter.map(str::trim).filter(|k| !k.is_empty());
    if let Some(k) = keyword {
        if k.chars().count() < MIN_KEYWORD_LEN {
            ui.display_error("Keyword must be at least 2 characters.");
            return Ok(());
        }
    }

    ui.set_loading(true);
    let outcome = quote::first_success(providers, keyword).await;
    ui.set_loading(false);

    match outcome {
        Ok(q) => {
            debug!(?q, "Displaying quote");
            ui.display_quote(&q.text, q.author.as_deref().unwrap_or(""));
        }
        Err(e) => {
            error!(error = %e, "All quote providers failed");
            if require_api {
                ui.display_error(&api_error_message(&e.to_string()));
            } else {
                let q = quote::local_fallback();
                ui.display_quote(&q.text, q.author.as_deref().unwrap_or(""));
            }
        }
    }
    Ok(())
}

/// Shares whatever the UI currently displays. Failures are logged, never
/// retried.
pub fn share(ui: &mut dyn UiPort) {
    match ui.current_quote() {
        Some((text, attribution)) => {
            let payload = format!("{text} {attribution}").trim_end().to_string();
            ui.share_quote(&payload);
        }
        None => debug!("Nothing to share"),
    }
}
