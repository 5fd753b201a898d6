pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::quote::QuoteProvider;
use crate::core::ui::UiPort;
use crate::providers::relay::RelayClient;
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

const QUOTABLE_BASE: &str = "https://api.quotable.io";
const DUMMYJSON_BASE: &str = "https://dummyjson.com";
const ZENQUOTES_BASE: &str = "https://zenquotes.io";
const TYPEFIT_BASE: &str = "https://type.fit";
const API_NINJAS_BASE: &str = "https://api.api-ninjas.com";
const FRANKFURTER_BASE: &str = "https://api.frankfurter.app";
const ALLORIGINS_BASE: &str = "https://api.allorigins.win";
const JINA_BASE: &str = "https://r.jina.ai";

#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Fetch and display one quote, optionally filtered and shared.
    Quote { filter: Option<String>, share: bool },
    /// List the supported currency codes.
    Currencies,
    /// Convert an amount between two currencies.
    Convert {
        amount: String,
        from: String,
        to: String,
        swap: bool,
    },
}

fn base_url<'a>(
    configured: &'a Option<crate::core::config::ProviderConfig>,
    default: &'a str,
) -> &'a str {
    configured.as_ref().map_or(default, |p| &p.base_url)
}

fn build_relay_client(config: &AppConfig) -> Result<Arc<RelayClient>> {
    Ok(Arc::new(RelayClient::new(
        base_url(&config.relays.allorigins, ALLORIGINS_BASE),
        base_url(&config.relays.jina, JINA_BASE),
        config.force_proxy,
        config.timeout_ms,
    )?))
}

/// Builds the quote provider chain in its fixed priority order. The keyed
/// provider leads only when a key is configured.
fn build_quote_providers(
    config: &AppConfig,
    relay: Arc<RelayClient>,
) -> Result<Vec<Box<dyn QuoteProvider>>> {
    let mut chain: Vec<Box<dyn QuoteProvider>> = Vec::new();

    if let Some(key) = config.api_ninjas_key.as_deref().filter(|k| !k.is_empty()) {
        chain.push(Box::new(providers::api_ninjas::ApiNinjasProvider::new(
            base_url(&config.providers.api_ninjas, API_NINJAS_BASE),
            key,
            config.timeout_ms,
        )?));
    }

    chain.push(Box::new(providers::quotable::QuotableProvider::new(
        base_url(&config.providers.quotable, QUOTABLE_BASE),
        Arc::clone(&relay),
    )));
    chain.push(Box::new(providers::dummyjson::DummyJsonProvider::new(
        base_url(&config.providers.dummyjson, DUMMYJSON_BASE),
        Arc::clone(&relay),
    )));
    chain.push(Box::new(providers::zenquotes::ZenQuotesProvider::new(
        base_url(&config.providers.zenquotes, ZENQUOTES_BASE),
        Arc::clone(&relay),
    )));
    chain.push(Box::new(providers::typefit::TypeFitProvider::new(
        base_url(&config.providers.typefit, TYPEFIT_BASE),
        relay,
    )));

    Ok(chain)
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("quotefx starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let mut ui = cli::ui::ConsoleUi::new();

    match command {
        AppCommand::Quote { filter, share } => {
            let relay = build_relay_client(&config)?;
            let chain = build_quote_providers(&config, relay)?;
            cli::quote::run(&chain, &mut ui, filter.as_deref(), config.require_api).await?;
            if share {
                cli::quote::share(&mut ui);
            }
            Ok(())
        }
        AppCommand::Currencies => {
            let provider = providers::frankfurter::FrankfurterProvider::new(
                base_url(&config.providers.frankfurter, FRANKFURTER_BASE),
                config.timeout_ms,
            )?;
            cli::convert::load_currencies(
                &provider,
                &mut ui,
                &config.defaults.from,
                &config.defaults.to,
            )
            .await
        }
        AppCommand::Convert {
            amount,
            from,
            to,
            swap,
        } => {
            let provider = providers::frankfurter::FrankfurterProvider::new(
                base_url(&config.providers.frankfurter, FRANKFURTER_BASE),
                config.timeout_ms,
            )?;
            ui.set_currency_selection(&from, &to);
            if swap {
                cli::convert::swap_currencies(&mut ui);
            }
            cli::convert::convert(&provider, &mut ui, &amount).await
        }
    }
}
