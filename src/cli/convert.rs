//! The currency flow: load the supported codes, convert an amount on demand,
//! swap the selected pair.

use crate::core::currency::{ConversionResult, CurrencyProvider};
use crate::core::ui::UiPort;
use anyhow::Result;
use tracing::{debug, warn};

pub const LOAD_ERROR_MESSAGE: &str = "Unable to load currencies. Please check your connection.";
pub const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid amount.";
pub const CONVERT_ERROR_MESSAGE: &str = "Unable to convert right now. Please try again.";

/// Populates both selections with the supported codes and applies the default
/// pair. On failure the selections stay empty and an error is displayed.
pub async fn load_currencies(
    provider: &dyn CurrencyProvider,
    ui: &mut dyn UiPort,
    default_from: &str,
    default_to: &str,
) -> Result<()> {
    match provider.currencies().await {
        Ok(codes) => {
            debug!(count = codes.len(), "Loaded currency list");
            ui.populate_currency_options(&codes);
            ui.set_currency_selection(default_from, default_to);
        }
        Err(e) => {
            warn!(error = %e, "Failed to load currency list");
            ui.display_error(LOAD_ERROR_MESSAGE);
        }
    }
    Ok(())
}

/// Converts the raw amount between the currently selected currencies.
/// Validation failures never reach the network.
pub async fn convert(
    provider: &dyn CurrencyProvider,
    ui: &mut dyn UiPort,
    amount_raw: &str,
) -> Result<()> {
    let amount = match amount_raw.trim().parse::<f64>() {
        Ok(a) if a > 0.0 => a,
        _ => {
            ui.display_error(INVALID_AMOUNT_MESSAGE);
            return Ok(());
        }
    };

    let (from, to) = ui.currency_selection();
    match provider.convert(amount, &from, &to).await {
        Ok(converted_amount) => {
            ui.display_conversion_result(&ConversionResult {
                amount,
                from,
                to,
                converted_amount,
            });
        }
        Err(e) => {
            warn!(error = %e, "Conversion failed");
            ui.display_error(CONVERT_ERROR_MESSAGE);
        }
    }
    Ok(())
}

/// Exchanges the selected pair and clears the displayed result. No network.
pub fn swap_currencies(ui: &mut dyn UiPort) {
    let (from, to) = ui.currency_selection();
    ui.set_currency_selection(&to, &from);
    ui.clear_conversion_result();
}
