use crate::core::currency::ConversionResult;
use crate::core::ui::UiPort;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::info;

/// Defines different styles for text elements.
pub enum StyleType {
    Quote,
    Attribution,
    Error,
    ResultValue,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Quote => style(text).bold(),
        StyleType::Attribution => style(text).italic().dim(),
        StyleType::Error => style(text).red(),
        StyleType::ResultValue => style(text).green().bold(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Creates a spinner used as the loading indicator for a provider chain.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Terminal implementation of the UI port.
///
/// Holds the small amount of state the original page kept in the DOM: the last
/// displayed quote and the two currency selections.
#[derive(Default)]
pub struct ConsoleUi {
    spinner: Option<ProgressBar>,
    last_quote: Option<(String, String)>,
    from: String,
    to: String,
}

impl ConsoleUi {
    pub fn new() -> Self {
        ConsoleUi::default()
    }
}

impl UiPort for ConsoleUi {
    fn display_quote(&mut self, text: &str, author: &str) {
        let quoted = format!("\"{text}\"");
        let attribution = if author.is_empty() {
            String::new()
        } else {
            format!("— {author}")
        };
        println!("\n{}", style_text(&quoted, StyleType::Quote));
        if !attribution.is_empty() {
            println!("{}", style_text(&attribution, StyleType::Attribution));
        }
        self.last_quote = Some((quoted, attribution));
    }

    fn display_error(&mut self, message: &str) {
        println!("{}", style_text(message, StyleType::Error));
    }

    fn set_loading(&mut self, loading: bool) {
        if loading {
            self.spinner = Some(new_spinner("Loading…"));
        } else if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn share_quote(&mut self, payload: &str) {
        // Native share / clipboard belong to the host environment; print the
        // payload ready to paste.
        println!("\n{}", style_text("Share this quote:", StyleType::Subtle));
        println!("{payload}");
        info!("Quote shared");
    }

    fn current_quote(&self) -> Option<(String, String)> {
        self.last_quote.clone()
    }

    fn populate_currency_options(&mut self, codes: &[String]) {
        let mut table = new_styled_table();
        table.set_header(vec![header_cell("Supported currencies")]);
        for chunk in codes.chunks(8) {
            table.add_row(vec![Cell::new(chunk.join("  "))]);
        }
        println!("{table}");
    }

    fn set_currency_selection(&mut self, from: &str, to: &str) {
        self.from = from.to_string();
        self.to = to.to_string();
    }

    fn currency_selection(&self) -> (String, String) {
        (self.from.clone(), self.to.clone())
    }

    fn display_conversion_result(&mut self, result: &ConversionResult) {
        println!("{}", style_text(&result.to_string(), StyleType::ResultValue));
    }

    fn clear_conversion_result(&mut self) {}
}
