//! UI port injected into both flows.
//!
//! The flows never touch the terminal directly; everything user-visible goes
//! through this trait so the core logic stays testable.

use crate::core::currency::ConversionResult;

pub trait UiPort {
    /// Shows a quote with optional attribution (empty string means none).
    fn display_quote(&mut self, text: &str, author: &str);

    /// Shows a terminal error message.
    fn display_error(&mut self, message: &str);

    /// Toggles the loading indicator for the duration of a whole chain.
    fn set_loading(&mut self, loading: bool);

    /// Hands the combined quote payload to whatever share capability exists.
    fn share_quote(&mut self, payload: &str);

    /// The most recently displayed quote, as (text, author).
    fn current_quote(&self) -> Option<(String, String)>;

    /// Fills both currency selections, in the given order.
    fn populate_currency_options(&mut self, codes: &[String]);

    fn set_currency_selection(&mut self, from: &str, to: &str);

    /// Selected (from, to) pair; empty strings before population.
    fn currency_selection(&self) -> (String, String);

    fn display_conversion_result(&mut self, result: &ConversionResult);

    fn clear_conversion_result(&mut self);
}

#[cfg(test)]
pub mod test_support {
    use super::*;

    /// Records every port interaction for assertions.
    #[derive(Default)]
    pub struct RecordingUi {
        pub quote: Option<(String, String)>,
        pub errors: Vec<String>,
        pub loading_events: Vec<bool>,
        pub shared: Vec<String>,
        pub options: Vec<String>,
        pub from: String,
        pub to: String,
        pub result: Option<ConversionResult>,
    }

    impl UiPort for RecordingUi {
        fn display_quote(&mut self, text: &str, author: &str) {
            self.quote = Some((text.to_string(), author.to_string()));
        }

        fn display_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }

        fn set_loading(&mut self, loading: bool) {
            self.loading_events.push(loading);
        }

        fn share_quote(&mut self, payload: &str) {
            self.shared.push(payload.to_string());
        }

        fn current_quote(&self) -> Option<(String, String)> {
            self.quote.clone()
        }

        fn populate_currency_options(&mut self, codes: &[String]) {
            self.options = codes.to_vec();
        }

        fn set_currency_selection(&mut self, from: &str, to: &str) {
            self.from = from.to_string();
            self.to = to.to_string();
        }

        fn currency_selection(&self) -> (String, String) {
            (self.from.clone(), self.to.clone())
        }

        fn display_conversion_result(&mut self, result: &ConversionResult) {
            self.result = Some(result.clone());
        }

        fn clear_conversion_result(&mut self) {
            self.result = None;
        }
    }
}
