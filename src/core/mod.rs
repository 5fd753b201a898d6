//! Core abstractions shared by the quote and currency flows

pub mod config;
pub mod currency;
pub mod log;
pub mod quote;
pub mod ui;

// Re-export main types for cleaner imports
pub use currency::{ConversionResult, CurrencyProvider};
pub use quote::{Quote, QuoteProvider};
pub use ui::UiPort;
