//! Currency listing and conversion abstractions.

use anyhow::Result;
use async_trait::async_trait;

/// Outcome of a single conversion; rendered as text, not persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub converted_amount: f64,
}

impl std::fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} = {} {}",
            self.amount, self.from, self.converted_amount, self.to
        )
    }
}

#[async_trait]
pub trait CurrencyProvider: Send + Sync {
    /// Supported currency codes, in the order the service returns them.
    async fn currencies(&self) -> Result<Vec<String>>;

    /// Converts `amount` from one currency to another.
    async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_result_display() {
        let result = ConversionResult {
            amount: 10.0,
            from: "USD".to_string(),
            to: "PHP".to_string(),
            converted_amount: 56.5,
        };
        assert_eq!(result.to_string(), "10 USD = 56.5 PHP");
    }

    #[test]
    fn test_conversion_result_display_fractional_amount() {
        let result = ConversionResult {
            amount: 2.5,
            from: "EUR".to_string(),
            to: "JPY".to_string(),
            converted_amount: 412.75,
        };
        assert_eq!(result.to_string(), "2.5 EUR = 412.75 JPY");
    }
}
