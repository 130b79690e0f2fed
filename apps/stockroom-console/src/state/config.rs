//! # Configuration State
//!
//! Console settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKROOM_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use stockroom_core::{Money, PAGE_SIZE};
use tracing::{debug, warn};

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleConfig {
    /// Rows per table page.
    /// Default: 10
    pub page_size: usize,

    /// Currency symbol (for display)
    pub currency_symbol: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            page_size: PAGE_SIZE,
            currency_symbol: "$".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Creates a new ConsoleConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOCKROOM_CURRENCY_SYMBOL`: Override the currency symbol
    pub fn from_env() -> Self {
        let mut config = ConsoleConfig::default();

        if let Ok(symbol) = std::env::var("STOCKROOM_CURRENCY_SYMBOL") {
            if symbol.trim().is_empty() {
                warn!("Empty STOCKROOM_CURRENCY_SYMBOL, keeping default");
            } else {
                debug!(symbol = %symbol, "Overriding currency symbol from environment");
                config.currency_symbol = symbol;
            }
        }

        config
    }

    /// Formats money with the currency symbol and thousands separators.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_console::state::ConsoleConfig;
    /// use stockroom_core::Money;
    ///
    /// let config = ConsoleConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(129_900)), "$1,299.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            group_thousands(amount.dollars().unsigned_abs()),
            amount.cents_part().unsigned_abs()
        )
    }

    /// Formats a whole-unit amount (chart values) with the currency symbol.
    pub fn format_whole(&self, amount: i64) -> String {
        format!(
            "{}{}{}",
            if amount < 0 { "-" } else { "" },
            self.currency_symbol,
            group_thousands(amount.unsigned_abs())
        )
    }
}

/// 1234567 → "1,234,567"
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_positive() {
        let config = ConsoleConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(100)), "$1.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConsoleConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
        assert_eq!(config.format_currency(Money::from_cents(-5)), "-$0.05");
    }

    #[test]
    fn test_format_currency_large() {
        let config = ConsoleConfig::default();
        assert_eq!(
            config.format_currency(Money::from_cents(123_456_789)),
            "$1,234,567.89"
        );
        assert_eq!(config.format_whole(19_710), "$19,710");
        assert_eq!(config.format_whole(600), "$600");
    }

    #[test]
    fn test_custom_symbol() {
        let config = ConsoleConfig {
            currency_symbol: "€".to_string(),
            ..ConsoleConfig::default()
        };
        assert_eq!(config.format_currency(Money::from_major(5)), "€5.00");
    }
}
