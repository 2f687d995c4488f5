// ============================================================================
// Display Formatter
// Renders a canonical amount with locale separators and currency symbol
// ============================================================================

use crate::domain::{CanonicalAmount, LocaleFormatConfig};

/// Renders the human-facing string for a canonical amount.
///
/// A pure function of its inputs: the same canonical value always renders
/// identically for a given locale config.
pub struct DisplayFormatter;

impl DisplayFormatter {
    /// Format `canonical` under `config`.
    ///
    /// The integer part is grouped in threes from the right with the
    /// configured thousands separator. A committed decimal separator is
    /// always rendered, even with no fraction digits typed yet, so the
    /// display reflects exactly what the user entered. `show_symbol`
    /// prefixes `"{symbol} "`.
    ///
    /// # Example
    /// ```
    /// use amount_input_engine::domain::{LocaleFormatConfig, SeparatorPreset};
    /// use amount_input_engine::format::DisplayFormatter;
    ///
    /// let config = LocaleFormatConfig::new(SeparatorPreset::DotComma, "$", "USD", "US");
    /// let amount = "1234.5".parse().unwrap();
    /// assert_eq!(DisplayFormatter::format(&amount, &config, true), "$ 1.234,5");
    /// ```
    pub fn format(
        canonical: &CanonicalAmount,
        config: &LocaleFormatConfig,
        show_symbol: bool,
    ) -> String {
        let int_digits = canonical.integer_digits();

        // Unreachable for values holding the canonical invariant, but amount
        // fields must never render blank or panic on edit.
        if int_digits.is_empty() || !int_digits.bytes().all(|b| b.is_ascii_digit()) {
            tracing::warn!(canonical = %canonical, "non-canonical value reached the formatter");
            return Self::fallback(canonical, config, show_symbol);
        }

        let mut rendered = Self::group_integer(int_digits, config.thousands_separator);

        if let Some(frac) = canonical.fraction_digits() {
            rendered.push(config.decimal_separator);
            rendered.push_str(frac);
        }

        if show_symbol {
            format!("{} {}", config.currency_symbol, rendered)
        } else {
            rendered
        }
    }

    /// Group a digit run in threes from the right.
    fn group_integer(digits: &str, thousands_separator: char) -> String {
        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / 3);

        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push(thousands_separator);
            }
            grouped.push(digit);
        }

        grouped
    }

    /// Degraded rendering: the raw canonical string, still symbol-prefixed.
    fn fallback(
        canonical: &CanonicalAmount,
        config: &LocaleFormatConfig,
        show_symbol: bool,
    ) -> String {
        if show_symbol {
            format!("{} {}", config.currency_symbol, canonical.as_str())
        } else {
            canonical.as_str().to_string()
        }
    }
}
