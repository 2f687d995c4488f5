// ============================================================================
// Locale Format Configuration
// Resolved separators, currency symbol and region for one render pass
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Separator Presets
// ============================================================================

/// The four supported thousands/decimal punctuation conventions a user can
/// choose for number display.
///
/// The preference is persisted as the sample pattern string (e.g.
/// `"1.234,56"`); anything unknown or unset resolves to
/// [`SeparatorPreset::CommaDot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SeparatorPreset {
    /// `1,234.56` — comma grouping, dot decimal (en-US style)
    CommaDot,
    /// `1.234,56` — dot grouping, comma decimal (pt-BR / es-AR style)
    DotComma,
    /// `1 234.56` — space grouping, dot decimal
    SpaceDot,
    /// `1 234,56` — space grouping, comma decimal
    SpaceComma,
}

impl SeparatorPreset {
    /// All supported presets, in display order.
    pub const ALL: [SeparatorPreset; 4] = [
        SeparatorPreset::CommaDot,
        SeparatorPreset::DotComma,
        SeparatorPreset::SpaceDot,
        SeparatorPreset::SpaceComma,
    ];

    /// The sample pattern used to persist and display this preset.
    pub fn pattern(&self) -> &'static str {
        match self {
            SeparatorPreset::CommaDot => "1,234.56",
            SeparatorPreset::DotComma => "1.234,56",
            SeparatorPreset::SpaceDot => "1 234.56",
            SeparatorPreset::SpaceComma => "1 234,56",
        }
    }

    /// The `(thousands_separator, decimal_separator)` pair for this preset.
    pub fn separators(&self) -> (char, char) {
        match self {
            SeparatorPreset::CommaDot => (',', '.'),
            SeparatorPreset::DotComma => ('.', ','),
            SeparatorPreset::SpaceDot => (' ', '.'),
            SeparatorPreset::SpaceComma => (' ', ','),
        }
    }

    /// Resolve a persisted preference string.
    ///
    /// Unknown or unset preferences fall back to `1,234.56`.
    pub fn from_preference(preference: Option<&str>) -> Self {
        preference
            .and_then(|p| {
                Self::ALL
                    .into_iter()
                    .find(|preset| preset.pattern() == p.trim())
            })
            .unwrap_or_default()
    }
}

impl Default for SeparatorPreset {
    fn default() -> Self {
        SeparatorPreset::CommaDot
    }
}

// ============================================================================
// Resolved Configuration
// ============================================================================

/// Fully resolved display configuration for one amount field render pass.
///
/// Derived from (profile currency/country override, device locale, format
/// preference), never stored; recompute or hit the resolver cache when any
/// input changes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocaleFormatConfig {
    /// Character rendered as the decimal point
    pub decimal_separator: char,

    /// Character rendered between three-digit groups
    pub thousands_separator: char,

    /// Narrow currency glyph (e.g. `"$"`, `"R$"`)
    pub currency_symbol: String,

    /// ISO 4217 currency code (e.g. `"USD"`)
    pub currency_code: String,

    /// Resolved ISO 3166 region (e.g. `"UY"`)
    pub region: String,
}

impl LocaleFormatConfig {
    pub fn new(
        preset: SeparatorPreset,
        currency_symbol: impl Into<String>,
        currency_code: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        let (thousands_separator, decimal_separator) = preset.separators();
        Self {
            decimal_separator,
            thousands_separator,
            currency_symbol: currency_symbol.into(),
            currency_code: currency_code.into(),
            region: region.into(),
        }
    }

    /// Builder method: swap in a different separator preset.
    pub fn with_preset(mut self, preset: SeparatorPreset) -> Self {
        let (thousands, decimal) = preset.separators();
        self.thousands_separator = thousands;
        self.decimal_separator = decimal;
        self
    }

    /// Builder method: swap in a different currency.
    pub fn with_currency(mut self, code: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self.currency_symbol = symbol.into();
        self
    }
}

impl Default for LocaleFormatConfig {
    /// The documented fallback: en-US, USD, `1,234.56`.
    fn default() -> Self {
        Self::new(SeparatorPreset::CommaDot, "$", "USD", "US")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_separators() {
        assert_eq!(SeparatorPreset::CommaDot.separators(), (',', '.'));
        assert_eq!(SeparatorPreset::DotComma.separators(), ('.', ','));
        assert_eq!(SeparatorPreset::SpaceDot.separators(), (' ', '.'));
        assert_eq!(SeparatorPreset::SpaceComma.separators(), (' ', ','));
    }

    #[test]
    fn test_preference_resolution() {
        assert_eq!(
            SeparatorPreset::from_preference(Some("1.234,56")),
            SeparatorPreset::DotComma
        );
        assert_eq!(
            SeparatorPreset::from_preference(Some(" 1 234,56 ")),
            SeparatorPreset::SpaceComma
        );
        assert_eq!(
            SeparatorPreset::from_preference(Some("weird")),
            SeparatorPreset::CommaDot
        );
        assert_eq!(
            SeparatorPreset::from_preference(None),
            SeparatorPreset::CommaDot
        );
    }

    #[test]
    fn test_default_config() {
        let config = LocaleFormatConfig::default();
        assert_eq!(config.decimal_separator, '.');
        assert_eq!(config.thousands_separator, ',');
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.currency_code, "USD");
        assert_eq!(config.region, "US");
    }

    #[test]
    fn test_builder_methods() {
        let config = LocaleFormatConfig::default()
            .with_preset(SeparatorPreset::DotComma)
            .with_currency("BRL", "R$");

        assert_eq!(config.decimal_separator, ',');
        assert_eq!(config.thousands_separator, '.');
        assert_eq!(config.currency_code, "BRL");
        assert_eq!(config.currency_symbol, "R$");
    }
}
