// ============================================================================
// Locale Format Resolver
// Resolves separators and currency symbol from profile + device settings
// ============================================================================

use super::tables;
use crate::domain::{LocaleFormatConfig, SeparatorPreset};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Resolves a [`LocaleFormatConfig`] from the user's profile overrides and
/// the device locale.
///
/// Resolution is a pure computation: every tier that finds nothing falls back
/// to its documented default, and the resolver as a whole never fails. The
/// fully-resolved fallback is `en-US` / `USD` / `1,234.56`.
///
/// # Example
/// ```
/// use amount_input_engine::locale::LocaleFormatResolver;
///
/// let config = LocaleFormatResolver::resolve(Some("BRL"), Some("BR"), "pt-BR", None);
/// assert_eq!(config.currency_symbol, "R$");
/// assert_eq!(config.region, "BR");
/// ```
pub struct LocaleFormatResolver;

impl LocaleFormatResolver {
    /// Resolve a display configuration.
    ///
    /// # Arguments
    /// * `profile_currency` - ISO 4217 code from the user profile, if set
    /// * `profile_country` - ISO 3166 country from the user profile, if set
    /// * `device_locale` - BCP 47-ish tag reported by the device (`"pt-BR"`,
    ///   `"es_UY"`, ...)
    /// * `format_preference` - persisted separator preset pattern, if chosen
    pub fn resolve(
        profile_currency: Option<&str>,
        profile_country: Option<&str>,
        device_locale: &str,
        format_preference: Option<&str>,
    ) -> LocaleFormatConfig {
        let region = Self::resolve_region(profile_country, device_locale);
        let locale_tag = Self::resolve_locale_tag(profile_country, device_locale);

        let currency_code = profile_currency
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_ascii_uppercase)
            .unwrap_or_else(|| "USD".to_string());

        let currency_symbol = Self::resolve_symbol(&locale_tag, &currency_code);
        let preset = SeparatorPreset::from_preference(format_preference);

        tracing::debug!(
            %region,
            %locale_tag,
            %currency_code,
            %currency_symbol,
            ?preset,
            "resolved locale format config"
        );

        LocaleFormatConfig::new(preset, currency_symbol, currency_code, region)
    }

    /// Memoized variant of [`resolve`](Self::resolve).
    ///
    /// The cache is process-wide and keyed by all four inputs; entries never
    /// change after insertion since the tables are fixed at build time.
    pub fn resolve_cached(
        profile_currency: Option<&str>,
        profile_country: Option<&str>,
        device_locale: &str,
        format_preference: Option<&str>,
    ) -> LocaleFormatConfig {
        let key = format!(
            "{}|{}|{}|{}",
            profile_currency.unwrap_or(""),
            profile_country.unwrap_or(""),
            device_locale,
            format_preference.unwrap_or("")
        );

        if let Some(hit) = Self::cache().read().get(&key) {
            return hit.clone();
        }

        let config = Self::resolve(
            profile_currency,
            profile_country,
            device_locale,
            format_preference,
        );
        Self::cache().write().insert(key, config.clone());
        config
    }

    /// Resolve the locale tag used for locale-aware formatting.
    ///
    /// The curated country table wins over a tag synthesized from the device
    /// language and the resolved region; `"en-US"` is the last resort.
    pub fn resolve_locale_tag(profile_country: Option<&str>, device_locale: &str) -> String {
        let region = Self::resolve_region(profile_country, device_locale);

        if let Some(tag) = tables::locale_for_country(&region) {
            return tag.to_string();
        }

        let (language, _) = Self::split_locale_tag(device_locale);
        match language {
            Some(language) => format!("{language}-{region}"),
            None => "en-US".to_string(),
        }
    }

    // ========================================================================
    // Resolution Tiers
    // ========================================================================

    /// Explicit profile country → device region → `"US"`.
    fn resolve_region(profile_country: Option<&str>, device_locale: &str) -> String {
        if let Some(country) = profile_country.map(str::trim).filter(|c| !c.is_empty()) {
            return country.to_ascii_uppercase();
        }

        let (_, region) = Self::split_locale_tag(device_locale);
        region.unwrap_or_else(|| "US".to_string())
    }

    /// Override table → narrow-symbol derivation → `"$"`.
    fn resolve_symbol(locale_tag: &str, currency_code: &str) -> String {
        if let Some(symbol) = tables::symbol_override(currency_code) {
            return symbol.to_string();
        }

        if let Some(symbol) = Self::derived_symbol(locale_tag, currency_code) {
            tracing::debug!(%currency_code, %symbol, "currency symbol derived, not curated");
            return symbol;
        }

        tracing::debug!(%currency_code, "no symbol source, falling back to \"$\"");
        "$".to_string()
    }

    /// Derive a narrow symbol by formatting a sample amount and stripping
    /// everything that is not part of the symbol glyph.
    fn derived_symbol(locale_tag: &str, currency_code: &str) -> Option<String> {
        let narrow = tables::narrow_symbol(currency_code)?;
        let sample = if locale_tag.starts_with("en") {
            format!("{narrow}1,234.56")
        } else {
            format!("{narrow} 1.234,56")
        };
        Self::extract_symbol(&sample)
    }

    /// Strip digits, whitespace and grouping punctuation from a formatted
    /// currency sample, leaving only the symbol glyph.
    fn extract_symbol(formatted: &str) -> Option<String> {
        let symbol: String = formatted
            .chars()
            .filter(|c| {
                !c.is_numeric()
                    && !c.is_whitespace()
                    && !matches!(c, ',' | '.' | ';' | ':' | '(' | ')' | '\'' | '"')
            })
            .collect();

        if symbol.is_empty() {
            None
        } else {
            Some(symbol)
        }
    }

    /// Split a device locale tag into (language, region).
    ///
    /// Accepts both `-` and `_` subtag separators; the region is the first
    /// two-letter alphabetic subtag after the language.
    fn split_locale_tag(tag: &str) -> (Option<String>, Option<String>) {
        let mut subtags = tag.trim().split(['-', '_']);

        let language = subtags
            .next()
            .filter(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic()))
            .map(str::to_ascii_lowercase);

        let region = subtags
            .find(|s| s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()))
            .map(str::to_ascii_uppercase);

        (language, region)
    }

    fn cache() -> &'static RwLock<HashMap<String, LocaleFormatConfig>> {
        static CACHE: OnceLock<RwLock<HashMap<String, LocaleFormatConfig>>> = OnceLock::new();
        CACHE.get_or_init(|| RwLock::new(HashMap::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_resolution_order() {
        // Profile country wins over device region
        let config = LocaleFormatResolver::resolve(None, Some("uy"), "pt-BR", None);
        assert_eq!(config.region, "UY");

        // Device region when no profile country
        let config = LocaleFormatResolver::resolve(None, None, "pt-BR", None);
        assert_eq!(config.region, "BR");

        // Bare fallback
        let config = LocaleFormatResolver::resolve(None, None, "", None);
        assert_eq!(config.region, "US");
    }

    #[test]
    fn test_locale_tag_table_precedence() {
        // Curated entry beats the synthesized en-BR
        assert_eq!(
            LocaleFormatResolver::resolve_locale_tag(Some("BR"), "en-US"),
            "pt-BR"
        );
        // Uncurated region synthesizes from the device language
        assert_eq!(
            LocaleFormatResolver::resolve_locale_tag(Some("FR"), "en-US"),
            "en-FR"
        );
        // Nothing at all
        assert_eq!(LocaleFormatResolver::resolve_locale_tag(None, ""), "en-US");
    }

    #[test]
    fn test_underscore_locale_tags() {
        let config = LocaleFormatResolver::resolve(None, None, "es_MX", None);
        assert_eq!(config.region, "MX");
    }

    #[test]
    fn test_symbol_override_tier() {
        let config = LocaleFormatResolver::resolve(Some("BRL"), None, "pt-BR", None);
        assert_eq!(config.currency_symbol, "R$");
        assert_eq!(config.currency_code, "BRL");
    }

    #[test]
    fn test_symbol_derived_tier() {
        let config = LocaleFormatResolver::resolve(Some("GBP"), None, "en-GB", None);
        assert_eq!(config.currency_symbol, "£");
    }

    #[test]
    fn test_symbol_last_resort() {
        let config = LocaleFormatResolver::resolve(Some("XXX"), None, "en-US", None);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_missing_currency_defaults_to_usd() {
        let config = LocaleFormatResolver::resolve(None, None, "es-UY", None);
        assert_eq!(config.currency_code, "USD");
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_format_preference() {
        let config = LocaleFormatResolver::resolve(None, None, "pt-BR", Some("1.234,56"));
        assert_eq!(config.thousands_separator, '.');
        assert_eq!(config.decimal_separator, ',');

        let config = LocaleFormatResolver::resolve(None, None, "pt-BR", Some("garbage"));
        assert_eq!(config.thousands_separator, ',');
        assert_eq!(config.decimal_separator, '.');
    }

    #[test]
    fn test_extract_symbol() {
        assert_eq!(
            LocaleFormatResolver::extract_symbol("£1,234.56"),
            Some("£".to_string())
        );
        assert_eq!(
            LocaleFormatResolver::extract_symbol("kr 1.234,56"),
            Some("kr".to_string())
        );
        assert_eq!(LocaleFormatResolver::extract_symbol("1,234.56"), None);
    }

    #[test]
    fn test_cached_resolution_is_stable() {
        let first = LocaleFormatResolver::resolve_cached(Some("UYU"), Some("UY"), "es-UY", None);
        let second = LocaleFormatResolver::resolve_cached(Some("UYU"), Some("UY"), "es-UY", None);
        assert_eq!(first, second);
        assert_eq!(first.currency_symbol, "$U");
    }
}
