// ============================================================================
// Locale Lookup Tables
// Static configuration data, fixed at build time
// ============================================================================

// ============================================================================
// Country → Locale
// ============================================================================

/// Locale tags for the supported Latin-American and Iberian markets plus
/// Brazil. Takes precedence over a synthesized `language-REGION` tag.
const COUNTRY_LOCALES: &[(&str, &str)] = &[
    ("AR", "es-AR"),
    ("BO", "es-BO"),
    ("BR", "pt-BR"),
    ("CL", "es-CL"),
    ("CO", "es-CO"),
    ("CR", "es-CR"),
    ("DO", "es-DO"),
    ("EC", "es-EC"),
    ("ES", "es-ES"),
    ("GT", "es-GT"),
    ("HN", "es-HN"),
    ("MX", "es-MX"),
    ("NI", "es-NI"),
    ("PA", "es-PA"),
    ("PE", "es-PE"),
    ("PT", "pt-PT"),
    ("PY", "es-PY"),
    ("SV", "es-SV"),
    ("US", "en-US"),
    ("UY", "es-UY"),
    ("VE", "es-VE"),
];

// ============================================================================
// Currency → Symbol
// ============================================================================

/// Narrow symbols for every currency the app supports.
///
/// These override any derived symbol: several of these currencies come back
/// ambiguous or multi-character from generic narrow-symbol sources (e.g.
/// `"US$"` for USD in es-* locales, `"Bs.S"` for VES).
const CURRENCY_SYMBOL_OVERRIDES: &[(&str, &str)] = &[
    ("ARS", "$"),
    ("BOB", "Bs"),
    ("BRL", "R$"),
    ("CLP", "$"),
    ("COP", "$"),
    ("CRC", "₡"),
    ("DOP", "RD$"),
    ("EUR", "€"),
    ("GTQ", "Q"),
    ("HNL", "L"),
    ("MXN", "$"),
    ("NIO", "C$"),
    ("PAB", "B/."),
    ("PEN", "S/"),
    ("PYG", "₲"),
    ("USD", "$"),
    ("UYU", "$U"),
    ("VES", "Bs."),
];

/// Narrow symbols for common ISO 4217 codes outside the supported set.
/// Entries still pass through the glyph-extraction sanitizer before use.
const NARROW_SYMBOLS: &[(&str, &str)] = &[
    ("AUD", "$"),
    ("CAD", "$"),
    ("CHF", "CHF"),
    ("CNY", "¥"),
    ("CZK", "Kč"),
    ("DKK", "kr"),
    ("GBP", "£"),
    ("HUF", "Ft"),
    ("ILS", "₪"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("KRW", "₩"),
    ("NGN", "₦"),
    ("NOK", "kr"),
    ("NZD", "$"),
    ("PHP", "₱"),
    ("PLN", "zł"),
    ("RUB", "₽"),
    ("SEK", "kr"),
    ("THB", "฿"),
    ("TRY", "₺"),
    ("UAH", "₴"),
    ("VND", "₫"),
    ("ZAR", "R"),
];

// ============================================================================
// Lookups
// ============================================================================

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    let key = key.trim();
    table
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| *v)
}

/// The market locale tag for a country, if it is one we curate.
pub(crate) fn locale_for_country(country: &str) -> Option<&'static str> {
    lookup(COUNTRY_LOCALES, country)
}

/// The curated symbol for a supported currency.
pub(crate) fn symbol_override(currency_code: &str) -> Option<&'static str> {
    lookup(CURRENCY_SYMBOL_OVERRIDES, currency_code)
}

/// The generic narrow symbol for other ISO codes.
pub(crate) fn narrow_symbol(currency_code: &str) -> Option<&'static str> {
    lookup(NARROW_SYMBOLS, currency_code)
}
