// ============================================================================
// Locale Module
// Locale/currency resolution backed by static lookup tables
// ============================================================================
//
// This module provides:
// - LocaleFormatResolver: (profile, device locale) -> LocaleFormatConfig
// - Static country/currency tables, fixed at build time
//
// Design principles:
// - Pure resolution: every tier degrades to a documented default
// - No runtime-mutable global state; the only shared structure is a memo
//   cache of immutable results

mod resolver;
mod tables;

pub use resolver::LocaleFormatResolver;
