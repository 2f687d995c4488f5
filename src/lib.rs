// ============================================================================
// Amount Input Engine Library
// Locale-aware numeric entry and currency display for amount fields
// ============================================================================

//! # Amount Input Engine
//!
//! The shared engine behind every amount field of a personal-finance app:
//! account balances, transaction amounts, budget limits.
//!
//! Each keystroke runs one synchronous pass through a small state machine
//! that reconciles three conflicting requirements:
//!
//! - the numeric keypad emits raw, unvalidated text deltas;
//! - the canonical value must stay a clean decimal string (digits, one `.`,
//!   at most two fraction digits), independent of the user's locale;
//! - the displayed string must carry locale-correct separators and a
//!   currency symbol, with a cursor that survives the platforms'
//!   asynchronous selection callbacks.
//!
//! ## Features
//!
//! - **Ordered normalization rules** with named platform-artifact repairs
//! - **Four separator presets** (`1,234.56`, `1.234,56`, `1 234.56`,
//!   `1 234,56`) resolved from profile + device settings
//! - **Deferred, cancellable selection reassertion** with last-writer-wins
//!   semantics per field
//! - **Event stream** for telemetry and debugging
//!
//! ## Example
//!
//! ```rust
//! use amount_input_engine::prelude::*;
//! use std::sync::Arc;
//!
//! let mut field = AmountFieldBuilder::new()
//!     .profile_currency("BRL")
//!     .profile_country("BR")
//!     .device_locale("pt-BR")
//!     .format_preference("1.234,56")
//!     .build(Arc::new(NoOpFieldEventHandler));
//!
//! let update = field.text_changed("1234,5");
//! assert_eq!(update.canonical.as_str(), "1234.5");
//! assert_eq!(update.display, "R$ 1.234,5");
//!
//! // The canonical value parses directly as a decimal number
//! assert_eq!(field.value().to_string(), "1234.5");
//! ```

pub mod domain;
pub mod engine;
pub mod format;
pub mod interfaces;
pub mod locale;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        AmountError, AmountResult, CanonicalAmount, FieldId, InputSessionState,
        LocaleFormatConfig, Selection, SelectionEvent, SeparatorPreset,
    };
    pub use crate::engine::{
        AmountField, AmountFieldBuilder, FieldUpdate, KeystrokeNormalizer, NormalizeOutcome,
        ReassertScheduler, ReassertTicket, RejectReason, RepairKind, SelectionController,
    };
    pub use crate::format::DisplayFormatter;
    pub use crate::interfaces::{
        FieldEvent, FieldEventHandler, NoOpFieldEventHandler, TracingFieldEventHandler,
    };
    pub use crate::locale::LocaleFormatResolver;
}
