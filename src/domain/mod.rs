// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod amount;
pub mod config;
pub mod errors;
pub mod session;

pub use amount::CanonicalAmount;
pub use config::{LocaleFormatConfig, SeparatorPreset};
pub use errors::{AmountError, AmountResult};
pub use session::{FieldId, InputSessionState, Selection, SelectionEvent};
