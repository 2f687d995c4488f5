// ============================================================================
// Engine Module
// Contains the per-keystroke amount entry state machine
// ============================================================================

mod field;
mod normalizer;
mod selection;

pub use field::{AmountField, AmountFieldBuilder, FieldUpdate};
pub use normalizer::{KeystrokeNormalizer, NormalizeOutcome, RejectReason, RepairKind};
pub use selection::{ReassertScheduler, ReassertTicket, SelectionController};
