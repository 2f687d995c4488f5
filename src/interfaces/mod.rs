// ============================================================================
// Interfaces Module
// Contracts between the engine and its host/observers
// ============================================================================

mod event_handler;

pub use event_handler::{
    FieldEvent, FieldEventHandler, NoOpFieldEventHandler, TracingFieldEventHandler,
};
