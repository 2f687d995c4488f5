// ============================================================================
// Field Event Handler Interface
// Defines the contract for observing amount field activity
// ============================================================================

use crate::domain::{CanonicalAmount, FieldId, Selection};
use crate::engine::{RejectReason, RepairKind};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by an amount field as it processes host callbacks
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldEvent {
    /// The canonical value changed
    ValueChanged {
        field: FieldId,
        canonical: CanonicalAmount,
        timestamp: DateTime<Utc>,
    },

    /// An edit was rejected and the previous value kept
    EditRejected {
        field: FieldId,
        reason: RejectReason,
        timestamp: DateTime<Utc>,
    },

    /// A platform-artifact repair was applied to the raw text
    RepairApplied {
        field: FieldId,
        repair: RepairKind,
        timestamp: DateTime<Utc>,
    },

    /// A selection was computed and queued for deferred reassertion
    SelectionScheduled {
        field: FieldId,
        selection: Selection,
        generation: u64,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for observing field activity
/// Implementations can handle logging, telemetry, debugging, etc.
pub trait FieldEventHandler: Send + Sync {
    /// Handle a field event
    fn on_event(&self, event: FieldEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<FieldEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpFieldEventHandler;

impl FieldEventHandler for NoOpFieldEventHandler {
    fn on_event(&self, _event: FieldEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct TracingFieldEventHandler;

impl FieldEventHandler for TracingFieldEventHandler {
    fn on_event(&self, event: FieldEvent) {
        tracing::debug!("Amount field event: {:?}", event);
    }
}
