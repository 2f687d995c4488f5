// ============================================================================
// Input Session State
// Per-field transient state driving the placeholder-zero UX and the cursor
// ============================================================================

use super::amount::CanonicalAmount;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// Identity of one mounted amount field. Keys the deferred selection
/// reassertion queue so a newer keystroke can supersede a stale pending fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldId(Uuid);

impl FieldId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

/// A cursor selection range in characters over the rendered display string.
///
/// `start == end` is a collapsed caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// A collapsed caret at `position`.
    pub fn collapsed(position: usize) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// A range spanning `start..end`.
    pub fn span(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Clamp against the length the widget actually holds.
    ///
    /// If the widget would reject this range (rendered text shorter than
    /// expected), the result collapses to `{len, len}`.
    pub fn clamp_to(&self, len: usize) -> Self {
        if self.end > len || self.start > len {
            Self::collapsed(len)
        } else {
            *self
        }
    }
}

/// The host signal a selection is computed in response to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SelectionEvent {
    /// Externally driven value change (programmatic reset)
    ValueSet,
    /// The field received focus
    FocusGained,
    /// The user edited the text
    TextChanged,
}

// ============================================================================
// Session State
// ============================================================================

/// Transient state owned by one mounted amount field.
///
/// Created on mount or on an externally-set value; mutated only by the
/// normalizer and selection controller; discarded on unmount. The two flags
/// exist solely to drive the "replace the placeholder zero on first touch"
/// rule and never leak into the canonical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSessionState {
    /// The current canonical value
    pub canonical: CanonicalAmount,

    /// The last selection pushed to the widget
    pub selection: Selection,

    /// Still showing the untouched placeholder `"0"`
    pub is_initial_zero: bool,

    /// The field has received focus at least once
    pub has_been_focused_once: bool,
}

impl InputSessionState {
    /// Fresh session for a field mounting empty: placeholder `"0"`.
    pub fn new() -> Self {
        Self {
            canonical: CanonicalAmount::zero(),
            selection: Selection::collapsed(1),
            is_initial_zero: true,
            has_been_focused_once: false,
        }
    }

    /// Session for a field mounting with an externally supplied value.
    ///
    /// A zero value still presents as the replaceable placeholder.
    pub fn from_value(canonical: CanonicalAmount) -> Self {
        Self {
            canonical,
            selection: Selection::collapsed(canonical.len()),
            is_initial_zero: canonical.is_zero(),
            has_been_focused_once: false,
        }
    }
}

impl Default for InputSessionState {
    fn default() -> Self {
        Self::new()
    }
}
