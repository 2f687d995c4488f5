// ============================================================================
// Selection Controller
// Cursor placement rules and the deferred reassertion queue
// ============================================================================

use crate::domain::{FieldId, InputSessionState, Selection, SelectionEvent};
use parking_lot::RwLock;
use std::collections::HashMap;

// ============================================================================
// Placement Rules
// ============================================================================

/// Computes the cursor range to push to the widget for each host signal.
pub struct SelectionController;

impl SelectionController {
    /// Compute (and record on the session) the next selection.
    ///
    /// `rendered_len` is the character length of the formatted display
    /// string, which is what the widget holds.
    ///
    /// Rules:
    /// - `TextChanged` and `ValueSet` collapse the caret to the end.
    /// - The first `FocusGained` on an untouched placeholder spans `{0,1}`
    ///   so the first keystroke replaces the zero wholesale; focuses after
    ///   that collapse to the end.
    pub fn next_selection(
        session: &mut InputSessionState,
        rendered_len: usize,
        event: SelectionEvent,
    ) -> Selection {
        let selection = match event {
            SelectionEvent::TextChanged | SelectionEvent::ValueSet => {
                Selection::collapsed(rendered_len)
            },
            SelectionEvent::FocusGained => {
                if session.is_initial_zero && !session.has_been_focused_once {
                    Selection::span(0, 1)
                } else {
                    Selection::collapsed(rendered_len)
                }
            },
        };

        if event == SelectionEvent::FocusGained {
            session.has_been_focused_once = true;
        }
        session.selection = selection;
        selection
    }
}

// ============================================================================
// Deferred Reassertion
// ============================================================================

/// A scheduled selection fix for one field.
///
/// The host applies the selection immediately, then re-asserts it after a
/// short delay (at least one platform applies programmatic selection
/// asynchronously relative to the value assignment). Resolving a ticket whose
/// generation has been superseded yields nothing, so a stale fix can never
/// overwrite a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReassertTicket {
    pub field: FieldId,
    pub generation: u64,
    pub selection: Selection,
}

struct Pending {
    generation: u64,
    selection: Selection,
}

/// Last-writer-wins queue of pending selection reassertions, keyed by field
/// identity. Shared by every field of a screen; each entry is superseded by
/// the next keystroke on the same field.
#[derive(Default)]
pub struct ReassertScheduler {
    pending: RwLock<HashMap<FieldId, Pending>>,
}

impl ReassertScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `selection` for deferred re-application, superseding any
    /// pending entry for the same field.
    pub fn schedule(&self, field: FieldId, selection: Selection) -> ReassertTicket {
        let mut pending = self.pending.write();
        let generation = pending.get(&field).map_or(0, |p| p.generation + 1);
        pending.insert(
            field,
            Pending {
                generation,
                selection,
            },
        );

        tracing::trace!(field = %field.as_uuid(), generation, "selection reassertion scheduled");
        ReassertTicket {
            field,
            generation,
            selection,
        }
    }

    /// Redeem a ticket after the host's deferred delay.
    ///
    /// Returns the selection to re-apply, or `None` when a newer keystroke
    /// superseded this ticket (or it was already redeemed/cancelled).
    pub fn resolve(&self, ticket: &ReassertTicket) -> Option<Selection> {
        let mut pending = self.pending.write();
        match pending.get(&ticket.field) {
            Some(p) if p.generation == ticket.generation => {
                let selection = p.selection;
                pending.remove(&ticket.field);
                Some(selection)
            },
            _ => None,
        }
    }

    /// Drop any pending reassertion for `field` (e.g. the field unmounted).
    pub fn cancel(&self, field: FieldId) {
        self.pending.write().remove(&field);
    }

    pub fn has_pending(&self, field: FieldId) -> bool {
        self.pending.read().contains_key(&field)
    }
}

#[cfg(feature = "async")]
impl ReassertScheduler {
    /// Sleep the host-chosen delay, then redeem the ticket.
    ///
    /// Convenience for async hosts; the delivered selection is `None`
    /// whenever a newer keystroke arrived while sleeping.
    pub async fn reassert_after(
        &self,
        ticket: ReassertTicket,
        delay: std::time::Duration,
    ) -> Option<Selection> {
        tokio::time::sleep(delay).await;
        self.resolve(&ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_change_collapses_to_end() {
        let mut session = InputSessionState::new();
        let selection =
            SelectionController::next_selection(&mut session, 5, SelectionEvent::TextChanged);
        assert_eq!(selection, Selection::collapsed(5));
        assert_eq!(session.selection, selection);
    }

    #[test]
    fn test_first_focus_spans_placeholder() {
        let mut session = InputSessionState::new();

        let selection =
            SelectionController::next_selection(&mut session, 1, SelectionEvent::FocusGained);
        assert_eq!(selection, Selection::span(0, 1));
        assert!(session.has_been_focused_once);

        // Second focus collapses to the end instead
        let selection =
            SelectionController::next_selection(&mut session, 1, SelectionEvent::FocusGained);
        assert_eq!(selection, Selection::collapsed(1));
    }

    #[test]
    fn test_focus_on_existing_value_collapses() {
        let mut session = InputSessionState::from_value("12.5".parse().unwrap());
        let selection =
            SelectionController::next_selection(&mut session, 4, SelectionEvent::FocusGained);
        assert_eq!(selection, Selection::collapsed(4));
    }

    #[test]
    fn test_value_set_collapses_to_end() {
        let mut session = InputSessionState::from_value("7".parse().unwrap());
        let selection =
            SelectionController::next_selection(&mut session, 1, SelectionEvent::ValueSet);
        assert_eq!(selection, Selection::collapsed(1));
    }

    #[test]
    fn test_ticket_resolves_once() {
        let scheduler = ReassertScheduler::new();
        let field = FieldId::new();

        let ticket = scheduler.schedule(field, Selection::collapsed(3));
        assert_eq!(scheduler.resolve(&ticket), Some(Selection::collapsed(3)));
        assert_eq!(scheduler.resolve(&ticket), None);
    }

    #[test]
    fn test_newer_keystroke_supersedes() {
        let scheduler = ReassertScheduler::new();
        let field = FieldId::new();

        let stale = scheduler.schedule(field, Selection::collapsed(3));
        let fresh = scheduler.schedule(field, Selection::collapsed(4));

        // The older deferred fix must never overwrite the newer one
        assert_eq!(scheduler.resolve(&stale), None);
        assert_eq!(scheduler.resolve(&fresh), Some(Selection::collapsed(4)));
    }

    #[test]
    fn test_fields_do_not_interfere() {
        let scheduler = ReassertScheduler::new();
        let a = scheduler.schedule(FieldId::new(), Selection::collapsed(1));
        let b = scheduler.schedule(FieldId::new(), Selection::collapsed(2));

        assert_eq!(scheduler.resolve(&a), Some(Selection::collapsed(1)));
        assert_eq!(scheduler.resolve(&b), Some(Selection::collapsed(2)));
    }

    #[test]
    fn test_cancel_drops_pending() {
        let scheduler = ReassertScheduler::new();
        let field = FieldId::new();

        let ticket = scheduler.schedule(field, Selection::collapsed(3));
        scheduler.cancel(field);

        assert!(!scheduler.has_pending(field));
        assert_eq!(scheduler.resolve(&ticket), None);
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_reassert_after_delivers_current() {
        let scheduler = ReassertScheduler::new();
        let field = FieldId::new();

        let ticket = scheduler.schedule(field, Selection::collapsed(2));
        let delivered = scheduler
            .reassert_after(ticket, std::time::Duration::from_millis(1))
            .await;
        assert_eq!(delivered, Some(Selection::collapsed(2)));
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_reassert_after_suppresses_stale() {
        let scheduler = ReassertScheduler::new();
        let field = FieldId::new();

        let stale = scheduler.schedule(field, Selection::collapsed(2));
        scheduler.schedule(field, Selection::collapsed(3));

        let delivered = scheduler
            .reassert_after(stale, std::time::Duration::from_millis(1))
            .await;
        assert_eq!(delivered, None);
    }
}
