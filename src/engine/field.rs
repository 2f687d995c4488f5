// ============================================================================
// Amount Field
// The shared per-field engine: normalize → format → selection per callback
// ============================================================================

use crate::domain::{
    CanonicalAmount, FieldId, InputSessionState, LocaleFormatConfig, Selection, SelectionEvent,
};
use crate::engine::normalizer::KeystrokeNormalizer;
use crate::engine::selection::{ReassertScheduler, ReassertTicket, SelectionController};
use crate::format::DisplayFormatter;
use crate::interfaces::{FieldEvent, FieldEventHandler};
use crate::locale::LocaleFormatResolver;
use chrono::Utc;
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::sync::Arc;

/// Everything the host pushes back onto the input surface after one
/// callback, plus the canonical value emitted upward to the owning screen.
#[derive(Debug, Clone)]
pub struct FieldUpdate {
    /// The true value, locale-independent
    pub canonical: CanonicalAmount,

    /// The string to render in the widget
    pub display: String,

    /// The selection to apply immediately
    pub selection: Selection,

    /// Ticket for the deferred selection reassertion
    pub reassert: ReassertTicket,
}

/// One amount field instance.
///
/// The two near-identical input widgets of the original screens collapse
/// into this single engine, parameterized by `show_symbol`. Each instance
/// exclusively owns its session state; processing is synchronous per
/// callback, and the only asynchrony is the deferred selection reassertion
/// redeemed through the shared [`ReassertScheduler`].
pub struct AmountField {
    /// Field identity, keys the reassertion queue
    id: FieldId,

    /// Resolved display configuration
    config: LocaleFormatConfig,

    /// Whether the rendered string carries the currency symbol prefix
    show_symbol: bool,

    /// Per-field transient state
    session: InputSessionState,

    /// Deferred selection reassertion queue (shared across fields)
    scheduler: Arc<ReassertScheduler>,

    /// Event handler for observing field activity
    event_handler: Arc<dyn FieldEventHandler>,
}

impl AmountField {
    /// Create a field with its own private scheduler.
    ///
    /// Hosts managing several fields on one screen should use
    /// [`AmountFieldBuilder`] and share a scheduler instead.
    pub fn new(
        config: LocaleFormatConfig,
        show_symbol: bool,
        event_handler: Arc<dyn FieldEventHandler>,
    ) -> Self {
        Self {
            id: FieldId::new(),
            config,
            show_symbol,
            session: InputSessionState::new(),
            scheduler: Arc::new(ReassertScheduler::new()),
            event_handler,
        }
    }

    // ========================================================================
    // Host Callbacks
    // ========================================================================

    /// The widget reported new text after a keystroke.
    pub fn text_changed(&mut self, raw_text: &str) -> FieldUpdate {
        let previous = self.session.canonical;
        let outcome = KeystrokeNormalizer::normalize(raw_text, &self.config, &mut self.session);

        let mut events: SmallVec<[FieldEvent; 4]> = SmallVec::new();
        if let Some(reason) = outcome.rejected {
            events.push(FieldEvent::EditRejected {
                field: self.id,
                reason,
                timestamp: Utc::now(),
            });
        }
        if let Some(repair) = outcome.repair {
            events.push(FieldEvent::RepairApplied {
                field: self.id,
                repair,
                timestamp: Utc::now(),
            });
        }
        if outcome.canonical != previous {
            events.push(FieldEvent::ValueChanged {
                field: self.id,
                canonical: outcome.canonical,
                timestamp: Utc::now(),
            });
        }

        self.finish(SelectionEvent::TextChanged, events)
    }

    /// The field received focus.
    pub fn focus_gained(&mut self) -> FieldUpdate {
        self.finish(SelectionEvent::FocusGained, SmallVec::new())
    }

    /// Externally driven value change (e.g. loading an existing transaction
    /// for editing, or a programmatic reset).
    ///
    /// The incoming string is sanitized through the same pipeline as
    /// keystrokes, so a foreign or display-formatted value can never install
    /// a non-canonical state. Unsalvageable input degrades to `"0"`.
    pub fn set_value(&mut self, value: &str) -> FieldUpdate {
        let previous = self.session.canonical;
        let canonical = Self::sanitize_external(value, &self.config);
        self.session = InputSessionState::from_value(canonical);

        let mut events: SmallVec<[FieldEvent; 4]> = SmallVec::new();
        if canonical != previous {
            events.push(FieldEvent::ValueChanged {
                field: self.id,
                canonical,
                timestamp: Utc::now(),
            });
        }

        self.finish(SelectionEvent::ValueSet, events)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn id(&self) -> FieldId {
        self.id
    }

    /// The current canonical value.
    pub fn canonical(&self) -> CanonicalAmount {
        self.session.canonical
    }

    /// The current value as a decimal, for persistence/validation layers.
    pub fn value(&self) -> Decimal {
        self.session.canonical.to_decimal()
    }

    /// The current rendered display string.
    pub fn display(&self) -> String {
        DisplayFormatter::format(&self.session.canonical, &self.config, self.show_symbol)
    }

    pub fn config(&self) -> &LocaleFormatConfig {
        &self.config
    }

    pub fn session(&self) -> &InputSessionState {
        &self.session
    }

    /// The reassertion queue this field schedules into.
    pub fn scheduler(&self) -> Arc<ReassertScheduler> {
        Arc::clone(&self.scheduler)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn sanitize_external(value: &str, config: &LocaleFormatConfig) -> CanonicalAmount {
        CanonicalAmount::parse(value.trim()).unwrap_or_else(|_| {
            // Not already canonical (display-formatted, foreign separators,
            // junk): run it through the keystroke pipeline, minus the
            // placeholder repairs which only make sense mid-typing
            let mut scratch = InputSessionState::new();
            scratch.is_initial_zero = false;
            KeystrokeNormalizer::normalize(value.trim(), config, &mut scratch).canonical
        })
    }

    /// Common tail: format, place the cursor, queue the reassertion, emit.
    fn finish(
        &mut self,
        event: SelectionEvent,
        mut events: SmallVec<[FieldEvent; 4]>,
    ) -> FieldUpdate {
        let display =
            DisplayFormatter::format(&self.session.canonical, &self.config, self.show_symbol);
        let rendered_len = display.chars().count();

        let selection = SelectionController::next_selection(&mut self.session, rendered_len, event);
        let reassert = self.scheduler.schedule(self.id, selection);

        events.push(FieldEvent::SelectionScheduled {
            field: self.id,
            selection,
            generation: reassert.generation,
            timestamp: Utc::now(),
        });
        self.event_handler.on_events(events.into_vec());

        FieldUpdate {
            canonical: self.session.canonical,
            display,
            selection,
            reassert,
        }
    }
}

impl Drop for AmountField {
    fn drop(&mut self) {
        // An unmounted field must not leave a stale reassertion behind
        self.scheduler.cancel(self.id);
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent construction of an [`AmountField`] from profile/device settings.
///
/// # Example
/// ```
/// use amount_input_engine::prelude::*;
/// use std::sync::Arc;
///
/// let mut field = AmountFieldBuilder::new()
///     .profile_currency("BRL")
///     .profile_country("BR")
///     .device_locale("pt-BR")
///     .format_preference("1.234,56")
///     .build(Arc::new(NoOpFieldEventHandler));
///
/// let update = field.text_changed("1234");
/// assert_eq!(update.display, "R$ 1.234");
/// ```
pub struct AmountFieldBuilder {
    profile_currency: Option<String>,
    profile_country: Option<String>,
    device_locale: String,
    format_preference: Option<String>,
    show_symbol: bool,
    initial_value: Option<String>,
    scheduler: Option<Arc<ReassertScheduler>>,
}

impl AmountFieldBuilder {
    pub fn new() -> Self {
        Self {
            profile_currency: None,
            profile_country: None,
            device_locale: "en-US".to_string(),
            format_preference: None,
            show_symbol: true,
            initial_value: None,
            scheduler: None,
        }
    }

    /// ISO 4217 currency code from the user profile.
    pub fn profile_currency(mut self, code: impl Into<String>) -> Self {
        self.profile_currency = Some(code.into());
        self
    }

    /// ISO 3166 country from the user profile.
    pub fn profile_country(mut self, country: impl Into<String>) -> Self {
        self.profile_country = Some(country.into());
        self
    }

    /// Locale tag reported by the device.
    pub fn device_locale(mut self, locale: impl Into<String>) -> Self {
        self.device_locale = locale.into();
        self
    }

    /// Persisted separator preset pattern (e.g. `"1.234,56"`).
    pub fn format_preference(mut self, preference: impl Into<String>) -> Self {
        self.format_preference = Some(preference.into());
        self
    }

    /// Whether the rendered string carries the currency symbol prefix.
    pub fn show_symbol(mut self, show_symbol: bool) -> Self {
        self.show_symbol = show_symbol;
        self
    }

    /// Mount with an externally supplied value instead of the placeholder.
    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    /// Share a reassertion scheduler across the screen's fields.
    pub fn scheduler(mut self, scheduler: Arc<ReassertScheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Build the field. Total: locale resolution always succeeds by falling
    /// back to its documented defaults.
    pub fn build(self, event_handler: Arc<dyn FieldEventHandler>) -> AmountField {
        let config = LocaleFormatResolver::resolve_cached(
            self.profile_currency.as_deref(),
            self.profile_country.as_deref(),
            &self.device_locale,
            self.format_preference.as_deref(),
        );

        let session = match &self.initial_value {
            Some(value) => {
                InputSessionState::from_value(AmountField::sanitize_external(value, &config))
            },
            None => InputSessionState::new(),
        };

        AmountField {
            id: FieldId::new(),
            config,
            show_symbol: self.show_symbol,
            session,
            scheduler: self
                .scheduler
                .unwrap_or_else(|| Arc::new(ReassertScheduler::new())),
            event_handler,
        }
    }
}

impl Default for AmountFieldBuilder {
    fn default() -> Self {
        Self::new()
    }
}
