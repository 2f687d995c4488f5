// ============================================================================
// Keystroke Normalizer
// Ordered policy pipeline from raw widget text to a canonical amount
// ============================================================================

use crate::domain::{CanonicalAmount, InputSessionState, LocaleFormatConfig};
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Outcome Types
// ============================================================================

/// A platform-artifact repair the normalizer applied to the raw text.
///
/// Repairs are named so field telemetry can confirm (or falsify) the
/// workarounds against real device behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RepairKind {
    /// The widget reported a keystroke as "prepended" after a forced cursor
    /// move; the first character was re-interpreted as an appended digit.
    PrependedDigit,
    /// A keystroke into the placeholder zero raced the keyboard's own
    /// replacement logic and doubled up; only the first digit was kept.
    PlaceholderDoubleEntry,
}

/// Why an edit was rejected outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RejectReason {
    /// Raw text longer than the canonical bound (pathological paste)
    InputTooLong,
}

/// Result of one normalization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOutcome {
    /// The new canonical value (also stored on the session)
    pub canonical: CanonicalAmount,

    /// Platform repair applied, if any
    pub repair: Option<RepairKind>,

    /// Set when the edit was rejected and the previous canonical kept
    pub rejected: Option<RejectReason>,
}

// ============================================================================
// Normalizer
// ============================================================================

/// The per-keystroke state machine turning raw, unvalidated widget text into
/// a canonical amount.
///
/// Total over its input domain: it never panics, and every pass leaves the
/// session holding a value that satisfies the canonical invariant. Callers
/// are only ever handed post-normalization values.
pub struct KeystrokeNormalizer;

impl KeystrokeNormalizer {
    /// Apply the policy pipeline to the text the widget reported after an
    /// edit. Reads the previous canonical from `session`, writes the new
    /// canonical and placeholder flag back, and returns the outcome.
    pub fn normalize(
        raw_text: &str,
        config: &LocaleFormatConfig,
        session: &mut InputSessionState,
    ) -> NormalizeOutcome {
        let previous = session.canonical;

        // Length guard: bounds pathological paste / rapid-typing input
        if raw_text.chars().count() > CanonicalAmount::MAX_LEN {
            tracing::debug!(raw_len = raw_text.len(), "edit rejected: raw text too long");
            return NormalizeOutcome {
                canonical: previous,
                repair: None,
                rejected: Some(RejectReason::InputTooLong),
            };
        }

        let mut repair = None;

        // Digit-append repair: some widgets report a keystroke as "new
        // character prepended" when text state syncs against a forced cursor
        // position. The pattern is unambiguous: one extra leading character,
        // rest identical to the previous canonical.
        let effective: Cow<'_, str> = if session.is_initial_zero {
            Cow::Borrowed(raw_text)
        } else {
            let mut chars = raw_text.chars();
            match chars.next() {
                Some(first) if chars.as_str() == previous.as_str() => {
                    tracing::debug!(%first, "repaired prepended keystroke as append");
                    repair = Some(RepairKind::PrependedDigit);
                    Cow::Owned(format!("{}{}", previous.as_str(), first))
                },
                _ => Cow::Borrowed(raw_text),
            }
        };

        // Placeholder-zero entry repairs
        if session.is_initial_zero && previous.is_zero() {
            let mut chars = effective.chars();
            let (first, second, third) = (chars.next(), chars.next(), chars.next());

            // Keyboard replacement of the placeholder can race and double up;
            // the first digit is the user's intended entry.
            if let (Some(a), Some(b), None) = (first, second, third) {
                if a.is_ascii_digit() && b.is_ascii_digit() {
                    session.is_initial_zero = false;
                    let canonical = Self::single_digit(a);
                    session.canonical = canonical;
                    tracing::debug!(kept = %a, dropped = %b, "repaired doubled placeholder entry");
                    return NormalizeOutcome {
                        canonical,
                        repair: Some(RepairKind::PlaceholderDoubleEntry),
                        rejected: None,
                    };
                }
            }

            // First real digit replaces the placeholder wholesale
            if let (Some(digit), None) = (first, second) {
                if digit.is_ascii_digit() && digit != '0' {
                    session.is_initial_zero = false;
                    let canonical = Self::single_digit(digit);
                    session.canonical = canonical;
                    return NormalizeOutcome {
                        canonical,
                        repair,
                        rejected: None,
                    };
                }
            }
        }

        let canonical = Self::sanitize(&effective, config, previous);

        session.canonical = canonical;
        if canonical.is_zero() && !effective.bytes().any(|b| b.is_ascii_digit()) {
            // Everything was erased; the field is back to its placeholder
            session.is_initial_zero = true;
        } else if !canonical.is_zero() {
            session.is_initial_zero = false;
        }

        NormalizeOutcome {
            canonical,
            repair,
            rejected: None,
        }
    }

    // ========================================================================
    // Filtering Rules
    // ========================================================================

    /// Character filtering, separator collapse, fractional truncation and
    /// leading-zero collapse, in that order.
    fn sanitize(
        text: &str,
        config: &LocaleFormatConfig,
        previous: CanonicalAmount,
    ) -> CanonicalAmount {
        let decimal = config.decimal_separator;
        let thousands = config.thousands_separator;

        // Keep digits and separator characters only. `.` is always accepted
        // alongside the configured pair: canonical values use it internally,
        // and re-normalizing one must be stable.
        let filtered: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == decimal || *c == thousands || *c == '.')
            .collect();

        // Nothing left, or separators only: collapse to the placeholder
        if !filtered.bytes().any(|b| b.is_ascii_digit()) {
            return CanonicalAmount::zero();
        }

        // Only the LAST separator is the decimal point; earlier ones are
        // grouping noise from autocorrect or paste
        let last_separator = filtered
            .char_indices()
            .rev()
            .find(|(_, c)| !c.is_ascii_digit());
        let (integer_raw, fraction_raw) = match last_separator {
            Some((idx, sep)) => (&filtered[..idx], Some(&filtered[idx + sep.len_utf8()..])),
            None => (filtered.as_str(), None),
        };

        let integer_digits: String = integer_raw.chars().filter(|c| c.is_ascii_digit()).collect();

        // Leading zeros are never meaningful once another digit exists
        let integer_digits = match integer_digits.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };

        // At most two fractional digits
        let fraction_digits: Option<String> = fraction_raw.map(|f| {
            f.chars()
                .filter(|c| c.is_ascii_digit())
                .take(CanonicalAmount::FRACTION_DIGITS)
                .collect()
        });

        let mut assembled = String::with_capacity(CanonicalAmount::MAX_LEN);
        assembled.push_str(integer_digits);
        if let Some(fraction) = &fraction_digits {
            assembled.push('.');
            assembled.push_str(fraction);
        }

        // Unreachable given the rules above, but the pipeline must stay total
        CanonicalAmount::parse(&assembled).unwrap_or_else(|err| {
            tracing::warn!(%assembled, %err, "sanitized text not canonical, keeping previous");
            previous
        })
    }

    fn single_digit(digit: char) -> CanonicalAmount {
        let mut buf = [0u8; 4];
        CanonicalAmount::parse(digit.encode_utf8(&mut buf))
            .unwrap_or_else(|_| CanonicalAmount::zero())
    }
}
