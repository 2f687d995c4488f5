// ============================================================================
// Canonical Amount
// Locale-independent normalized decimal string for monetary values
// ============================================================================

use super::errors::{AmountError, AmountResult};
use arrayvec::ArrayString;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// The locale-independent canonical form of an amount field's value.
///
/// Matches the grammar `0 | [1-9][0-9]* | (0|[1-9][0-9]*)\.[0-9]{0,2}` with a
/// total length of at most 12 characters. The decimal separator is always `.`
/// regardless of the display locale; a trailing `.` with no fractional digits
/// is valid and means the user has committed a decimal point but typed no
/// fraction yet.
///
/// Values are `Copy` and stored inline; normalization replaces the whole
/// value rather than mutating it, which keeps undo/history reasoning simple.
///
/// # Example
/// ```
/// use amount_input_engine::domain::CanonicalAmount;
///
/// let amount: CanonicalAmount = "1234.5".parse().unwrap();
/// assert_eq!(amount.integer_digits(), "1234");
/// assert_eq!(amount.fraction_digits(), Some("5"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalAmount(ArrayString<12>);

impl CanonicalAmount {
    /// Maximum canonical length in characters.
    pub const MAX_LEN: usize = 12;

    /// Maximum number of digits after the decimal separator.
    pub const FRACTION_DIGITS: usize = 2;

    /// The placeholder value shown in an untouched amount field.
    pub fn zero() -> Self {
        let mut buf = ArrayString::new();
        buf.push('0');
        Self(buf)
    }

    /// Parse an untrusted string into a canonical amount.
    ///
    /// # Errors
    /// Returns the specific [`AmountError`] describing the first grammar
    /// violation found.
    pub fn parse(s: &str) -> AmountResult<Self> {
        Self::validate(s)?;
        ArrayString::from(s)
            .map(Self)
            .map_err(|_| AmountError::TooLong)
    }

    fn validate(s: &str) -> AmountResult<()> {
        if s.is_empty() {
            return Err(AmountError::Empty);
        }
        if s.len() > Self::MAX_LEN {
            return Err(AmountError::TooLong);
        }

        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (s, None),
        };

        if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::InvalidCharacter);
        }
        if int_part.len() > 1 && int_part.starts_with('0') {
            return Err(AmountError::LeadingZero);
        }

        if let Some(frac) = frac_part {
            if frac.contains('.') {
                return Err(AmountError::MultipleSeparators);
            }
            if !frac.bytes().all(|b| b.is_ascii_digit()) {
                return Err(AmountError::InvalidCharacter);
            }
            if frac.len() > Self::FRACTION_DIGITS {
                return Err(AmountError::TooManyFractionDigits);
            }
        }

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The canonical string itself. Parses directly as a decimal number.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Length in characters (canonical strings are pure ASCII).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this is the placeholder value `"0"`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.as_str() == "0"
    }

    /// Whether the user has committed a decimal separator.
    #[inline]
    pub fn has_separator(&self) -> bool {
        self.0.contains('.')
    }

    /// The digits before the decimal separator.
    pub fn integer_digits(&self) -> &str {
        match self.as_str().split_once('.') {
            Some((int_part, _)) => int_part,
            None => self.as_str(),
        }
    }

    /// The digits after the decimal separator, if one was committed.
    ///
    /// `Some("")` means the separator was typed but no fraction digits yet.
    pub fn fraction_digits(&self) -> Option<&str> {
        self.as_str().split_once('.').map(|(_, frac)| frac)
    }

    /// Convert to a [`Decimal`] for the persistence/validation layers.
    ///
    /// Total: a trailing separator is dropped before parsing, and a parse
    /// failure (unreachable for values holding the canonical invariant)
    /// degrades to zero rather than panicking.
    pub fn to_decimal(&self) -> Decimal {
        let s = self.as_str();
        let s = s.strip_suffix('.').unwrap_or(s);
        Decimal::from_str(s).unwrap_or(Decimal::ZERO)
    }
}

impl Default for CanonicalAmount {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for CanonicalAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for CanonicalAmount {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for CanonicalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CanonicalAmount({:?})", self.as_str())
    }
}

impl fmt::Display for CanonicalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Serde (manual impls: the value serializes as its canonical string)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for CanonicalAmount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CanonicalAmount {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        let zero = CanonicalAmount::zero();
        assert_eq!(zero.as_str(), "0");
        assert!(zero.is_zero());
        assert!(!zero.has_separator());
        assert_eq!(zero.to_decimal(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_valid() {
        for s in ["0", "5", "12", "12.", "12.3", "12.34", "0.05", "999999999.99"] {
            let amount = CanonicalAmount::parse(s).unwrap();
            assert_eq!(amount.as_str(), s);
        }
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(CanonicalAmount::parse(""), Err(AmountError::Empty));
        assert_eq!(
            CanonicalAmount::parse("1234567890123"),
            Err(AmountError::TooLong)
        );
        assert_eq!(
            CanonicalAmount::parse("12a"),
            Err(AmountError::InvalidCharacter)
        );
        assert_eq!(
            CanonicalAmount::parse(".5"),
            Err(AmountError::InvalidCharacter)
        );
        assert_eq!(
            CanonicalAmount::parse("1.2.3"),
            Err(AmountError::MultipleSeparators)
        );
        assert_eq!(
            CanonicalAmount::parse("12.345"),
            Err(AmountError::TooManyFractionDigits)
        );
        assert_eq!(CanonicalAmount::parse("05"), Err(AmountError::LeadingZero));
    }

    #[test]
    fn test_accessors() {
        let amount: CanonicalAmount = "1234.5".parse().unwrap();
        assert_eq!(amount.integer_digits(), "1234");
        assert_eq!(amount.fraction_digits(), Some("5"));
        assert_eq!(amount.len(), 6);

        let whole: CanonicalAmount = "42".parse().unwrap();
        assert_eq!(whole.integer_digits(), "42");
        assert_eq!(whole.fraction_digits(), None);
    }

    #[test]
    fn test_trailing_separator() {
        let amount: CanonicalAmount = "12.".parse().unwrap();
        assert!(amount.has_separator());
        assert_eq!(amount.fraction_digits(), Some(""));
        assert_eq!(amount.to_decimal(), Decimal::from(12));
    }

    #[test]
    fn test_to_decimal() {
        let amount: CanonicalAmount = "12.34".parse().unwrap();
        assert_eq!(amount.to_decimal(), Decimal::new(1234, 2));
    }

    #[test]
    fn test_display() {
        let amount: CanonicalAmount = "0.05".parse().unwrap();
        assert_eq!(amount.to_string(), "0.05");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let amount: CanonicalAmount = "12.34".parse().unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"12.34\"");

        let back: CanonicalAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);

        // Deserialization enforces the canonical grammar
        let bad: Result<CanonicalAmount, _> = serde_json::from_str("\"1,2\"");
        assert!(bad.is_err());
    }
}
