//! # Vehicle License Plates
//!
//! Two textual layouts are accepted:
//!
//! | Layout   | Pattern             | Example    |
//! |----------|---------------------|------------|
//! | Legacy   | `LLL-?NNNN`         | `ABC-1234` |
//! | Mercosul | `LLL N L NN`        | `ABC1D23`  |
//!
//! Letters are matched case-insensitively and surrounding whitespace is
//! ignored. A parsed [`Plate`] stores the 7 alphanumeric characters
//! upper-cased, without separators.
//!
//! Legacy plates convert to Mercosul by replacing the second digit with the
//! letter at the same index of `A..=J`.

use crate::domain::{DocumentDomain, MessageKey};
use crate::error::DocumentError;
use crate::messages::{resolve_message, DefaultMessages, MessageResolver};

/// Character count of a normalized plate.
pub const PLATE_LEN: usize = 7;

/// Letters substituted for the digits `0..=9` in Mercosul conversion.
const MERCOSUL_LETTERS: [char; 10] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

/// Brazilian vehicle license plate, legacy or Mercosul.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Plate(String);

impl_document_serde!(Plate);

impl Plate {
    /// Parse a plate in either layout.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidFormat`] if the value matches neither
    /// layout.
    pub fn parse(value: &str) -> Result<Self, DocumentError> {
        Self::parse_with(value, &DefaultMessages)
    }

    /// Like [`Plate::parse`], resolving the error message through `resolver`.
    pub fn parse_with(value: &str, resolver: &dyn MessageResolver) -> Result<Self, DocumentError> {
        if !Self::is_valid_str(value) {
            tracing::debug!(input = value, "rejected plate");
            return Err(invalid_format(resolver));
        }
        Ok(Self(normalize(value)))
    }

    /// Whether `value` matches the Mercosul or the legacy layout.
    pub fn is_valid_str(value: &str) -> bool {
        let trimmed = value.trim().as_bytes();
        matches_mercosul(trimmed) || matches_legacy(trimmed)
    }

    /// Whether `value` matches the Mercosul layout.
    pub fn is_mercosul_str(value: &str) -> bool {
        matches_mercosul(value.trim().as_bytes())
    }

    /// Whether the stored value matches either layout.
    pub fn is_valid(&self) -> bool {
        Self::is_valid_str(&self.0)
    }

    /// Whether the stored value is in the Mercosul layout.
    pub fn is_mercosul(&self) -> bool {
        Self::is_mercosul_str(&self.0)
    }

    /// Whether the stored value is in the legacy layout.
    pub fn is_legacy(&self) -> bool {
        matches_legacy(self.0.as_bytes())
    }

    /// The normalized 7-character value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert a plate string to the Mercosul layout.
    ///
    /// Mercosul input is returned trimmed and upper-cased. Legacy input keeps
    /// its letters and first digit as given, swaps the second digit for its
    /// letter, and keeps the last two digits: `ABC-1234` becomes `ABC1C34`,
    /// `abc1234` becomes `abc1C34`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidFormat`] if the value matches neither
    /// layout.
    pub fn convert_to_mercosul(value: &str) -> Result<String, DocumentError> {
        Self::convert_to_mercosul_with(value, &DefaultMessages)
    }

    /// Like [`Plate::convert_to_mercosul`], resolving the error message
    /// through `resolver`.
    pub fn convert_to_mercosul_with(
        value: &str,
        resolver: &dyn MessageResolver,
    ) -> Result<String, DocumentError> {
        if !Self::is_valid_str(value) {
            tracing::debug!(input = value, "rejected plate conversion");
            return Err(invalid_format(resolver));
        }
        if Self::is_mercosul_str(value) {
            return Ok(value.trim().to_uppercase());
        }

        let core: Vec<char> = value.chars().filter(char::is_ascii_alphanumeric).collect();
        let mut converted: String = core[..4].iter().collect();
        converted.push(mercosul_letter(core[4])?);
        converted.extend(&core[5..]);
        Ok(converted)
    }

    /// Instance form of [`Plate::convert_to_mercosul`].
    pub fn to_mercosul(&self) -> Result<Plate, DocumentError> {
        Self::convert_to_mercosul(&self.0).map(Self)
    }
}

impl TryFrom<&str> for Plate {
    type Error = DocumentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl std::str::FromStr for Plate {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_mercosul() {
            f.write_str(&self.0)
        } else {
            let (letters, digits) = self.0.split_at(3usize.min(self.0.len()));
            write!(f, "{letters}-{digits}")
        }
    }
}

fn invalid_format(resolver: &dyn MessageResolver) -> DocumentError {
    DocumentError::InvalidFormat {
        domain: DocumentDomain::Plate,
        key: MessageKey::ImplicitStringOperator,
        message: resolve_message(
            resolver,
            DocumentDomain::Plate,
            MessageKey::ImplicitStringOperator,
        ),
    }
}

/// Keep ASCII alphanumerics, upper-cased.
fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn mercosul_letter(digit: char) -> Result<char, DocumentError> {
    digit
        .to_digit(10)
        .and_then(|d| MERCOSUL_LETTERS.get(d as usize))
        .copied()
        .ok_or(DocumentError::UnreachableSubstitution(digit))
}

/// `^[A-Za-z]{3}[0-9][A-Za-z][0-9]{2}$`
fn matches_mercosul(b: &[u8]) -> bool {
    b.len() == PLATE_LEN
        && b[..3].iter().all(u8::is_ascii_alphabetic)
        && b[3].is_ascii_digit()
        && b[4].is_ascii_alphabetic()
        && b[5..].iter().all(u8::is_ascii_digit)
}

/// `^[A-Za-z]{3}-?[0-9]{4}$`
fn matches_legacy(b: &[u8]) -> bool {
    let digits = match b.len() {
        7 => &b[3..],
        8 if b[3] == b'-' => &b[4..],
        _ => return false,
    };
    b[..3].iter().all(u8::is_ascii_alphabetic) && digits.iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::MessageCatalog;

    const FORMATTED: &str = "ABC-1234";
    const UNFORMATTED: &str = "abc1234";
    const MERCOSUL: &str = "ABC1D23";
    const CONVERTED: &str = "ABC1C34";

    #[test]
    fn legacy_formatted_is_valid() {
        let plate = Plate::parse(FORMATTED).unwrap();
        assert!(plate.is_valid());
        assert!(plate.is_legacy());
        assert!(!plate.is_mercosul());
        assert_eq!(plate.as_str(), "ABC1234");
    }

    #[test]
    fn legacy_unformatted_is_valid_and_displays_with_hyphen() {
        let plate = Plate::parse(UNFORMATTED).unwrap();
        assert!(plate.is_valid());
        assert_eq!(plate.to_string(), FORMATTED);
        assert_eq!(Plate::parse("ABC1234").unwrap().to_string(), FORMATTED);
    }

    #[test]
    fn mercosul_is_valid() {
        let plate = Plate::parse(MERCOSUL).unwrap();
        assert!(plate.is_valid());
        assert!(plate.is_mercosul());
        assert!(!plate.is_legacy());
        assert_eq!(plate.to_string(), MERCOSUL);
    }

    #[test]
    fn mercosul_lowercase_is_normalized() {
        let plate: Plate = "  abc1d23 ".parse().unwrap();
        assert_eq!(plate.as_str(), MERCOSUL);
        assert!(Plate::is_mercosul_str(" abc1d23 "));
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["", "AB1234", "ABCD123", "ABC12345", "ABC--1234", "1BC1234", "ABC1DD3", "ABC 1234", "ÁBC1234"] {
            assert!(Plate::parse(bad).is_err(), "{bad:?} should be rejected");
        }
        let err = Plate::parse("nope").unwrap_err();
        assert_eq!(err.domain(), DocumentDomain::Plate);
        assert_eq!(err.key(), Some(MessageKey::ImplicitStringOperator));
    }

    #[test]
    fn mercosul_pattern_does_not_accept_legacy() {
        assert!(!Plate::is_mercosul_str(FORMATTED));
        assert!(!Plate::is_mercosul_str(UNFORMATTED));
        assert!(!Plate::is_mercosul_str("ABC-1D23"));
    }

    #[test]
    fn convert_legacy() {
        assert_eq!(Plate::convert_to_mercosul(FORMATTED).unwrap(), CONVERTED);
        assert_eq!(Plate::convert_to_mercosul("ABC1234").unwrap(), CONVERTED);

        let converted = Plate::parse(FORMATTED).unwrap().to_mercosul().unwrap();
        assert!(converted.is_valid());
        assert!(converted.is_mercosul());
        assert_eq!(converted.to_string(), CONVERTED);
    }

    #[test]
    fn convert_keeps_leading_characters_verbatim() {
        assert_eq!(Plate::convert_to_mercosul("abc1234").unwrap(), "abc1C34");
        assert_eq!(Plate::convert_to_mercosul(" aBc-1234 ").unwrap(), "aBc1C34");
        // Stored plates are already upper-cased.
        let plate = Plate::parse("abc1234").unwrap();
        assert_eq!(plate.to_mercosul().unwrap().as_str(), CONVERTED);
    }

    #[test]
    fn convert_uses_full_table() {
        let expected = ["ABC1A34", "ABC1B34", "ABC1C34", "ABC1D34", "ABC1E34", "ABC1F34", "ABC1G34", "ABC1H34", "ABC1I34", "ABC1J34"];
        for (d, want) in expected.iter().enumerate() {
            let legacy = format!("ABC1{d}34");
            assert_eq!(&Plate::convert_to_mercosul(&legacy).unwrap(), want);
        }
    }

    #[test]
    fn convert_mercosul_is_idempotent() {
        assert_eq!(Plate::convert_to_mercosul(MERCOSUL).unwrap(), MERCOSUL);
        assert_eq!(Plate::convert_to_mercosul(" abc1d23").unwrap(), MERCOSUL);
        let plate = Plate::parse(MERCOSUL).unwrap();
        assert_eq!(plate.to_mercosul().unwrap(), plate);
    }

    #[test]
    fn convert_rejects_invalid() {
        let err = Plate::convert_to_mercosul("AB-1234").unwrap_err();
        assert!(matches!(err, DocumentError::InvalidFormat { domain: DocumentDomain::Plate, .. }));
    }

    #[test]
    fn convert_with_resolver() {
        let mut catalog = MessageCatalog::new();
        catalog.insert(DocumentDomain::Plate, MessageKey::ImplicitStringOperator, "Placa inválida");
        let err = Plate::convert_to_mercosul_with("???", &catalog).unwrap_err();
        assert_eq!(err.message(), Some("Placa inválida"));
    }

    #[test]
    fn substitution_table_fails_loudly() {
        assert_eq!(mercosul_letter('0').unwrap(), 'A');
        assert_eq!(mercosul_letter('9').unwrap(), 'J');
        assert_eq!(
            mercosul_letter('X').unwrap_err(),
            DocumentError::UnreachableSubstitution('X')
        );
    }

    #[test]
    fn serde_roundtrip() {
        let plate = Plate::parse(UNFORMATTED).unwrap();
        let json = serde_json::to_string(&plate).unwrap();
        assert_eq!(json, format!("\"{FORMATTED}\""));
        let back: Plate = serde_json::from_str(&json).unwrap();
        assert_eq!(plate, back);
        assert!(serde_json::from_str::<Plate>("\"ABC\"").is_err());
    }
}
