//! # CNPJ — Company Taxpayer Number
//!
//! A 14-digit registry number: 8-digit company root, 4-digit branch, and two
//! modulo-11 check digits. Shares the construction rules of [`crate::Cpf`]
//! with its own weight tables.

use crate::digits::{extract_digits, CheckDigitScheme};
use crate::domain::{DocumentDomain, MessageKey};
use crate::error::DocumentError;
use crate::messages::{resolve_message, DefaultMessages, MessageResolver};

/// Digit count of a CNPJ.
pub const CNPJ_LEN: usize = 14;

const SCHEME: CheckDigitScheme = CheckDigitScheme {
    len: CNPJ_LEN,
    first_weights: &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    second_weights: &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    separators: &[(2, '.'), (5, '.'), (8, '/'), (12, '-')],
};

/// Brazilian company taxpayer registry number (CNPJ).
///
/// Displays as `NN.NNN.NNN/NNNN-NN`. Integer construction does not
/// validate; string construction does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cnpj(u64);

impl_document_serde!(Cnpj);

impl Cnpj {
    /// Wrap an integer without validating it.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parse a formatted or bare CNPJ string.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidFormat`] if the extracted digits are
    /// not exactly 14 or the check digits do not match.
    pub fn parse(value: &str) -> Result<Self, DocumentError> {
        Self::parse_with(value, &DefaultMessages)
    }

    /// Like [`Cnpj::parse`], resolving the error message through `resolver`.
    pub fn parse_with(value: &str, resolver: &dyn MessageResolver) -> Result<Self, DocumentError> {
        let invalid = || {
            tracing::debug!(input = value, "rejected CNPJ");
            DocumentError::InvalidFormat {
                domain: DocumentDomain::Cnpj,
                key: MessageKey::ImplicitStringOperator,
                message: resolve_message(
                    resolver,
                    DocumentDomain::Cnpj,
                    MessageKey::ImplicitStringOperator,
                ),
            }
        };

        if !Self::is_valid_str(value) {
            return Err(invalid());
        }
        extract_digits(value)
            .parse::<u64>()
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Whether the stored value passes the check-digit test.
    pub fn is_valid(&self) -> bool {
        SCHEME.verify(&self.digits())
    }

    /// Whether `value` holds exactly 14 digits with matching check digits.
    /// Non-digit characters are ignored.
    pub fn is_valid_str(value: &str) -> bool {
        SCHEME.verify(value)
    }

    /// Validity of an unsigned integer CNPJ.
    pub fn is_valid_u64(value: u64) -> bool {
        Self::from(value).is_valid()
    }

    /// Validity of a signed integer CNPJ (sign discarded).
    pub fn is_valid_i64(value: i64) -> bool {
        Self::from(value).is_valid()
    }

    /// The zero-padded digit string, without punctuation.
    pub fn digits(&self) -> String {
        SCHEME.pad(self.0)
    }

    /// The stored value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The stored value as an unsigned integer.
    pub fn to_u64(self) -> u64 {
        self.0
    }

    /// The stored value as a signed integer.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::NumericOverflow`] if the value exceeds
    /// `i64::MAX`.
    pub fn to_i64(self) -> Result<i64, DocumentError> {
        self.to_i64_with(&DefaultMessages)
    }

    /// Like [`Cnpj::to_i64`], resolving the error message through `resolver`.
    pub fn to_i64_with(self, resolver: &dyn MessageResolver) -> Result<i64, DocumentError> {
        i64::try_from(self.0).map_err(|_| DocumentError::NumericOverflow {
            domain: DocumentDomain::Cnpj,
            key: MessageKey::ExplicitLongOperator,
            message: resolve_message(resolver, DocumentDomain::Cnpj, MessageKey::ExplicitLongOperator),
        })
    }
}

impl From<u64> for Cnpj {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<i64> for Cnpj {
    fn from(value: i64) -> Self {
        Self(value.unsigned_abs())
    }
}

impl From<Cnpj> for u64 {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}

impl TryFrom<Cnpj> for i64 {
    type Error = DocumentError;

    fn try_from(cnpj: Cnpj) -> Result<Self, Self::Error> {
        cnpj.to_i64()
    }
}

impl TryFrom<&str> for Cnpj {
    type Error = DocumentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl std::str::FromStr for Cnpj {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&SCHEME.format(&self.digits()))
    }
}
