//! # CPF — Individual Taxpayer Number
//!
//! An 11-digit Receita Federal registry number whose last two digits are
//! modulo-11 check digits over the first nine.
//!
//! ## Construction
//!
//! - [`Cpf::new`] / `From<u64>` / `From<i64>` store the integer as-is (the
//!   magnitude for signed input). No validation: an integer-built `Cpf` may
//!   report `is_valid() == false`.
//! - [`Cpf::parse`] / `FromStr` / `TryFrom<&str>` accept formatted or bare
//!   strings and reject anything failing the check digits. A `Cpf` parsed
//!   from a string is always valid.
//!
//! Repeated-digit numbers such as `111.111.111-11` satisfy the arithmetic
//! and are accepted.

use crate::digits::{extract_digits, CheckDigitScheme};
use crate::domain::{DocumentDomain, MessageKey};
use crate::error::DocumentError;
use crate::messages::{resolve_message, DefaultMessages, MessageResolver};

/// Digit count of a CPF.
pub const CPF_LEN: usize = 11;

const SCHEME: CheckDigitScheme = CheckDigitScheme {
    len: CPF_LEN,
    first_weights: &[10, 9, 8, 7, 6, 5, 4, 3, 2],
    second_weights: &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2],
    separators: &[(3, '.'), (6, '.'), (9, '-')],
};

/// Brazilian individual taxpayer registry number (CPF).
///
/// Displays as `NNN.NNN.NNN-NN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cpf(u64);

impl_document_serde!(Cpf);

impl Cpf {
    /// Wrap an integer without validating it.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parse a formatted or bare CPF string.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidFormat`] if the extracted digits are
    /// not exactly 11 or the check digits do not match.
    pub fn parse(value: &str) -> Result<Self, DocumentError> {
        Self::parse_with(value, &DefaultMessages)
    }

    /// Like [`Cpf::parse`], resolving the error message through `resolver`.
    pub fn parse_with(value: &str, resolver: &dyn MessageResolver) -> Result<Self, DocumentError> {
        let invalid = || {
            tracing::debug!(input = value, "rejected CPF");
            DocumentError::InvalidFormat {
                domain: DocumentDomain::Cpf,
                key: MessageKey::ImplicitStringOperator,
                message: resolve_message(
                    resolver,
                    DocumentDomain::Cpf,
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

    /// Whether `value` holds exactly 11 digits with matching check digits.
    /// Non-digit characters are ignored.
    pub fn is_valid_str(value: &str) -> bool {
        SCHEME.verify(value)
    }

    /// Validity of an unsigned integer CPF.
    pub fn is_valid_u64(value: u64) -> bool {
        Self::from(value).is_valid()
    }

    /// Validity of a signed integer CPF (sign discarded).
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
    /// `i64::MAX`, which only an integer-built `Cpf` can hold.
    pub fn to_i64(self) -> Result<i64, DocumentError> {
        self.to_i64_with(&DefaultMessages)
    }

    /// Like [`Cpf::to_i64`], resolving the error message through `resolver`.
    pub fn to_i64_with(self, resolver: &dyn MessageResolver) -> Result<i64, DocumentError> {
        i64::try_from(self.0).map_err(|_| DocumentError::NumericOverflow {
            domain: DocumentDomain::Cpf,
            key: MessageKey::ExplicitLongOperator,
            message: resolve_message(resolver, DocumentDomain::Cpf, MessageKey::ExplicitLongOperator),
        })
    }
}

impl From<u64> for Cpf {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<i64> for Cpf {
    fn from(value: i64) -> Self {
        Self(value.unsigned_abs())
    }
}

impl From<Cpf> for u64 {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

impl TryFrom<Cpf> for i64 {
    type Error = DocumentError;

    fn try_from(cpf: Cpf) -> Result<Self, Self::Error> {
        cpf.to_i64()
    }
}

impl TryFrom<&str> for Cpf {
    type Error = DocumentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl std::str::FromStr for Cpf {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&SCHEME.format(&self.digits()))
    }
}
