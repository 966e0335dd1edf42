//! # Document Domains and Message Keys
//!
//! `DocumentDomain` names the three document families and doubles as the
//! namespace for message resolution. `MessageKey` names the operation whose
//! failure needs a human-readable message. Both are closed enums, so every
//! `match` over them is exhaustive.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The document families handled by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentDomain {
    /// Individual taxpayer registry number (CPF).
    Cpf,
    /// Company taxpayer registry number (CNPJ).
    Cnpj,
    /// Vehicle license plate.
    Plate,
}

impl DocumentDomain {
    /// Returns all domains in canonical order.
    pub fn all_domains() -> &'static [DocumentDomain] {
        &[Self::Cpf, Self::Cnpj, Self::Plate]
    }

    /// Returns the lowercase identifier, also used as the catalog file stem.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
            Self::Plate => "plate",
        }
    }
}

impl std::fmt::Display for DocumentDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpf" => Ok(Self::Cpf),
            "cnpj" => Ok(Self::Cnpj),
            "plate" => Ok(Self::Plate),
            other => Err(format!("unknown document domain: {other:?}")),
        }
    }
}

/// Keys identifying which operation failed, for message lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MessageKey {
    /// Construction from a string, or plate conversion, rejected the input.
    ImplicitStringOperator,
    /// Conversion to a signed 64-bit integer overflowed.
    ExplicitLongOperator,
}

impl MessageKey {
    /// Returns all keys in canonical order.
    pub fn all_keys() -> &'static [MessageKey] {
        &[Self::ImplicitStringOperator, Self::ExplicitLongOperator]
    }

    /// Returns the key name as it appears in catalog files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ImplicitStringOperator => "ImplicitStringOperator",
            Self::ExplicitLongOperator => "ExplicitLongOperator",
        }
    }
}

impl std::fmt::Display for MessageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ImplicitStringOperator" => Ok(Self::ImplicitStringOperator),
            "ExplicitLongOperator" => Ok(Self::ExplicitLongOperator),
            other => Err(format!("unknown message key: {other:?}")),
        }
    }
}
