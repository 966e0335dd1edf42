//! # brdoc-core — Brazilian Document Value Types
//!
//! Strongly-typed, immutable values for three Brazilian identifiers:
//!
//! - [`Cpf`] — 11-digit individual taxpayer number, modulo-11 check digits.
//! - [`Cnpj`] — 14-digit company taxpayer number, modulo-11 check digits.
//! - [`Plate`] — 7-character vehicle plate, legacy (`ABC-1234`) or Mercosul
//!   (`ABC1D23`), with legacy → Mercosul conversion.
//!
//! ## Key Design Principles
//!
//! 1. **Construction is the validation gate.** Parsing a string either
//!    yields a valid value or a [`DocumentError`]. Integer constructors of
//!    `Cpf`/`Cnpj` store the value unchecked; `is_valid()` reports on it.
//!
//! 2. **Shared modulo-11 machinery.** CPF and CNPJ differ only in their
//!    [`digits::CheckDigitScheme`].
//!
//! 3. **Injectable messages.** Errors carry a `(domain, key)` pair and the
//!    text resolved through a [`MessageResolver`]. [`DefaultMessages`] is the
//!    built-in table; [`MessageCatalog`] loads per-domain JSON resources.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No global state; every value is `Send + Sync`.

/// Serialize a document as its display string and deserialize it through
/// `parse()`, so invalid values are rejected at deserialization time.
macro_rules! impl_document_serde {
    ($ty:ident) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod cnpj;
pub mod cpf;
pub mod digits;
pub mod domain;
pub mod error;
pub mod messages;
pub mod plate;

// Re-export primary types for ergonomic imports.
pub use cnpj::{Cnpj, CNPJ_LEN};
pub use cpf::{Cpf, CPF_LEN};
pub use domain::{DocumentDomain, MessageKey};
pub use error::{CatalogError, DocumentError};
pub use messages::{resolve_message, DefaultMessages, MessageCatalog, MessageResolver};
pub use plate::{Plate, PLATE_LEN};
