//! # Error Types
//!
//! Defines the error types raised by document construction, numeric
//! conversion and message-catalog loading. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Every document error carries the `(domain, key)` pair that identifies
//!   the failing operation, plus the message resolved for that pair.
//! - Errors surface at the point of construction or conversion. There is no
//!   partial success: a failed parse never yields a usable value.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{DocumentDomain, MessageKey};

/// Error raised by document construction and conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// A string did not pass the document's validity check.
    #[error("invalid {domain} format: {message}")]
    InvalidFormat {
        /// Document family that rejected the input.
        domain: DocumentDomain,
        /// Message key of the failing operation.
        key: MessageKey,
        /// Resolved human-readable message.
        message: String,
    },

    /// The stored value does not fit a signed 64-bit integer.
    #[error("{domain} numeric overflow: {message}")]
    NumericOverflow {
        /// Document family of the value.
        domain: DocumentDomain,
        /// Message key of the failing conversion.
        key: MessageKey,
        /// Resolved human-readable message.
        message: String,
    },

    /// The Mercosul substitution table received a character outside `0-9`.
    #[error("no Mercosul letter for plate character {0:?}")]
    UnreachableSubstitution(char),
}

impl DocumentError {
    /// The document family the error belongs to.
    pub fn domain(&self) -> DocumentDomain {
        match self {
            Self::InvalidFormat { domain, .. } | Self::NumericOverflow { domain, .. } => *domain,
            Self::UnreachableSubstitution(_) => DocumentDomain::Plate,
        }
    }

    /// The message key of the failing operation, if the error has one.
    pub fn key(&self) -> Option<MessageKey> {
        match self {
            Self::InvalidFormat { key, .. } | Self::NumericOverflow { key, .. } => Some(*key),
            Self::UnreachableSubstitution(_) => None,
        }
    }

    /// The resolved message text, if the error carries one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::InvalidFormat { message, .. } | Self::NumericOverflow { message, .. } => {
                Some(message)
            }
            Self::UnreachableSubstitution(_) => None,
        }
    }
}

/// Error while loading a message catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Reading a catalog file failed.
    #[error("failed to read message catalog {path}: {source}")]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A catalog file is not valid JSON.
    #[error(
        "malformed message catalog for {domain}{}: {source}",
        .path.as_ref().map(|p| format!(" ({})", p.display())).unwrap_or_default()
    )]
    Json {
        /// Domain whose catalog failed to parse.
        domain: DocumentDomain,
        /// File the catalog was read from, when it came from disk.
        path: Option<PathBuf>,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A catalog document is valid JSON but not a flat object of strings.
    #[error("message catalog for {domain} must be a JSON object of strings")]
    NotAnObject {
        /// Domain whose catalog has the wrong shape.
        domain: DocumentDomain,
    },
}
