//! # Message Resolution
//!
//! Error messages are looked up by `(domain, key)` through the
//! [`MessageResolver`] trait. The core never depends on where the text comes
//! from: [`DefaultMessages`] is a built-in table, and [`MessageCatalog`] holds
//! text loaded from per-domain JSON resources (`cpf.json`, `cnpj.json`,
//! `plate.json`), falling back to the defaults for missing entries.
//!
//! ## Catalog Format
//!
//! Each file is a flat JSON object mapping key names to text:
//!
//! ```json
//! { "ImplicitStringOperator": "CPF inválido" }
//! ```

use std::collections::HashMap;
use std::path::Path;

use crate::domain::{DocumentDomain, MessageKey};
use crate::error::CatalogError;

/// Supplies human-readable text for a `(domain, key)` error condition.
pub trait MessageResolver: Send + Sync {
    /// Returns the message for the pair, or `None` if this resolver has none.
    fn resolve(&self, domain: DocumentDomain, key: MessageKey) -> Option<String>;
}

/// Resolve through `resolver`, falling back to [`DefaultMessages`].
pub fn resolve_message(
    resolver: &dyn MessageResolver,
    domain: DocumentDomain,
    key: MessageKey,
) -> String {
    resolver
        .resolve(domain, key)
        .unwrap_or_else(|| DefaultMessages::text(domain, key).to_string())
}

/// Built-in message table covering every pair raised by the core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultMessages;

impl DefaultMessages {
    /// The built-in text for a pair.
    pub fn text(domain: DocumentDomain, key: MessageKey) -> &'static str {
        match (domain, key) {
            (DocumentDomain::Cpf, MessageKey::ImplicitStringOperator) => {
                "the value is not a valid CPF"
            }
            (DocumentDomain::Cpf, MessageKey::ExplicitLongOperator) => {
                "the CPF value exceeds the maximum signed 64-bit integer"
            }
            (DocumentDomain::Cnpj, MessageKey::ImplicitStringOperator) => {
                "the value is not a valid CNPJ"
            }
            (DocumentDomain::Cnpj, MessageKey::ExplicitLongOperator) => {
                "the CNPJ value exceeds the maximum signed 64-bit integer"
            }
            (DocumentDomain::Plate, MessageKey::ImplicitStringOperator) => {
                "the value is not a valid plate (expected ABC-1234 or ABC1D23)"
            }
            (DocumentDomain::Plate, MessageKey::ExplicitLongOperator) => {
                "plates have no numeric representation"
            }
        }
    }
}

impl MessageResolver for DefaultMessages {
    fn resolve(&self, domain: DocumentDomain, key: MessageKey) -> Option<String> {
        Some(Self::text(domain, key).to_string())
    }
}

/// Message table loaded from JSON resources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    entries: HashMap<(DocumentDomain, MessageKey), String>,
}

impl MessageCatalog {
    /// Create an empty catalog. Every lookup falls back to the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one domain's catalog from a flat JSON object.
    ///
    /// Unknown keys are skipped with a warning so that newer resource files
    /// keep loading.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] for malformed JSON and
    /// [`CatalogError::NotAnObject`] when the document is not an object of
    /// strings.
    pub fn from_json_str(domain: DocumentDomain, json: &str) -> Result<Self, CatalogError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|source| CatalogError::Json {
                domain,
                path: None,
                source,
            })?;
        let object = value
            .as_object()
            .ok_or(CatalogError::NotAnObject { domain })?;

        let mut catalog = Self::new();
        for (name, text) in object {
            let text = text.as_str().ok_or(CatalogError::NotAnObject { domain })?;
            match name.parse::<MessageKey>() {
                Ok(key) => catalog.insert(domain, key, text),
                Err(_) => {
                    tracing::warn!(%domain, key = %name, "skipping unknown message key");
                }
            }
        }
        Ok(catalog)
    }

    /// Load `cpf.json`, `cnpj.json` and `plate.json` from `dir`.
    ///
    /// Missing files are skipped; their domains resolve to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] when a present file cannot be read, or
    /// any error from [`MessageCatalog::from_json_str`]. JSON errors carry
    /// the offending file's path.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let mut catalog = Self::new();
        for domain in DocumentDomain::all_domains() {
            let path = dir.join(format!("{}.json", domain.as_str()));
            if !path.is_file() {
                tracing::debug!(path = %path.display(), "no message catalog for domain");
                continue;
            }
            let json = std::fs::read_to_string(&path)
                .map_err(|source| CatalogError::Io { path: path.clone(), source })?;
            let loaded = Self::from_json_str(*domain, &json).map_err(|err| match err {
                CatalogError::Json { domain, source, .. } => CatalogError::Json {
                    domain,
                    path: Some(path.clone()),
                    source,
                },
                other => other,
            })?;
            catalog.merge(loaded);
            tracing::debug!(path = %path.display(), "loaded message catalog");
        }
        Ok(catalog)
    }

    /// Set the text for a pair, replacing any previous entry.
    pub fn insert(&mut self, domain: DocumentDomain, key: MessageKey, text: impl Into<String>) {
        self.entries.insert((domain, key), text.into());
    }

    /// Merge `other` into this catalog. Entries from `other` win.
    pub fn merge(&mut self, other: MessageCatalog) {
        self.entries.extend(other.entries);
    }

    /// Look up a pair without falling back to the defaults.
    pub fn get(&self, domain: DocumentDomain, key: MessageKey) -> Option<&str> {
        self.entries.get(&(domain, key)).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MessageResolver for MessageCatalog {
    fn resolve(&self, domain: DocumentDomain, key: MessageKey) -> Option<String> {
        Some(
            self.get(domain, key)
                .unwrap_or_else(|| DefaultMessages::text(domain, key))
                .to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl MessageResolver for Silent {
        fn resolve(&self, _: DocumentDomain, _: MessageKey) -> Option<String> {
            None
        }
    }

    #[test]
    fn defaults_cover_every_pair() {
        for domain in DocumentDomain::all_domains() {
            for key in MessageKey::all_keys() {
                assert!(!DefaultMessages::text(*domain, *key).is_empty());
            }
        }
    }

    #[test]
    fn resolve_message_falls_back_when_resolver_is_silent() {
        let text = resolve_message(&Silent, DocumentDomain::Cnpj, MessageKey::ImplicitStringOperator);
        assert_eq!(text, "the value is not a valid CNPJ");
    }

    #[test]
    fn catalog_from_json() {
        let catalog = MessageCatalog::from_json_str(
            DocumentDomain::Cpf,
            r#"{"ImplicitStringOperator": "CPF inválido"}"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.get(DocumentDomain::Cpf, MessageKey::ImplicitStringOperator),
            Some("CPF inválido")
        );
        assert_eq!(catalog.get(DocumentDomain::Cpf, MessageKey::ExplicitLongOperator), None);
    }

    #[test]
    fn catalog_falls_back_to_defaults() {
        let catalog = MessageCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(
            catalog.resolve(DocumentDomain::Plate, MessageKey::ImplicitStringOperator),
            Some(DefaultMessages::text(DocumentDomain::Plate, MessageKey::ImplicitStringOperator).to_string())
        );
    }

    #[test]
    fn catalog_skips_unknown_keys() {
        let catalog = MessageCatalog::from_json_str(
            DocumentDomain::Plate,
            r#"{"SomethingElse": "x", "ImplicitStringOperator": "Placa inválida"}"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn catalog_rejects_malformed_json() {
        let err = MessageCatalog::from_json_str(DocumentDomain::Cpf, "{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json { domain: DocumentDomain::Cpf, .. }));
    }

    #[test]
    fn catalog_rejects_non_object() {
        let err = MessageCatalog::from_json_str(DocumentDomain::Cpf, r#"["a"]"#).unwrap_err();
        assert!(matches!(err, CatalogError::NotAnObject { .. }));

        let err = MessageCatalog::from_json_str(
            DocumentDomain::Cpf,
            r#"{"ImplicitStringOperator": 42}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::NotAnObject { .. }));
    }

    #[test]
    fn merge_prefers_incoming_entries() {
        let mut base = MessageCatalog::new();
        base.insert(DocumentDomain::Cpf, MessageKey::ImplicitStringOperator, "old");
        let mut other = MessageCatalog::new();
        other.insert(DocumentDomain::Cpf, MessageKey::ImplicitStringOperator, "new");
        base.merge(other);
        assert_eq!(
            base.get(DocumentDomain::Cpf, MessageKey::ImplicitStringOperator),
            Some("new")
        );
    }

    #[test]
    fn load_dir_reads_present_files_and_skips_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("cnpj.json"),
            r#"{"ImplicitStringOperator": "CNPJ inválido", "ExplicitLongOperator": "estouro"}"#,
        )
        .unwrap();

        let catalog = MessageCatalog::load_dir(dir.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get(DocumentDomain::Cnpj, MessageKey::ExplicitLongOperator),
            Some("estouro")
        );
        assert_eq!(catalog.get(DocumentDomain::Cpf, MessageKey::ImplicitStringOperator), None);
    }

    #[test]
    fn load_dir_reports_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("plate.json"), "nope").unwrap();
        let err = MessageCatalog::load_dir(dir.path()).unwrap_err();
        match err {
            CatalogError::Json {
                domain: DocumentDomain::Plate,
                path: Some(path),
                ..
            } => assert_eq!(path, dir.path().join("plate.json")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
