//! JSON-backed message catalog

use super::Messages;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Bundled English messages
const EN_MESSAGES: &str = include_str!("en.json");

/// Flat key → template table
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Build a catalog from a JSON object of key → template
    pub fn from_json(json: &str) -> Result<Self> {
        let messages: HashMap<String, String> =
            serde_json::from_str(json).context("Invalid message catalog")?;
        Ok(Self { messages })
    }

    /// The bundled English catalog
    pub fn english() -> Result<Self> {
        Self::from_json(EN_MESSAGES)
    }

    /// Load the bundled catalog and merge overrides from `path` when given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut catalog = Self::english()?;
        if let Some(path) = path {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read messages from {}", path.display()))?;
            let overrides = Self::from_json(&content)?;
            for key in overrides.messages.keys().filter(|k| !catalog.contains(k)) {
                tracing::warn!("Unknown message key in {}: {key}", path.display());
            }
            tracing::info!(
                "Loaded {} message overrides from {}",
                overrides.messages.len(),
                path.display()
            );
            catalog.merge(overrides);
        }
        Ok(catalog)
    }

    /// Overlay another catalog's keys on top of this one
    pub fn merge(&mut self, other: Catalog) {
        self.messages.extend(other.messages);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }
}

impl Messages for Catalog {
    fn format(&self, key: &str, params: &[(&str, String)]) -> String {
        let Some(template) = self.messages.get(key) else {
            tracing::warn!("Missing message for key {key}");
            return key.to_string();
        };
        substitute(template, params)
    }
}

/// Replace each `{name}` in `template` with its param; unknown names are kept
fn substitute(template: &str, params: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match params.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_catalog_parses() {
        let catalog = Catalog::english().unwrap();
        assert!(catalog.contains("EditProgramListingGeneralForm.title"));
        assert!(catalog.contains("EditProgramListingPricingForm.totalPrice"));
        assert!(catalog.contains("TransactionPanel.cancelButton"));
    }

    #[test]
    fn test_format_substitutes_params() {
        let catalog = Catalog::english().unwrap();
        let msg = catalog.format(
            "EditProgramListingGeneralForm.maxLength",
            &[("maxLength", "60".to_string())],
        );
        assert!(msg.contains("60"));
        assert!(!msg.contains("{maxLength}"));
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let catalog = Catalog::default();
        assert_eq!(catalog.text("Nope.missing"), "Nope.missing");
    }

    #[test]
    fn test_merge_overrides_existing_keys() {
        let mut catalog = Catalog::english().unwrap();
        let overrides =
            Catalog::from_json(r#"{"TransactionPanel.cancelButton": "Annuler"}"#).unwrap();
        catalog.merge(overrides);
        assert_eq!(catalog.text("TransactionPanel.cancelButton"), "Annuler");
        assert!(catalog.contains("TransactionPanel.cancelFailed"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Catalog::from_json("[1, 2]").is_err());
    }

    mod substitute_tests {
        use super::*;

        #[test]
        fn test_multiple_params() {
            let out = substitute(
                "{a} and {b}",
                &[("a", "one".to_string()), ("b", "two".to_string())],
            );
            assert_eq!(out, "one and two");
        }

        #[test]
        fn test_unknown_param_is_kept() {
            assert_eq!(substitute("Hello {who}", &[]), "Hello {who}");
        }

        #[test]
        fn test_unclosed_brace_is_literal() {
            assert_eq!(substitute("price {", &[]), "price {");
        }

        #[test]
        fn test_no_placeholders() {
            assert_eq!(substitute("plain", &[("x", "y".to_string())]), "plain");
        }
    }
}
