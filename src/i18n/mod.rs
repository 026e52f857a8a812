//! Message catalog lookup
//!
//! Every user-visible string is resolved by a dotted key such as
//! `EditProgramListingGeneralForm.title`. Placeholders in the catalog are
//! written `{name}` and substituted from the params passed to
//! [`Messages::format`].

mod catalog;

pub use catalog::Catalog;

/// Lookup capability injected into every render function
pub trait Messages {
    /// Resolve `key` and substitute `params` into its placeholders
    fn format(&self, key: &str, params: &[(&str, String)]) -> String;

    /// Resolve `key` without params
    fn text(&self, key: &str) -> String {
        self.format(key, &[])
    }
}
