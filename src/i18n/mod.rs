//! Localization collaborator
//!
//! Every user facing string in the workflow and on the screens is looked up
//! by key through a [`Translator`]. The shipped implementation is
//! [`Catalog`], which reads JSON translation files with a fallback locale.

pub mod catalog;

pub use catalog::{Catalog, CatalogError};

/// Resolves translation keys for the configured locale
pub trait Translator: Send + Sync {
    /// Translate `key`, substituting `%{name}` placeholders from `params`.
    ///
    /// Unknown keys resolve to the key itself so a missing string is visible
    /// rather than silently blank.
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String;

    /// Translate a key without parameters
    fn t(&self, key: &str) -> String {
        self.translate(key, &[])
    }
}

/// Replace `%{name}` placeholders in `template`
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    params.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("%{{{name}}}"), value)
    })
}
