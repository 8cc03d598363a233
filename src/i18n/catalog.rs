use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::{interpolate, Translator};
use crate::config::LocaleConfig;

/// Catalogs compiled into the binary, so shipped locales work from any
/// working directory. English is the last resort for every lookup.
const EMBEDDED: &[(&str, &str)] = &[
    ("en", include_str!("../../translations/en.json")),
    ("nl", include_str!("../../translations/nl.json")),
];
const EMBEDDED_LOCALE: &str = "en";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read translation file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Translation file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Translation file {path} must contain a JSON object at the top level")]
    NotAnObject { path: PathBuf },
}

/// Flattened key/value translations for one locale plus its fallback
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: String,
    entries: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Catalog {
    /// Catalog backed only by the embedded English strings
    pub fn embedded() -> Self {
        Self {
            locale: EMBEDDED_LOCALE.to_string(),
            entries: HashMap::new(),
            fallback: embedded_entries(),
        }
    }

    /// Load the configured locale, falling back to the fallback locale and
    /// finally to the embedded English strings.
    ///
    /// Files in the translations directory override the embedded catalog of
    /// the same locale. A missing locale file is not an error; a malformed
    /// one is.
    pub fn load(config: &LocaleConfig) -> Result<Self, CatalogError> {
        let dir = config.translations_dir.as_deref().map(Path::new);

        let mut fallback = embedded_entries();
        if config.fallback != EMBEDDED_LOCALE {
            fallback.extend(embedded_locale(&config.fallback).unwrap_or_default());
        }
        if let Some(dir) = dir {
            if let Some(entries) = read_locale(dir, &config.fallback)? {
                fallback.extend(entries);
            }
        }

        let shipped = embedded_locale(&config.locale);
        let installed = match dir {
            Some(dir) => read_locale(dir, &config.locale)?,
            None => None,
        };
        let entries = match (shipped, installed) {
            (None, None) => {
                if config.locale != config.fallback && config.locale != EMBEDDED_LOCALE {
                    warn!(
                        locale = %config.locale,
                        fallback = %config.fallback,
                        "No translations for locale, using fallback"
                    );
                }
                HashMap::new()
            }
            (shipped, installed) => {
                let mut entries = shipped.unwrap_or_default();
                entries.extend(installed.unwrap_or_default());
                entries
            }
        };

        info!(
            locale = %config.locale,
            keys = entries.len(),
            fallback_keys = fallback.len(),
            "Translations loaded"
        );

        Ok(Self {
            locale: config.locale.clone(),
            entries,
            fallback,
        })
    }

    /// Catalog from an in-memory JSON document, on top of the embedded strings
    pub fn from_json(locale: &str, document: &str) -> Result<Self, CatalogError> {
        let path = PathBuf::from(format!("<{locale}>"));
        Ok(Self {
            locale: locale.to_string(),
            entries: parse_document(&path, document)?,
            fallback: embedded_entries(),
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key) || self.fallback.contains_key(key)
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        match self.entries.get(key).or_else(|| self.fallback.get(key)) {
            Some(template) => interpolate(template, params),
            None => {
                debug!(key, locale = %self.locale, "Missing translation key");
                key.to_string()
            }
        }
    }
}

fn embedded_entries() -> HashMap<String, String> {
    embedded_locale(EMBEDDED_LOCALE).unwrap_or_default()
}

/// Entries of a catalog compiled into the binary, `None` when not shipped
fn embedded_locale(locale: &str) -> Option<HashMap<String, String>> {
    let (_, document) = EMBEDDED.iter().find(|(name, _)| *name == locale)?;
    let mut entries = HashMap::new();
    if let Ok(root @ Value::Object(_)) = serde_json::from_str::<Value>(document) {
        flatten("", &root, &mut entries);
    }
    Some(entries)
}

fn read_locale(dir: &Path, locale: &str) -> Result<Option<HashMap<String, String>>, CatalogError> {
    let path = dir.join(format!("{locale}.json"));
    if !path.exists() {
        debug!(path = %path.display(), "Translation file not found");
        return Ok(None);
    }

    let document = std::fs::read_to_string(&path).map_err(|source| CatalogError::Io {
        path: path.clone(),
        source,
    })?;
    parse_document(&path, &document).map(Some)
}

fn parse_document(path: &Path, document: &str) -> Result<HashMap<String, String>, CatalogError> {
    let value: Value = serde_json::from_str(document).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if !value.is_object() {
        return Err(CatalogError::NotAnObject {
            path: path.to_path_buf(),
        });
    }

    let mut entries = HashMap::new();
    flatten("", &value, &mut entries);
    Ok(entries)
}

/// Nested objects become dotted keys: `{"a": {"b": "x"}}` -> `a.b = x`
fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, out);
            }
        }
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        Value::Null => {}
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn locale_config(dir: &TempDir, locale: &str) -> LocaleConfig {
        LocaleConfig {
            locale: locale.to_string(),
            fallback: "en".to_string(),
            translations_dir: Some(dir.path().to_string_lossy().to_string()),
        }
    }

    #[test]
    fn test_embedded_catalog_resolves_nested_keys() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.t("solveManual.U'"), "Turn the top side counterclockwise");
        assert_eq!(catalog.t("title.start"), "QBR: Start");
    }

    #[test]
    fn test_translate_with_params() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.translate("moves", &[("moves", "20")]), "Moves: 20");
    }

    #[test]
    fn test_missing_key_resolves_to_key() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.t("does.not.exist"), "does.not.exist");
        assert!(!catalog.contains("does.not.exist"));
    }

    #[test]
    fn test_locale_file_overrides_and_falls_back() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("nl.json"),
            r#"{"close": "Sluiten", "solveManual": {"R": "Draai rechts"}}"#,
        )
        .unwrap();

        let catalog = Catalog::load(&locale_config(&dir, "nl")).unwrap();
        assert_eq!(catalog.locale(), "nl");
        assert_eq!(catalog.t("close"), "Sluiten");
        assert_eq!(catalog.t("solveManual.R"), "Draai rechts");
        // Not in the file, resolved through the embedded nl catalog
        assert_eq!(catalog.t("cubeAlreadySolved"), "Je kubus is al opgelost.");
    }

    #[test]
    fn test_partial_unshipped_locale_falls_back_to_english() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("de.json"), r#"{"close": "Schliessen"}"#).unwrap();

        let catalog = Catalog::load(&locale_config(&dir, "de")).unwrap();
        assert_eq!(catalog.t("close"), "Schliessen");
        assert_eq!(catalog.t("solveManual.R2"), "Turn the right side 180 degrees");
    }

    #[test]
    fn test_shipped_locale_without_translations_dir() {
        let config = LocaleConfig {
            locale: "nl".to_string(),
            fallback: "en".to_string(),
            translations_dir: None,
        };

        let catalog = Catalog::load(&config).unwrap();
        assert_eq!(catalog.t("cubeAlreadySolved"), "Je kubus is al opgelost.");
    }

    #[test]
    fn test_missing_locale_file_uses_fallback() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::load(&locale_config(&dir, "fr")).unwrap();
        assert_eq!(catalog.t("close"), "Close");
    }

    #[test]
    fn test_fallback_file_overrides_embedded_strings() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("en.json"), r#"{"close": "Quit"}"#).unwrap();

        let catalog = Catalog::load(&locale_config(&dir, "fr")).unwrap();
        assert_eq!(catalog.t("close"), "Quit");
        assert_eq!(catalog.t("back"), "Back");
    }

    #[test]
    fn test_malformed_locale_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("nl.json"), "{ not json").unwrap();

        let err = Catalog::load(&locale_config(&dir, "nl")).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_top_level_must_be_object() {
        let err = Catalog::from_json("nl", r#"["close"]"#).unwrap_err();
        assert!(matches!(err, CatalogError::NotAnObject { .. }));
    }

    #[test]
    fn test_shipped_dutch_translation_covers_the_alphabet() {
        let catalog = Catalog::from_json("nl", include_str!("../../translations/nl.json")).unwrap();
        for mv in crate::cube::Move::alphabet() {
            assert!(catalog.entries.contains_key(&mv.phrase_key()), "nl lacks {mv}");
        }
    }
}
