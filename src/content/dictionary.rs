//! Per-locale UI string dictionaries.
//!
//! Each locale maps dictionary keys to display strings. Dictionaries are
//! loaded from `<locale>.json` files or fall back to the built-in maps,
//! and missing keys fall back to the default locale.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

/// Error type for dictionary loading.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary for locale {locale}: {source}")]
    Io {
        locale: String,
        source: std::io::Error,
    },

    #[error("failed to parse dictionary for locale {locale}: {source}")]
    Parse {
        locale: String,
        source: serde_json::Error,
    },
}

/// Immutable key-value UI string maps for every supported locale.
#[derive(Debug, Clone)]
pub struct Dictionaries {
    maps: HashMap<String, HashMap<String, String>>,
    default_locale: String,
}

impl Dictionaries {
    /// Built-in dictionaries for the stock en/ar site.
    pub fn builtin(default_locale: &str) -> Self {
        let mut maps = HashMap::new();
        maps.insert("en".to_string(), builtin_map_en());
        maps.insert("ar".to_string(), builtin_map_ar());
        Self {
            maps,
            default_locale: default_locale.to_string(),
        }
    }

    /// Load `<locale>.json` for each supported locale from a directory.
    pub fn load_dir(
        dir: &Path,
        locales: &[String],
        default_locale: &str,
    ) -> Result<Self, DictionaryError> {
        let mut maps = HashMap::new();
        for locale in locales {
            let path = dir.join(format!("{}.json", locale));
            let content = fs::read_to_string(&path).map_err(|source| DictionaryError::Io {
                locale: locale.clone(),
                source,
            })?;
            let map: HashMap<String, String> =
                serde_json::from_str(&content).map_err(|source| DictionaryError::Parse {
                    locale: locale.clone(),
                    source,
                })?;
            maps.insert(locale.clone(), map);
        }
        Ok(Self {
            maps,
            default_locale: default_locale.to_string(),
        })
    }

    /// Look up a UI string, falling back to the default locale.
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        self.maps
            .get(locale)
            .and_then(|m| m.get(key))
            .or_else(|| self.maps.get(&self.default_locale).and_then(|m| m.get(key)))
            .map(String::as_str)
    }
}

fn builtin_map_en() -> HashMap<String, String> {
    [
        ("site.title", "Horizon Digital"),
        ("nav.home", "Home"),
        ("nav.services", "Services"),
        ("nav.about", "About Us"),
        ("nav.contact", "Contact"),
        ("page.not_found", "Page not found"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn builtin_map_ar() -> HashMap<String, String> {
    [
        ("site.title", "هورايزن ديجيتال"),
        ("nav.home", "الرئيسية"),
        ("nav.services", "خدماتنا"),
        ("nav.about", "من نحن"),
        ("nav.contact", "اتصل بنا"),
        ("page.not_found", "الصفحة غير موجودة"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
