mod defaults;

use crate::commands::CommandSender;
use crate::config::Settings;
use anyhow::Context;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

static LOCALE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_\-.]+?\.[a-zA-Z0-9_\-.]+$").unwrap());
static I18N_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<i18n:([a-zA-Z0-9_\-.]+)>").unwrap());
static LOCALE_FILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+)_([a-zA-Z]{2}(?:_[a-zA-Z]{2})?)\.toml$").unwrap());

/// Message tables per locale with built-in fallbacks for the library's own keys.
#[derive(Debug, Clone)]
pub struct Localizer {
    default_locale: String,
    languages: FxHashMap<String, FxHashMap<String, String>>,
    runtime_codes: FxHashMap<String, String>,
}

impl Default for Localizer {
    fn default() -> Self {
        Localizer::new("en_US")
    }
}

fn flatten(prefix: &str, table: &toml::Table, out: &mut FxHashMap<String, String>) {
    for (key, value) in table {
        let key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            toml::Value::Table(table) => flatten(&key, table, out),
            toml::Value::String(text) => {
                out.insert(key, text.clone());
            }
            other => {
                out.insert(key, other.to_string());
            }
        }
    }
}

impl Localizer {
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            default_locale: default_locale.into(),
            languages: FxHashMap::default(),
            runtime_codes: defaults::RUNTIME_CODES
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }

    /// Creates a localizer from the configured locale directory.
    ///
    /// A missing directory is not an error; the built-in messages are used.
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let mut localizer = Localizer::new(settings.locale.clone());
        let dir = Path::new(&settings.locales_dir);
        if dir.is_dir() {
            localizer.load_directory(dir, &settings.locales_prefix)?;
        } else {
            info!(
                "Locale directory {} does not exist, using built-in messages",
                dir.display()
            );
        }
        localizer.set_default_locale(&settings.locale);
        Ok(localizer)
    }

    /// Loads every `<prefix>_<locale>.toml` file of a directory.
    pub fn load_directory(&mut self, dir: &Path, prefix: &str) -> anyhow::Result<usize> {
        let mut loaded = 0;
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read locale directory {}", dir.display()))?;
        for entry in entries {
            let path = entry?.path();
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            let Some(caps) = LOCALE_FILE.captures(file_name) else {
                continue;
            };
            if &caps[1] != prefix {
                continue;
            }
            let locale = caps[2].to_string();
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            self.add_language(&locale, &content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            debug!("Loaded locale {} from {}", locale, path.display());
            loaded += 1;
        }
        info!("Loaded {} locale files from {}", loaded, dir.display());
        Ok(loaded)
    }

    /// Adds or extends a locale from TOML source. Nested tables become dotted keys.
    pub fn add_language(&mut self, locale: &str, content: &str) -> anyhow::Result<()> {
        let table: toml::Table = toml::from_str(content)?;
        let messages = self.languages.entry(locale.to_string()).or_default();
        flatten("", &table, messages);
        Ok(())
    }

    /// Registers fallback messages used when no locale defines the key.
    pub fn add_locale_codes<I, K, V>(&mut self, codes: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.runtime_codes
            .extend(codes.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    /// Switches the default locale. Unknown locales are rejected.
    pub fn set_default_locale(&mut self, locale: &str) -> bool {
        if locale == self.default_locale || self.languages.contains_key(locale) {
            self.default_locale = locale.to_string();
            return true;
        }
        warn!(
            "Locale {} is not available, keeping {}",
            locale, self.default_locale
        );
        false
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Looks up a key in `locale`, then the default locale, then the built-in messages.
    pub fn get(&self, locale: Option<&str>, key: &str) -> Option<&str> {
        locale
            .and_then(|locale| self.languages.get(locale))
            .and_then(|messages| messages.get(key))
            .or_else(|| {
                self.languages
                    .get(&self.default_locale)
                    .and_then(|messages| messages.get(key))
            })
            .or_else(|| self.runtime_codes.get(key))
            .map(String::as_str)
    }

    pub fn localize(&self, key: &str) -> String {
        self.localize_for(None, key)
    }

    /// Resolves a key for the sender's locale. Unknown keys are returned as is.
    pub fn localize_for(&self, sender: Option<&dyn CommandSender>, key: &str) -> String {
        let locale = sender.and_then(|sender| sender.locale());
        match self.get(locale, key) {
            Some(message) => message.to_string(),
            None => {
                if Self::is_locale_code(key) {
                    warn!("Missing localization for key {}", key);
                }
                key.to_string()
            }
        }
    }

    /// Replaces every `<i18n:key>` reference in `text`.
    pub fn localize_message(&self, sender: Option<&dyn CommandSender>, text: &str) -> String {
        I18N_TAG
            .replace_all(text, |caps: &Captures<'_>| self.localize_for(sender, &caps[1]))
            .into_owned()
    }

    pub fn is_locale_code(text: &str) -> bool {
        LOCALE_CODE.is_match(text)
    }

    /// Wraps a key so it is resolved when the surrounding message is sent.
    pub fn escape(key: &str) -> String {
        format!("<i18n:{key}>")
    }
}
