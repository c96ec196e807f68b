use crate::commands::PluginMeta;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use toml_edit::{value, Array, DocumentMut};

trait ConfigSerializeDefault {
    fn fix_config(self, name: &str, doc: &mut DocumentMut);
}

macro_rules! impl_simple_default {
    ( $( $type:ty ),* ) => {
        $(
            impl ConfigSerializeDefault for $type {
                fn fix_config(self, name: &str, doc: &mut DocumentMut) {
                    doc.entry(name).or_insert_with(|| value(self));
                }
            }
        )*
    }
}

impl_simple_default!(String, i64, bool);

impl ConfigSerializeDefault for Vec<String> {
    fn fix_config(self, name: &str, doc: &mut DocumentMut) {
        doc.entry(name)
            .or_insert_with(|| value(self.into_iter().collect::<Array>()));
    }
}

macro_rules! gen_config {
    (
        $( $(#[$doc:meta])* $name:ident: $type:ty = $default:expr),* $(,)?
    ) => {
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct Settings {
            $(
                $(#[$doc])*
                pub $name: $type,
            )*
        }

        impl Default for Settings {
            fn default() -> Self {
                Settings {
                    $(
                        $name: $default,
                    )*
                }
            }
        }

        impl Settings {
            /// Reads the config file, writing back any missing keys with their defaults.
            pub fn load(config_file: impl AsRef<Path>) -> anyhow::Result<Settings> {
                let config_file = config_file.as_ref();
                let str = fs::read_to_string(config_file).unwrap_or_default();
                let mut doc = str
                    .parse::<DocumentMut>()
                    .with_context(|| format!("Failed to parse {}", config_file.display()))?;

                $(
                    <$type as ConfigSerializeDefault>::fix_config($default, stringify!($name), &mut doc);
                )*

                let patched = doc.to_string();
                if str != patched {
                    let mut file = fs::OpenOptions::new()
                        .create(true)
                        .write(true)
                        .truncate(true)
                        .open(config_file)
                        .with_context(|| format!("Failed to open {}", config_file.display()))?;
                    write!(file, "{}", patched)?;
                }

                Ok(toml::from_str(&patched)?)
            }
        }
    };
}

gen_config! {
    /// Locale used when a sender reports none or an unknown one.
    locale: String = "en_US".to_string(),
    locales_dir: String = "messages".to_string(),
    /// Locale files are named `<prefix>_<locale>.toml`.
    locales_prefix: String = "messages".to_string(),
    prefix: String = "<gold>[EldoUtils]</gold> ".to_string(),
    message_color: String = "green".to_string(),
    error_color: String = "red".to_string(),
    quoted_arguments: bool = false,
    plugin_name: String = "EldoUtils".to_string(),
    plugin_version: String = env!("CARGO_PKG_VERSION").to_string(),
    authors: Vec<String> = vec!["EldoriaRPG Team".to_string()],
    website: String = "https://www.spigotmc.org/".to_string(),
    discord: String = "rfRuUge".to_string(),
}

impl Settings {
    pub fn plugin_meta(&self) -> PluginMeta {
        PluginMeta {
            name: self.plugin_name.clone(),
            version: self.plugin_version.clone(),
            authors: self.authors.clone(),
            website: self.website.clone(),
            discord: self.discord.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_are_written_back() {
        let dir = std::env::temp_dir().join(format!("eldoutils-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("Config.toml");
        fs::write(&path, "locale = \"de_DE\"\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.locale, "de_DE");
        assert_eq!(settings.error_color, "red");
        assert_eq!(settings.authors, ["EldoriaRPG Team"]);

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("locale = \"de_DE\""));
        assert!(written.contains("quoted_arguments = false"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn invalid_files_are_reported() {
        let dir = std::env::temp_dir().join(format!("eldoutils-broken-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("Config.toml");
        fs::write(&path, "locale = ").unwrap();
        assert!(Settings::load(&path).is_err());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn plugin_meta_uses_settings() {
        let settings = Settings::default();
        let meta = settings.plugin_meta();
        assert_eq!(meta.name, "EldoUtils");
        assert_eq!(meta.discord, "rfRuUge");
    }
}
