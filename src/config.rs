use crate::order::chunker::DEFAULT_CHUNK_SIZE;
use crate::order::render::OutputFormat;
use config::{Config, ConfigError, Environment, File};
use dotenvy::dotenv;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_SEPARATOR: &str = ", ";
pub const DEFAULT_MAX_PAGES: u32 = 100_000;
pub const DEFAULT_PROMPT: &str = "N";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    pub chunk_size: usize,
    pub separator: String,
    pub format: OutputFormat,
    pub max_pages: u32,
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            separator: DEFAULT_SEPARATOR.to_string(),
            format: OutputFormat::Text,
            max_pages: DEFAULT_MAX_PAGES,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

/// `<config dir>/duplex-order/config.*`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("duplex-order").join("config"))
}

impl Settings {
    pub fn new(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        dotenv().ok();

        let mut builder = Config::builder()
            .set_default("chunk_size", DEFAULT_CHUNK_SIZE as u64)?
            .set_default("separator", DEFAULT_SEPARATOR)?
            .set_default("format", "text")?
            .set_default("max_pages", u64::from(DEFAULT_MAX_PAGES))?
            .set_default("prompt", DEFAULT_PROMPT)?
            .add_source(File::with_name("duplex_order").required(false));

        if let Some(path) = user_config_path() {
            debug!(path = %path.display(), "user config source");
            builder = builder.add_source(File::from(path).required(false));
        }
        if let Some(path) = explicit {
            debug!(path = %path.display(), "explicit config source");
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            .add_source(Environment::with_prefix("DUPLEX").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "chunk_size = 8\nseparator = \";\"\nformat = \"json\"").unwrap();

        let settings = Settings::new(Some(file.path())).unwrap();
        assert_eq!(settings.chunk_size, 8);
        assert_eq!(settings.separator, ";");
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.max_pages, DEFAULT_MAX_PAGES);
        assert_eq!(settings.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Settings::new(Some(&missing)).is_err());
    }

    #[test]
    fn test_bad_format_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "format = \"pdf\"").unwrap();
        assert!(Settings::new(Some(file.path())).is_err());
    }
}
