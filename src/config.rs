use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, DEFAULT_TITLE};
use crate::prelude::*;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings read from an optional TOML file. Every key may be omitted.
///
/// ```toml
/// endpoint = "http://127.0.0.1:5000/products"
/// title = "Our menu"
/// stylesheet = "/menu/static/menu.css"
/// timeout_secs = 5
/// hide_unavailable = true
/// output = "menu.html"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub endpoint: String,
    pub title: String,
    pub stylesheet: Option<String>,
    pub timeout_secs: u64,
    pub hide_unavailable: bool,
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            title: DEFAULT_TITLE.to_string(),
            stylesheet: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            hide_unavailable: false,
            output: None,
        }
    }
}

impl Config {

    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be at least 1");
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration {path}", path = path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid configuration in {path}", path = path.display()))
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::constants::DEFAULT_ENDPOINT;

    use std::io::Write;
    use std::path::Path;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = Config::parse("title = \"Lunch\"").unwrap();
        assert_eq!(config.title, "Lunch");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(!config.hide_unavailable);
    }

    #[test]
    fn reads_every_key() {
        let config = Config::parse(
            r#"
            endpoint = "http://menu.local/products"
            title = "Dinner"
            stylesheet = "/static/menu.css"
            timeout_secs = 3
            hide_unavailable = true
            output = "out.html"
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoint, "http://menu.local/products");
        assert_eq!(config.stylesheet.as_deref(), Some("/static/menu.css"));
        assert_eq!(config.timeout().as_secs(), 3);
        assert!(config.hide_unavailable);
        assert_eq!(config.output.as_deref(), Some(Path::new("out.html")));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let error = Config::parse("timeout_secs = 0").unwrap_err();
        assert!(error.to_string().contains("timeout_secs"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::parse("endpoint_url = \"x\"").is_err());
    }

    #[test]
    fn loads_from_file_or_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = 7").unwrap();

        assert_eq!(Config::load_or_default(Some(file.path())).unwrap().timeout_secs, 7);
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
        assert!(Config::load(Path::new("/nonexistent/menu.toml")).is_err());
    }
}
