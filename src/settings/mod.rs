//! Converter settings
//!
//! Settings come from built-in defaults, optionally overlaid by a TOML file.
//! Every key is optional:
//!
//! ```toml
//! input = "proxies.txt"
//! output = "OmegaOptions.json"
//! profile_prefix = "proxy-"
//! scheme = "http"
//! color = "#ca0"
//! bypass_list = ["127.0.0.1", "::1", "localhost"]
//! strict = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConvertError;
use crate::models::ProxyScheme;

fn default_input() -> PathBuf {
    PathBuf::from("proxies.txt")
}

fn default_output() -> PathBuf {
    PathBuf::from("OmegaOptions.json")
}

fn default_profile_prefix() -> String {
    "proxy-".to_string()
}

fn default_color() -> String {
    "#ca0".to_string()
}

fn default_bypass_list() -> Vec<String> {
    vec![
        "127.0.0.1".to_string(),
        "::1".to_string(),
        "localhost".to_string(),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Proxy list to read.
    pub input: PathBuf,
    /// Options file to write.
    pub output: PathBuf,
    /// Profile names are this prefix followed by the 1-based position.
    pub profile_prefix: String,
    pub scheme: ProxyScheme,
    /// Colour the extension shows for generated profiles.
    pub color: String,
    /// Hosts that bypass every generated proxy.
    pub bypass_list: Vec<String>,
    /// Abort on the first malformed line instead of skipping it.
    pub strict: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            input: default_input(),
            output: default_output(),
            profile_prefix: default_profile_prefix(),
            scheme: ProxyScheme::default(),
            color: default_color(),
            bypass_list: default_bypass_list(),
            strict: false,
        }
    }
}

impl Settings {
    /// Parse settings from TOML content, filling unspecified keys with defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
        let settings = Self::from_toml_str(&content).map_err(|e| ConvertError::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.profile_prefix, "proxy-");
        assert_eq!(settings.scheme, ProxyScheme::Http);
        assert_eq!(settings.bypass_list.len(), 3);
        assert!(!settings.strict);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let toml_content = r##"
input = "list.txt"
scheme = "socks5"
color = "#f00"
bypass_list = ["localhost", "*.lan"]
strict = true
"##;
        let settings = Settings::from_toml_str(toml_content).unwrap();
        assert_eq!(settings.input, PathBuf::from("list.txt"));
        assert_eq!(settings.output, PathBuf::from("OmegaOptions.json"));
        assert_eq!(settings.scheme, ProxyScheme::Socks5);
        assert_eq!(settings.color, "#f00");
        assert_eq!(settings.bypass_list, vec!["localhost", "*.lan"]);
        assert!(settings.strict);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(Settings::from_toml_str("scheme = \"ftp\"").is_err());
        assert!(Settings::from_toml_str("strict = ").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::load(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConvertError::Io { .. })));
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "profile_prefix = 5").unwrap();
        let result = Settings::load(&path);
        assert!(matches!(result, Err(ConvertError::Config { .. })));
    }
}
