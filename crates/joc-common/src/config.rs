//! Raw JSON configuration, deserialized leniently and resolved into
//! [`Options`].

use anyhow::Context;
use serde::Deserialize;

use crate::options::{HeaderLayout, Options};

/// Raw translator configuration as read from a `joc.json` file.
///
/// Every field is optional so that partial configuration files parse;
/// [`RawConfig::resolve`] applies the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    #[serde(default)]
    pub use_package_directories: Option<bool>,
}

impl RawConfig {
    /// Resolves the raw configuration into pipeline options.
    pub fn resolve(&self) -> Options {
        let header_layout = match self.use_package_directories {
            Some(false) => HeaderLayout::Flat,
            _ => HeaderLayout::PackageDirectories,
        };
        Options { header_layout }
    }
}

/// Parses the contents of a configuration file.
pub fn parse_config(source: &str) -> anyhow::Result<RawConfig> {
    serde_json::from_str(source).context("failed to parse joc configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_defaults_to_package_directories() {
        let config = parse_config("{}").unwrap();
        let options = config.resolve();
        assert_eq!(options.header_layout, HeaderLayout::PackageDirectories);
    }

    #[test]
    fn package_directories_can_be_disabled() {
        let config = parse_config(r#"{"usePackageDirectories": false}"#).unwrap();
        assert_eq!(config.resolve().header_layout, HeaderLayout::Flat);
    }

    #[test]
    fn explicit_true_keeps_package_directories() {
        let config = parse_config(r#"{"usePackageDirectories": true}"#).unwrap();
        assert_eq!(
            config.resolve().header_layout,
            HeaderLayout::PackageDirectories
        );
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(parse_config("{not json").is_err());
    }
}
