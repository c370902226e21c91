//! Site settings consumed by the header.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} must be a boolean, got {value:?}")]
    InvalidFlag { key: &'static str, value: String },
}

/// Read-only header configuration, fixed for the lifetime of a mount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderConfig {
    pub title: String,
    /// Shown after the title. Absent renders nothing.
    pub description: Option<String>,
    /// Base path of the index page. `None` means `/`.
    pub path: Option<String>,
    /// Absolute site URL used in the feed.
    pub link: String,
    /// BCP 47 tag selecting the navigation labels.
    pub lang: String,
    pub show_about: bool,
    pub auto_collapsed_nav_bar: bool,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            title: "blog".to_owned(),
            description: None,
            path: None,
            link: "http://127.0.0.1:3007".to_owned(),
            lang: "en-US".to_owned(),
            show_about: true,
            auto_collapsed_nav_bar: true,
        }
    }
}

impl HeaderConfig {
    /// Builds the configuration from `BLOG_*` environment variables.
    ///
    /// # Errors
    ///
    /// Fails if a flag variable holds something other than a boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from `lookup`, using defaults for missing keys.
    /// Empty strings count as missing.
    ///
    /// # Errors
    ///
    /// Fails if a flag value holds something other than a boolean.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let show_about = match get("BLOG_SHOW_ABOUT") {
            Some(value) => parse_flag("BLOG_SHOW_ABOUT", &value)?,
            None => defaults.show_about,
        };
        let auto_collapsed_nav_bar = match get("BLOG_AUTO_COLLAPSED_NAV_BAR") {
            Some(value) => parse_flag("BLOG_AUTO_COLLAPSED_NAV_BAR", &value)?,
            None => defaults.auto_collapsed_nav_bar,
        };

        Ok(Self {
            title: get("BLOG_TITLE").unwrap_or(defaults.title),
            description: get("BLOG_DESCRIPTION"),
            path: get("BLOG_PATH").or(defaults.path),
            link: get("BLOG_LINK").unwrap_or(defaults.link),
            lang: get("BLOG_LANG").unwrap_or(defaults.lang),
            show_about,
            auto_collapsed_nav_bar,
        })
    }

    /// Destination of the index link.
    #[must_use]
    pub fn index_path(&self) -> &str {
        self.path
            .as_deref()
            .filter(|path| !path.is_empty())
            .unwrap_or("/")
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = HeaderConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, HeaderConfig::default());
        assert_eq!(config.description, None);
        assert_eq!(config.index_path(), "/");
    }

    #[test]
    fn test_values_override_defaults() {
        let config = HeaderConfig::from_lookup(lookup(&[
            ("BLOG_TITLE", "Notes"),
            ("BLOG_DESCRIPTION", "Things I learned"),
            ("BLOG_PATH", "/blog"),
            ("BLOG_LANG", "fr-FR"),
            ("BLOG_SHOW_ABOUT", "false"),
            ("BLOG_AUTO_COLLAPSED_NAV_BAR", "0"),
        ]))
        .unwrap();

        assert_eq!(config.title, "Notes");
        assert_eq!(config.description.as_deref(), Some("Things I learned"));
        assert_eq!(config.index_path(), "/blog");
        assert_eq!(config.lang, "fr-FR");
        assert!(!config.show_about);
        assert!(!config.auto_collapsed_nav_bar);
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let config =
            HeaderConfig::from_lookup(lookup(&[
                ("BLOG_PATH", ""),
                ("BLOG_TITLE", "  "),
                ("BLOG_DESCRIPTION", ""),
            ]))
            .unwrap();
        assert_eq!(config.path, None);
        assert_eq!(config.description, None);
        assert_eq!(config.title, "blog");
    }

    #[test]
    fn test_flags_accept_common_spellings() {
        for (raw, expected) in [("TRUE", true), ("yes", true), (" on ", true), ("Off", false), ("no", false)] {
            let config = HeaderConfig::from_lookup(lookup(&[("BLOG_SHOW_ABOUT", raw)])).unwrap();
            assert_eq!(config.show_about, expected, "value {raw:?}");
        }
    }

    #[test]
    fn test_invalid_flag_is_rejected() {
        let result = HeaderConfig::from_lookup(lookup(&[("BLOG_AUTO_COLLAPSED_NAV_BAR", "sometimes")]));
        assert_matches!(
            result,
            Err(ConfigError::InvalidFlag { key: "BLOG_AUTO_COLLAPSED_NAV_BAR", ref value }) if value == "sometimes"
        );
    }

    #[test]
    fn test_config_json_shape() {
        let json = serde_json::to_value(HeaderConfig::default()).expect("serialize config");
        assert_eq!(json["title"], "blog");
        assert_eq!(json["show_about"], true);
        assert!(json["path"].is_null());
        assert!(json["description"].is_null());
    }
}
