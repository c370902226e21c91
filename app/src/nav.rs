//! Navigation entries shown on the right of the header.

use crate::{config::HeaderConfig, locale::Locale};

pub const ABOUT_PATH: &str = "/about";
pub const FEED_PATH: &str = "/feed";
pub const SEARCH_PATH: &str = "/search";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub id: u8,
    pub label: &'static str,
    pub destination: String,
    pub visible: bool,
    /// External links open in a new browsing context.
    pub external: bool,
}

impl NavLink {
    #[must_use]
    pub const fn target(&self) -> Option<&'static str> {
        if self.external { Some("_blank") } else { None }
    }
}

/// Builds every entry in display order, hidden ones included.
#[must_use]
pub fn nav_links(config: &HeaderConfig, locale: &Locale) -> Vec<NavLink> {
    let labels = locale.nav;
    vec![
        NavLink {
            id: 0,
            label: labels.index,
            destination: config.index_path().to_owned(),
            visible: true,
            external: false,
        },
        NavLink {
            id: 1,
            label: labels.about,
            destination: ABOUT_PATH.to_owned(),
            visible: config.show_about,
            external: false,
        },
        NavLink {
            id: 2,
            label: labels.rss,
            destination: FEED_PATH.to_owned(),
            visible: true,
            external: true,
        },
        NavLink {
            id: 3,
            label: labels.search,
            destination: SEARCH_PATH.to_owned(),
            visible: true,
            external: false,
        },
    ]
}

/// Entries that should be rendered.
#[must_use]
pub fn visible_nav_links(config: &HeaderConfig, locale: &Locale) -> Vec<NavLink> {
    nav_links(config, locale)
        .into_iter()
        .filter(|link| link.visible)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_links_in_order() {
        let links = visible_nav_links(&HeaderConfig::default(), &Locale::default());
        let labels: Vec<_> = links.iter().map(|link| link.label).collect();
        assert_eq!(labels, ["Blog", "About", "RSS", "Search"]);
    }

    #[test]
    fn test_hidden_about() {
        let config = HeaderConfig {
            show_about: false,
            ..HeaderConfig::default()
        };
        let links = visible_nav_links(&config, &Locale::default());
        let ids: Vec<_> = links.iter().map(|link| link.id).collect();
        assert_eq!(ids, [0, 2, 3]);
        assert!(links.iter().all(|link| link.destination != ABOUT_PATH));
    }

    #[test]
    fn test_rss_is_always_external() {
        for show_about in [true, false] {
            let config = HeaderConfig {
                show_about,
                ..HeaderConfig::default()
            };
            let links = nav_links(&config, &Locale::default());
            let rss = links.iter().find(|link| link.destination == FEED_PATH).unwrap();
            assert!(rss.external);
            assert_eq!(rss.target(), Some("_blank"));
            assert!(links.iter().filter(|link| link.id != 2).all(|link| link.target().is_none()));
        }
    }

    #[test]
    fn test_index_uses_configured_path() {
        let config = HeaderConfig {
            path: Some("/notes".to_owned()),
            ..HeaderConfig::default()
        };
        let links = nav_links(&config, &Locale::for_lang("ja"));
        assert_eq!(links[0].destination, "/notes");
        assert_eq!(links[0].label, "ブログ");
    }
}
