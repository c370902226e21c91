//! Light/dark theme signal shared through context.
//!
//! The signal starts as [`ThemeMode::Light`] on both the server and the client so
//! hydration sees identical markup. Once mounted in the browser it follows the
//! `prefers-color-scheme` media query, including later changes.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast as _, JsValue, closure::Closure};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

#[derive(Debug, Clone, Copy)]
struct ThemeContext(RwSignal<ThemeMode>);

/// Installs the theme signal for every component below the caller.
pub fn provide_theme() -> RwSignal<ThemeMode> {
    let theme = RwSignal::new(ThemeMode::default());
    provide_context(ThemeContext(theme));

    // Effects only run in the browser.
    Effect::new(move |_| {
        if let Err(err) = follow_system_preference(theme) {
            leptos::logging::debug_warn!("could not read the color scheme preference: {err:?}");
        }
    });

    theme
}

/// Reads the current theme, or [`ThemeMode::Light`] when no provider exists.
#[must_use]
pub fn use_theme() -> Signal<ThemeMode> {
    use_context::<ThemeContext>()
        .map_or_else(|| Signal::stored(ThemeMode::default()), |ctx| ctx.0.into())
}

fn follow_system_preference(theme: RwSignal<ThemeMode>) -> Result<(), JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let Some(query) = window.match_media(DARK_SCHEME_QUERY)? else {
        return Ok(());
    };

    theme.set(ThemeMode::from_prefers_dark(query.matches()));

    let on_change = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
        move |event: web_sys::MediaQueryListEvent| {
            theme.set(ThemeMode::from_prefers_dark(event.matches()));
        },
    );
    query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    // The provider sits at the application root and lives as long as the page.
    on_change.forget();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_preference() {
        assert_eq!(ThemeMode::from_prefers_dark(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_prefers_dark(false), ThemeMode::Light);
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }

    #[test]
    fn test_theme_defaults_to_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_use_theme_without_provider() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(use_theme().get_untracked(), ThemeMode::Light);
        });
    }

    #[test]
    fn test_use_theme_reads_provided_signal() {
        let owner = Owner::new();
        owner.with(|| {
            let theme = RwSignal::new(ThemeMode::Light);
            provide_context(ThemeContext(theme));
            theme.set(ThemeMode::Dark);
            assert_eq!(use_theme().get_untracked(), ThemeMode::Dark);
        });
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        let json = serde_json::to_string(&ThemeMode::Dark).expect("serialize theme");
        assert_eq!(json, "\"dark\"");
    }
}
