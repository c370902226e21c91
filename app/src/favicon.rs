//! Picks the header logo for the active theme.
//!
//! A failed load pins the logo to [`DEFAULT_FAVICON`] for the rest of the
//! mount. Theme changes re-resolve the path but never clear that pin.

use crate::theme::ThemeMode;

/// Theme-independent icon, also used for the light theme.
pub const DEFAULT_FAVICON: &str = "/favicon.png";
pub const DARK_FAVICON: &str = "/favicon.dark.png";

/// Returns the icon path for `theme`, or the default icon once a load failed.
#[must_use]
pub const fn resolve_favicon(theme: ThemeMode, fallback_active: bool) -> &'static str {
    if !fallback_active && theme.is_dark() {
        DARK_FAVICON
    } else {
        DEFAULT_FAVICON
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaviconState {
    fallback_active: bool,
}

impl FaviconState {
    #[must_use]
    pub const fn path(self, theme: ThemeMode) -> &'static str {
        resolve_favicon(theme, self.fallback_active)
    }

    /// Records a load failure. Returns `true` only for the first failure.
    pub fn mark_failed(&mut self) -> bool {
        !core::mem::replace(&mut self.fallback_active, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_specific_paths() {
        assert_eq!(resolve_favicon(ThemeMode::Light, false), "/favicon.png");
        assert_eq!(resolve_favicon(ThemeMode::Dark, false), "/favicon.dark.png");
    }

    #[test]
    fn test_fallback_ignores_theme() {
        assert_eq!(resolve_favicon(ThemeMode::Light, true), DEFAULT_FAVICON);
        assert_eq!(resolve_favicon(ThemeMode::Dark, true), DEFAULT_FAVICON);
    }

    #[test]
    fn test_state_follows_theme_until_failure() {
        let mut state = FaviconState::default();
        assert_eq!(state.path(ThemeMode::Dark), DARK_FAVICON);

        assert!(state.mark_failed());

        for theme in [ThemeMode::Dark, ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(state.path(theme), DEFAULT_FAVICON);
        }
    }

    #[test]
    fn test_repeated_failures_are_idempotent() {
        let mut state = FaviconState::default();
        assert!(state.mark_failed());
        assert!(!state.mark_failed());
        assert_eq!(state, FaviconState { fallback_active: true });
    }
}
