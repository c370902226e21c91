#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use leptos::config::LeptosOptions;

#[cfg(feature = "ssr")]
use crate::config::HeaderConfig;

/// Shared server state, handed to routes and server functions.
#[cfg(feature = "ssr")]
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub config: std::sync::Arc<HeaderConfig>,
    pub leptos_options: LeptosOptions,
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_state_exposes_leptos_options() {
        let state = AppState {
            config: std::sync::Arc::new(HeaderConfig::default()),
            leptos_options: LeptosOptions::builder().output_name("blog").build(),
        };
        let options = LeptosOptions::from_ref(&state);
        assert_eq!(options.output_name.as_ref(), "blog");
        assert_eq!(state.config.title, "blog");
    }
}
