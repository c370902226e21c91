//! Server functions used by the header.
//!
//! The configuration lives on the server (it is read from the environment at
//! startup) and reaches the browser through [`site_config`], so hydration
//! renders exactly what the server rendered.

use leptos::prelude::{ServerFnError, server};

use crate::config::HeaderConfig;

/// Returns the header configuration held in the server state.
#[server(endpoint = "/site_config")]
pub async fn site_config() -> Result<HeaderConfig, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::use_context;

    let Some(AppState { config, .. }) = use_context::<AppState>() else {
        tracing::warn!("site_config called without server state");
        return Err(ServerFnError::new("site configuration is unavailable"));
    };

    Ok(config.as_ref().clone())
}
