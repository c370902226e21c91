#![recursion_limit = "256"]

mod feed;
mod redirect;

use std::sync::Arc;

use app::{
    component,
    config::{ConfigError, HeaderConfig},
    shell,
    types::AppState,
};
use axum::{Router, http::StatusCode, response::Json, routing::get};
use dotenvy::dotenv;
use feed::feed_handler;
use leptos::logging;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use redirect::redirect_www;
use serde_json::json;

use tower_http::compression::predicate::{NotForContentType, SizeAbove};
use tower_http::compression::{CompressionLayer, Predicate as _};
use tower_http::trace::TraceLayer;

// Health check handler
async fn health_handler() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "blog-header",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

fn tracing_level() -> tracing::Level {
    if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

/// Header settings from the environment; invalid values fall back to defaults.
fn load_header_config() -> HeaderConfig {
    config_or_default(HeaderConfig::from_env())
}

fn config_or_default(loaded: Result<HeaderConfig, ConfigError>) -> HeaderConfig {
    loaded.unwrap_or_else(|err| {
        tracing::warn!(%err, "Invalid header configuration, using defaults");
        HeaderConfig::default()
    })
}

fn router(app_state: AppState) -> Router {
    let routes = generate_route_list(component);
    let leptos_options = app_state.leptos_options.clone();

    Router::new()
        .leptos_routes_with_context(
            &app_state,
            routes,
            {
                let app_state = app_state.clone();
                move || provide_context(app_state.clone())
            },
            move || shell(leptos_options.clone()),
        )
        .route("/health", get(health_handler))
        .route("/feed", get(feed_handler))
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(redirect_www)),
        )
        .layer(CompressionLayer::new().compress_when(
            NotForContentType::new("application/rss+xml").and(SizeAbove::new(1024)),
        ))
        .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
        .with_state(app_state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level())
        .init();

    if dotenv().is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    let Ok(conf) = get_configuration(Some("Cargo.toml")) else {
        logging::error!("Failed to get configuration");
        return;
    };

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let config = load_header_config();
    tracing::info!(title = %config.title, lang = %config.lang, auto_collapse = config.auto_collapsed_nav_bar, "Loaded header configuration");

    let app = router(AppState {
        config: Arc::new(config),
        leptos_options,
    });

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    match axum::serve(listener, app.into_make_service()).await {
        Ok(()) => logging::log!("Server shutdown gracefully"),
        Err(err) => logging::error!("Failed to serve app: {err:?}"),
    }
}
