use app::{config::HeaderConfig, types::AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use rss::ChannelBuilder;
use tracing::error;

fn build_response(body: String, content_type: &str, status: StatusCode) -> Response<String> {
    match Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .body(body)
    {
        Ok(response) => response,
        Err(build_error) => {
            error!(?build_error, "Failed to build HTTP response");
            let mut fallback = Response::new(String::new());
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        }
    }
}

/// Serves the channel the header's RSS link points at.
pub async fn feed_handler(State(state): State<AppState>) -> Response<String> {
    build_response(
        generate_feed(&state.config),
        "application/rss+xml",
        StatusCode::OK,
    )
}

/// Builds an RSS 2.0 channel describing the site.
pub fn generate_feed(config: &HeaderConfig) -> String {
    ChannelBuilder::default()
        .title(config.title.clone())
        .link(config.link.clone())
        .description(config.description.clone().unwrap_or_default())
        .language(Some(config.lang.clone()))
        .generator(Some(format!("blog-header {}", env!("CARGO_PKG_VERSION"))))
        .build()
        .to_string()
}
