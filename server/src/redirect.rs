use axum::{
    body::Body,
    http::{Request, Response, StatusCode, header},
    middleware::Next,
};

/// Sends `www.` hosts to the bare domain with a permanent redirect.
pub async fn redirect_www(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    if let Some(location) = bare_host_location(&req) {
        return Response::builder()
            .status(StatusCode::MOVED_PERMANENTLY)
            .header(header::LOCATION, location)
            .body(Body::empty())
            .map_err(|err| {
                tracing::error!(?err, "Failed to build redirect response");
                StatusCode::INTERNAL_SERVER_ERROR
            });
    }
    Ok(next.run(req).await)
}

fn bare_host_location(req: &Request<Body>) -> Option<String> {
    let host = req.headers().get(header::HOST)?.to_str().ok()?;
    let bare = host.strip_prefix("www.")?;
    let path_query = req.uri().path_and_query().map_or("/", |pq| pq.as_str());
    Some(format!("https://{bare}{path_query}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, middleware, routing::get};
    use tower::ServiceExt as _;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .route("/about", get(|| async { "about" }))
            .layer(middleware::from_fn(redirect_www))
    }

    #[tokio::test]
    async fn test_www_host_is_redirected() {
        let request = Request::builder()
            .uri("/about?lang=fr")
            .header(header::HOST, "www.example.com")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response.headers()[header::LOCATION],
            "https://example.com/about?lang=fr"
        );
    }

    #[tokio::test]
    async fn test_bare_host_passes_through() {
        let request = Request::builder()
            .uri("/")
            .header(header::HOST, "example.com")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
