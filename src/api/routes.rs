use crate::api::{handlers, AppState};
use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

/// Build the main API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health_check))
        // CSV pipeline endpoints
        .route("/api/upload", post(handlers::upload))
        .route("/api/predict", post(handlers::predict))
        .route("/api/recommend", post(handlers::recommend))
        // Add state
        .with_state(state)
        // Add middleware
        .layer(middleware::from_fn(add_response_headers))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_response(DefaultOnResponse::new().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
}

/// Process-wide response headers the dashboard relies on
async fn add_response_headers(request: Request, next: Next) -> Response {
    let endpoint = request
        .uri()
        .path()
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .map(str::to_owned);

    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    headers.insert(
        "x-backend-version",
        HeaderValue::from_static(env!("CARGO_PKG_VERSION")),
    );
    if let Some(value) = endpoint.and_then(|name| HeaderValue::from_str(&name).ok()) {
        headers.insert("x-endpoint", value);
    }

    response
}
