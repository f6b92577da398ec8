use std::time::Duration;

use axum::{body::Body, routing::get, Json, Router};
use http::Request;
use serde_json::json;
use tower_http::{
  compression::CompressionLayer,
  cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

use crate::upload;

pub fn router() -> Router {
  Router::new()
    .route("/", get(root))
    .merge(upload::router())
}

/// The full service: routes plus cross-origin, tracing and compression layers.
pub fn app() -> Router {
  router()
    .layer(cors())
    .layer(
      TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        tracing::debug_span!(
          "request",
          id = %cuid::cuid1().unwrap_or_default(),
          method = %request.method(),
          uri = %request.uri(),
          version = ?request.version()
        )
      }),
    )
    .layer(CompressionLayer::new())
}

/// Any origin, method and header, with credentials.
///
/// Browsers refuse a wildcard origin on credentialed requests, so the request's
/// own values are mirrored back instead. Not suitable for production.
pub fn cors() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(AllowOrigin::mirror_request())
    .allow_methods(AllowMethods::mirror_request())
    .allow_headers(AllowHeaders::mirror_request())
    .allow_credentials(true)
    .max_age(Duration::from_secs(600))
}

async fn root() -> Json<serde_json::Value> {
  Json(json!({
    "message": "Menu translator API is running",
    "version": env!("CARGO_PKG_VERSION"),
  }))
}
