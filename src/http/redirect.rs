//! The redirect endpoint.
//!
//! `GET /api/getRedirect` answers with `{"url": REDIRECT_URL}` and headers
//! that stop browsers and intermediaries from caching the answer, so a new
//! URL takes effect on the next request after a redeploy.

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::convert::Infallible;
use tower_http::set_header::SetResponseHeaderLayer;

/// Route the redirect URL is served on.
pub const REDIRECT_PATH: &str = "/api/getRedirect";

/// Where clients are sent. Edit and redeploy to change it.
pub const REDIRECT_URL: &str = "https://www.baps.org/news";

/// `Cache-Control` sent with every redirect response.
pub const CACHE_CONTROL_VALUE: &str = "no-cache, no-store, must-revalidate";
/// `Pragma` for HTTP/1.0 caches.
pub const PRAGMA_VALUE: &str = "no-cache";
/// `Expires` in the past, so the response is already stale.
pub const EXPIRES_VALUE: &str = "0";

/// JSON body of the redirect endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectResponse {
    pub url: &'static str,
}

/// Routes for the redirect endpoint.
///
/// The no-cache headers wrap the method router only, so they reach the
/// route's 200, HEAD and 405 answers while the router's 404 fallback is
/// left alone.
pub fn routes() -> Router {
    let endpoint = get(get_redirect)
        .layer::<_, Infallible>(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_VALUE),
        ))
        .layer::<_, Infallible>(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static(PRAGMA_VALUE),
        ))
        .layer::<_, Infallible>(SetResponseHeaderLayer::overriding(
            header::EXPIRES,
            HeaderValue::from_static(EXPIRES_VALUE),
        ));

    Router::new().route(REDIRECT_PATH, endpoint)
}

pub async fn get_redirect() -> Json<RedirectResponse> {
    tracing::debug!(url = REDIRECT_URL, "Serving redirect");
    Json(RedirectResponse { url: REDIRECT_URL })
}
