//! Permissive cross-origin middleware for browser-based callers.

use axum::{
    extract::Request,
    http::{HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Answers `OPTIONS` requests to any path directly with an empty 200 and
/// stamps the cross-origin headers on every response.
///
/// Applied as the innermost layer around the whole router so that the 404
/// fallback and error responses carry the headers too.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use crate::api::middleware::cors;
///
/// let app = Router::new().layer(middleware::from_fn(cors::layer));
/// ```
pub async fn layer(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return with_cors_headers(StatusCode::OK.into_response());
    }

    with_cors_headers(next.run(req).await)
}

fn with_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );

    response
}
