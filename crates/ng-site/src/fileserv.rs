//! Fallback handler: built files from `site-root`, otherwise the app

use crate::app::App;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use leptos::LeptosOptions;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tracing::error;

/// Serve `/pkg/*` and other files cargo-leptos writes to `site-root`. Any
/// path with no file behind it is rendered by the app, which answers
/// unknown routes with its 404 page.
pub async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> Response {
    match static_file(uri, &options.site_root).await {
        Ok(res) if res.status() == StatusCode::OK => res,
        Ok(_) => {
            let handler = leptos_axum::render_app_to_stream(options, App);
            handler(req).await.into_response()
        }
        Err((status, message)) => {
            error!(%message, "static file lookup failed");
            (status, message).into_response()
        }
    }
}

async fn static_file(uri: Uri, root: &str) -> Result<Response, (StatusCode, String)> {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;

    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => Ok(res.into_response()),
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {err}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> LeptosOptions {
        LeptosOptions::builder()
            .output_name("ng-site")
            .site_root(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
            .build()
    }

    async fn fetch(path: &'static str) -> Response {
        let req = Request::builder().uri(path).body(Body::empty()).unwrap();
        file_and_error_handler(Uri::from_static(path), State(options()), req).await
    }

    #[tokio::test]
    async fn test_serves_files_from_site_root() {
        let res = fetch("/robots.txt").await;
        assert_eq!(res.status(), StatusCode::OK);

        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("User-agent"));
    }

    #[tokio::test]
    async fn test_missing_file_falls_through_to_not_found_page() {
        let res = fetch("/careers").await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
