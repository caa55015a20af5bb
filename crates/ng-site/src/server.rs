//! HTTP server wiring

use crate::app::App;
use crate::fileserv::file_and_error_handler;
use axum::{routing::get, Json, Router};
use leptos::LeptosOptions;
use leptos_axum::{generate_route_list, LeptosRoutes};
use ng_core::{validate, SiteConfig, SiteError, SiteResult};
use serde::Serialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Run the link checks over the content. In strict mode the first defect
/// is returned; otherwise defects are only logged.
pub fn check_content(config: &SiteConfig) -> SiteResult<()> {
    let defects = validate::site_defects();
    let Some(first) = defects.into_iter().next() else {
        return Ok(());
    };

    if config.strict_content {
        error!(%first, "refusing to serve site with broken content");
        Err(first)
    } else {
        warn!("serving site with content defects (NG_STRICT_CONTENT=false)");
        Ok(())
    }
}

pub fn router(leptos_options: LeptosOptions, config: &SiteConfig) -> Router {
    let routes = generate_route_list(App);

    Router::new()
        .route("/healthz", get(health_check))
        .leptos_routes(&leptos_options, routes, App)
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .fallback(file_and_error_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

pub fn config_error(err: impl std::fmt::Display) -> SiteError {
    SiteError::Config(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let Json(health) = health_check().await;
        let body = serde_json::to_value(&health).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_shipped_content_passes_strict_check() {
        assert!(check_content(&SiteConfig::default()).is_ok());
    }
}
