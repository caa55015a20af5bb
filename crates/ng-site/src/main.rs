//! Nemesis Group Site Server

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), ng_core::SiteError> {
    use leptos::get_configuration;
    use ng_core::SiteConfig;
    use ng_site::server;
    use tracing::info;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let config = SiteConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_filter.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Nemesis Group site");
    info!(config = ?config, "configuration loaded");

    server::check_content(&config)?;

    let conf = get_configuration(None).await.map_err(server::config_error)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let app = server::router(leptos_options, &config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // The browser bundle starts from `ng_site::hydrate`.
}
