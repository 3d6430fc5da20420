use std::net::SocketAddr;
use std::sync::Arc;

use jamlink::common::types::VideoId;
use jamlink::common::HttpClient;
use jamlink::configs::Config;
use jamlink::resolver::{HttpMirrorApi, StreamResolver};
use jamlink::server::AppState;
use jamlink::sources::SourceManager;
use jamlink::sources::youtube::YouTubeSearch;
use jamlink::transport;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv::dotenv().ok();

    let config = Config::load()?;

    let default_directives = config
        .logging
        .as_ref()
        .and_then(|l| l.level.clone())
        .unwrap_or_else(|| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directives));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!(
        "Configuration loaded: {} primary host(s), {} proxy host(s)",
        config.mirrors.api_urls.len(),
        config.mirrors.proxy_urls.len()
    );

    let http = Arc::new(HttpClient::new()?);
    let resolver = Arc::new(StreamResolver::new(
        Arc::new(HttpMirrorApi::new(http.clone())),
        config.mirrors.clone(),
        &config.resolver,
    ));

    // Programmatic mode: a JSON array of video IDs on the command line
    // resolves straight to a JSON map on stdout, no server involved.
    if let Some(raw) = std::env::args().nth(1) {
        let ids: Vec<VideoId> = serde_json::from_str(&raw)?;
        let resolved = resolver.resolve_many(&ids).await;
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    let youtube = Arc::new(YouTubeSearch::new(
        http.clone(),
        config.resolver.cache_capacity,
        config.resolver.cache_ttl(),
    ));
    let source_manager = Arc::new(SourceManager::new(&config, http.clone()));

    let address = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let state = Arc::new(AppState {
        config,
        source_manager,
        youtube,
        resolver,
    });

    let app = transport::http_server::router(state)
        .layer(tower_http::trace::TraceLayer::new_for_http());

    info!("jamlink listening on {}", address);

    let listener = tokio::net::TcpListener::bind(address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
