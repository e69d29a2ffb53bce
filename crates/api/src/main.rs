use forum_api::app::{self, services::ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    forum_observability::init();

    let config = ApiConfig::from_env()?;
    let app = app::build_app(config);

    let addr = std::env::var("FORUM_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
