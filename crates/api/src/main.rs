use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sweetshop_observability::init();

    // Missing SECRET_KEY is fatal: tokens must never be signed with a
    // fallback secret.
    let config = sweetshop_auth::AuthConfig::from_env()?;

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    let app = sweetshop_api::app::build_app(config).await?;

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
