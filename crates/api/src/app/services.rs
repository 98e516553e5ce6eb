//! Service wiring: stores, authenticator, inventory service.

use std::sync::Arc;

use sweetshop_auth::{AuthConfig, Authenticator, TokenCodec, UserStore};
use sweetshop_infra::{
    InMemorySweetLedger, InMemoryUserStore, PostgresSweetLedger, PostgresUserStore,
};
use sweetshop_inventory::{InventoryService, SweetLedger};

/// The application's long-lived services, shared across requests.
pub struct AppServices {
    pub authenticator: Authenticator,
    pub inventory: InventoryService,
}

impl AppServices {
    pub fn new(
        config: &AuthConfig,
        tokens: Arc<TokenCodec>,
        users: Arc<dyn UserStore>,
        ledger: Arc<dyn SweetLedger>,
    ) -> Self {
        Self {
            authenticator: Authenticator::new(users, tokens, config.admin_emails.clone()),
            inventory: InventoryService::new(ledger),
        }
    }
}

/// Wire services from the environment.
///
/// `DATABASE_URL` selects Postgres-backed stores (bootstrapping the schema
/// on startup); without it everything lives in process memory and is lost
/// on restart.
pub async fn build_services(
    config: &AuthConfig,
    tokens: Arc<TokenCodec>,
) -> anyhow::Result<AppServices> {
    if let Ok(url) = std::env::var("DATABASE_URL") {
        let pool = sweetshop_infra::connect(&url).await?;
        sweetshop_infra::ensure_schema(&pool).await?;
        tracing::info!("using postgres stores");

        return Ok(AppServices::new(
            config,
            tokens,
            Arc::new(PostgresUserStore::new(pool.clone())),
            Arc::new(PostgresSweetLedger::new(pool)),
        ));
    }

    tracing::warn!("DATABASE_URL not set; using in-memory stores");
    Ok(in_memory_services(config, tokens))
}

/// In-memory wiring (also the black-box test harness).
pub fn in_memory_services(config: &AuthConfig, tokens: Arc<TokenCodec>) -> AppServices {
    AppServices::new(
        config,
        tokens,
        Arc::new(InMemoryUserStore::new()),
        Arc::new(InMemorySweetLedger::new()),
    )
}
