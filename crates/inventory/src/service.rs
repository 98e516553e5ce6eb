//! Inventory service: authorization policy + ledger orchestration.

use std::sync::Arc;

use sweetshop_auth::{Claims, require_admin};
use sweetshop_core::{DomainError, DomainResult, SweetId};

use crate::{NewSweet, SearchFilter, Sweet, SweetLedger, SweetPatch};

/// Orchestrates catalog and stock operations.
///
/// The policy is checked here, before the ledger is touched:
/// create/update/delete/restock require the admin role, purchase requires
/// any authenticated identity, reads require none. Stock arithmetic is
/// delegated to the ledger's atomic operations so quantity can never go
/// negative even under concurrent purchases.
pub struct InventoryService {
    ledger: Arc<dyn SweetLedger>,
}

impl InventoryService {
    pub fn new(ledger: Arc<dyn SweetLedger>) -> Self {
        Self { ledger }
    }

    pub async fn create(&self, claims: &Claims, sweet: NewSweet) -> DomainResult<Sweet> {
        require_admin(claims)?;
        let sweet = sweet.validated()?;

        let record = Sweet {
            id: SweetId::new(),
            name: sweet.name,
            category: sweet.category,
            price: sweet.price,
            quantity: sweet.quantity,
        };
        self.ledger.insert(record.clone()).await?;

        tracing::info!(id = %record.id, name = %record.name, "created sweet");
        Ok(record)
    }

    pub async fn update(&self, claims: &Claims, id: SweetId, patch: SweetPatch) -> DomainResult<Sweet> {
        require_admin(claims)?;
        let patch = patch.validated()?;
        self.ledger.update(id, &patch).await
    }

    pub async fn delete(&self, claims: &Claims, id: SweetId) -> DomainResult<()> {
        require_admin(claims)?;
        self.ledger.delete(id).await?;

        tracing::info!(%id, "deleted sweet");
        Ok(())
    }

    /// Purchase: any authenticated user; decrements stock atomically.
    pub async fn purchase(&self, claims: &Claims, id: SweetId, quantity: i64) -> DomainResult<i64> {
        validate_amount(quantity)?;
        let new_quantity = self.ledger.withdraw(id, quantity).await?;

        tracing::info!(%id, quantity, new_quantity, user = %claims.username, "purchase");
        Ok(new_quantity)
    }

    /// Restock: admin only; increments stock atomically.
    pub async fn restock(&self, claims: &Claims, id: SweetId, quantity: i64) -> DomainResult<i64> {
        require_admin(claims)?;
        validate_amount(quantity)?;
        let new_quantity = self.ledger.deposit(id, quantity).await?;

        tracing::info!(%id, quantity, new_quantity, user = %claims.username, "restock");
        Ok(new_quantity)
    }

    pub async fn list(&self) -> DomainResult<Vec<Sweet>> {
        self.ledger.list().await
    }

    pub async fn search(&self, filter: SearchFilter) -> DomainResult<Vec<Sweet>> {
        let filter = filter.validated()?;
        self.ledger.search(&filter).await
    }
}

fn validate_amount(quantity: i64) -> DomainResult<()> {
    if quantity <= 0 {
        return Err(DomainError::validation("quantity", "must be greater than zero"));
    }
    Ok(())
}
