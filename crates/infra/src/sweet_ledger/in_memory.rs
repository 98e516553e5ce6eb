//! In-memory inventory ledger (tests and DATABASE_URL-less runs).

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use sweetshop_core::{DomainError, DomainResult, SweetId};
use sweetshop_inventory::{SearchFilter, Sweet, SweetLedger, SweetPatch};

/// Map-backed ledger guarded by one mutex.
///
/// The stock guard and the mutation happen under a single lock
/// acquisition, which gives the same per-id serialization the Postgres
/// implementation gets from its conditional `UPDATE`.
#[derive(Default)]
pub struct InMemorySweetLedger {
    sweets: Mutex<HashMap<SweetId, Sweet>>,
}

impl InMemorySweetLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SweetLedger for InMemorySweetLedger {
    async fn insert(&self, sweet: Sweet) -> DomainResult<()> {
        self.sweets.lock().unwrap().insert(sweet.id, sweet);
        Ok(())
    }

    async fn get(&self, id: SweetId) -> DomainResult<Option<Sweet>> {
        Ok(self.sweets.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Sweet>> {
        Ok(self.sweets.lock().unwrap().values().cloned().collect())
    }

    async fn search(&self, filter: &SearchFilter) -> DomainResult<Vec<Sweet>> {
        Ok(self
            .sweets
            .lock()
            .unwrap()
            .values()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect())
    }

    async fn update(&self, id: SweetId, patch: &SweetPatch) -> DomainResult<Sweet> {
        let mut sweets = self.sweets.lock().unwrap();
        let sweet = sweets.get_mut(&id).ok_or(DomainError::NotFound)?;
        patch.apply_to(sweet);
        Ok(sweet.clone())
    }

    async fn delete(&self, id: SweetId) -> DomainResult<()> {
        self.sweets
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::NotFound)
    }

    async fn withdraw(&self, id: SweetId, quantity: i64) -> DomainResult<i64> {
        let mut sweets = self.sweets.lock().unwrap();
        let sweet = sweets.get_mut(&id).ok_or(DomainError::NotFound)?;

        if sweet.quantity < quantity {
            return Err(DomainError::InsufficientStock {
                requested: quantity,
                available: sweet.quantity,
            });
        }
        sweet.quantity -= quantity;
        Ok(sweet.quantity)
    }

    async fn deposit(&self, id: SweetId, quantity: i64) -> DomainResult<i64> {
        let mut sweets = self.sweets.lock().unwrap();
        let sweet = sweets.get_mut(&id).ok_or(DomainError::NotFound)?;
        sweet.quantity += quantity;
        Ok(sweet.quantity)
    }
}
