//! Inventory ledger port.

use async_trait::async_trait;

use sweetshop_core::{DomainResult, SweetId};

use crate::{SearchFilter, Sweet, SweetPatch};

/// Storage port for the sweet catalog and its stock quantities.
///
/// `withdraw` and `deposit` carry the system's one hard concurrency
/// contract: the check-then-set of quantity must be a **single atomic
/// conditional update** serialized per sweet id (for SQL, an `UPDATE`
/// guarded by `quantity >= n` checked via rows-affected), never a read
/// followed by a write. A failed withdrawal must leave the row untouched;
/// the failure is surfaced as an error, never retried.
#[async_trait]
pub trait SweetLedger: Send + Sync {
    async fn insert(&self, sweet: Sweet) -> DomainResult<()>;

    async fn get(&self, id: SweetId) -> DomainResult<Option<Sweet>>;

    async fn list(&self) -> DomainResult<Vec<Sweet>>;

    async fn search(&self, filter: &SearchFilter) -> DomainResult<Vec<Sweet>>;

    /// Apply a partial update; omitted fields keep their prior values.
    /// Fails with `NotFound` for an unknown id.
    async fn update(&self, id: SweetId, patch: &SweetPatch) -> DomainResult<Sweet>;

    /// Remove permanently. Fails with `NotFound` for an unknown id.
    async fn delete(&self, id: SweetId) -> DomainResult<()>;

    /// Atomically decrement stock if at least `quantity` is available,
    /// returning the new quantity. Fails with `NotFound` for an unknown id
    /// and `InsufficientStock` when the guard does not hold; in both cases
    /// the stored quantity is unchanged.
    async fn withdraw(&self, id: SweetId, quantity: i64) -> DomainResult<i64>;

    /// Atomically increment stock, returning the new quantity. Fails with
    /// `NotFound` for an unknown id.
    async fn deposit(&self, id: SweetId, quantity: i64) -> DomainResult<i64>;
}
