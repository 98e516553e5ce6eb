//! `sweetshop-infra` — persistence adapters.
//!
//! Postgres (sqlx) and in-memory implementations of the credential store
//! and the inventory ledger. Both implementations honor the same
//! contracts: unique-key conflicts surface as `DomainError::Conflict`, and
//! stock arithmetic is a single guarded mutation so quantity can never go
//! negative under concurrent requests.

pub mod postgres;
pub mod sweet_ledger;
pub mod user_store;

pub use postgres::{connect, ensure_schema};
pub use sweet_ledger::{InMemorySweetLedger, PostgresSweetLedger};
pub use user_store::{InMemoryUserStore, PostgresUserStore};
