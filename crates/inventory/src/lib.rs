//! `sweetshop-inventory` — catalog and stock domain.
//!
//! Business rules for the sweet catalog: field validation, partial update
//! semantics, search filtering, the ledger port, and the service that
//! enforces the authorization policy and the non-negative-stock invariant.

pub mod ledger;
pub mod search;
pub mod service;
pub mod sweet;

pub use ledger::SweetLedger;
pub use search::SearchFilter;
pub use service::InventoryService;
pub use sweet::{NewSweet, Sweet, SweetPatch};
