//! Catalog search filters.

use rust_decimal::Decimal;
use serde::Deserialize;

use sweetshop_core::{DomainError, DomainResult};

use crate::Sweet;

/// Conjunctive catalog filter: every present criterion must hold.
///
/// Name/category are case-insensitive substring matches; price bounds are
/// inclusive. An empty filter matches everything. Results carry no defined
/// ordering and are not paginated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchFilter {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price_min: Option<Decimal>,
    pub price_max: Option<Decimal>,
}

impl SearchFilter {
    pub fn validated(self) -> DomainResult<Self> {
        if let Some(min) = self.price_min {
            if min < Decimal::ZERO {
                return Err(DomainError::validation("price_min", "must not be negative"));
            }
        }
        if let Some(max) = self.price_max {
            if max < Decimal::ZERO {
                return Err(DomainError::validation("price_max", "must not be negative"));
            }
        }
        Ok(self)
    }

    pub fn matches(&self, sweet: &Sweet) -> bool {
        if let Some(name) = &self.name {
            if !sweet.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !sweet.category.to_lowercase().contains(&category.to_lowercase()) {
                return false;
            }
        }
        if let Some(min) = self.price_min {
            if sweet.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if sweet.price > max {
                return false;
            }
        }
        true
    }
}
