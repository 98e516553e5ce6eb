//! Sweet records and field validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sweetshop_core::{DomainError, DomainResult, SweetId};

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;
const CATEGORY_MIN: usize = 2;
const CATEGORY_MAX: usize = 50;
const PRICE_SCALE: u32 = 2;

/// Prices are NUMERIC(8,2): at most six integral digits.
const PRICE_LIMIT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// A sweet in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sweet {
    pub id: SweetId,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub quantity: i64,
}

/// Fields for creating a sweet, validated before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewSweet {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub quantity: i64,
}

impl NewSweet {
    /// Validate every field; normalizes the price to two fractional digits.
    pub fn validated(mut self) -> DomainResult<Self> {
        validate_name(&self.name)?;
        validate_category(&self.category)?;
        self.price = validate_price(self.price)?;
        validate_quantity(self.quantity)?;
        Ok(self)
    }
}

/// Partial update: only present fields are touched, each re-validated with
/// the same constraints as creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SweetPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<i64>,
}

impl SweetPatch {
    pub fn validated(mut self) -> DomainResult<Self> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(category) = &self.category {
            validate_category(category)?;
        }
        if let Some(price) = self.price {
            self.price = Some(validate_price(price)?);
        }
        if let Some(quantity) = self.quantity {
            validate_quantity(quantity)?;
        }
        Ok(self)
    }

    /// Overwrite the present fields, leaving omitted ones untouched.
    pub fn apply_to(&self, sweet: &mut Sweet) {
        if let Some(name) = &self.name {
            sweet.name = name.clone();
        }
        if let Some(category) = &self.category {
            sweet.category = category.clone();
        }
        if let Some(price) = self.price {
            sweet.price = price;
        }
        if let Some(quantity) = self.quantity {
            sweet.quantity = quantity;
        }
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    let len = name.chars().count();
    if len < NAME_MIN || len > NAME_MAX {
        return Err(DomainError::validation(
            "name",
            format!("must be {NAME_MIN} to {NAME_MAX} characters"),
        ));
    }
    Ok(())
}

fn validate_category(category: &str) -> DomainResult<()> {
    let len = category.chars().count();
    if len < CATEGORY_MIN || len > CATEGORY_MAX {
        return Err(DomainError::validation(
            "category",
            format!("must be {CATEGORY_MIN} to {CATEGORY_MAX} characters"),
        ));
    }
    Ok(())
}

fn validate_price(price: Decimal) -> DomainResult<Decimal> {
    if price <= Decimal::ZERO {
        return Err(DomainError::validation("price", "must be greater than zero"));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(DomainError::validation(
            "price",
            "must have at most two decimal places",
        ));
    }
    if price >= PRICE_LIMIT {
        return Err(DomainError::validation(
            "price",
            format!("must be less than {PRICE_LIMIT}"),
        ));
    }

    let mut normalized = price;
    normalized.rescale(PRICE_SCALE);
    Ok(normalized)
}

fn validate_quantity(quantity: i64) -> DomainResult<()> {
    if quantity < 0 {
        return Err(DomainError::validation("quantity", "must not be negative"));
    }
    Ok(())
}
