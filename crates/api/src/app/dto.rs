use rust_decimal::Decimal;
use serde::Deserialize;

use sweetshop_auth::{Claims, User};
use sweetshop_inventory::{SearchFilter, Sweet};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login form (`application/x-www-form-urlencoded`); the `username` field
/// also accepts an email address.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct QuantityRequest {
    pub quantity: i64,
}

/// Search query parameters. Empty strings count as absent filters.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price_min: Option<Decimal>,
    pub price_max: Option<Decimal>,
}

impl SearchQuery {
    pub fn into_filter(self) -> SearchFilter {
        let non_empty = |s: Option<String>| s.filter(|v| !v.trim().is_empty());
        SearchFilter {
            name: non_empty(self.name),
            category: non_empty(self.category),
            price_min: self.price_min,
            price_max: self.price_max,
        }
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

/// Public view of a user; the password hash never leaves the server.
pub fn user_to_json(user: &User) -> serde_json::Value {
    serde_json::json!({
        "id": user.id.to_string(),
        "username": user.username,
        "email": user.email,
        "role": user.role.as_str(),
    })
}

pub fn claims_to_json(claims: &Claims) -> serde_json::Value {
    serde_json::json!({
        "username": claims.username,
        "email": claims.email,
        "role": claims.role.as_str(),
    })
}

pub fn sweet_to_json(sweet: &Sweet) -> serde_json::Value {
    serde_json::json!({
        "id": sweet.id.to_string(),
        "name": sweet.name,
        "category": sweet.category,
        "price": sweet.price,
        "quantity": sweet.quantity,
    })
}
