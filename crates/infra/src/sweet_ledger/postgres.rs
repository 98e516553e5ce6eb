//! Postgres-backed inventory ledger.
//!
//! Stock arithmetic is one conditional `UPDATE` with the guard in the
//! `WHERE` clause, checked by whether a row came back. Postgres serializes
//! the row-level writes, so two concurrent purchases of the last items
//! cannot both pass the guard.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;
use uuid::Uuid;

use sweetshop_core::{DomainError, DomainResult, SweetId};
use sweetshop_inventory::{SearchFilter, Sweet, SweetLedger, SweetPatch};

use crate::postgres::map_sqlx_error;

pub struct PostgresSweetLedger {
    pool: PgPool,
}

impl PostgresSweetLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn current_quantity(&self, id: SweetId) -> DomainResult<Option<i64>> {
        let row = sqlx::query("SELECT quantity FROM sweets WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(|r| r.try_get("quantity").map_err(map_sqlx_error))
            .transpose()
    }
}

const SWEET_COLUMNS: &str = "id, name, category, price, quantity";

fn row_to_sweet(row: &PgRow) -> DomainResult<Sweet> {
    let id: Uuid = row.try_get("id").map_err(map_sqlx_error)?;

    Ok(Sweet {
        id: SweetId::from_uuid(id),
        name: row.try_get("name").map_err(map_sqlx_error)?,
        category: row.try_get("category").map_err(map_sqlx_error)?,
        price: row.try_get::<Decimal, _>("price").map_err(map_sqlx_error)?,
        quantity: row.try_get("quantity").map_err(map_sqlx_error)?,
    })
}

#[async_trait]
impl SweetLedger for PostgresSweetLedger {
    async fn insert(&self, sweet: Sweet) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO sweets (id, name, category, price, quantity) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(sweet.id.as_uuid())
        .bind(&sweet.name)
        .bind(&sweet.category)
        .bind(sweet.price)
        .bind(sweet.quantity)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn get(&self, id: SweetId) -> DomainResult<Option<Sweet>> {
        let row = sqlx::query(&format!("SELECT {SWEET_COLUMNS} FROM sweets WHERE id = $1"))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_sweet).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Sweet>> {
        let rows = sqlx::query(&format!("SELECT {SWEET_COLUMNS} FROM sweets"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_sweet).collect()
    }

    async fn search(&self, filter: &SearchFilter) -> DomainResult<Vec<Sweet>> {
        let rows = sqlx::query(&format!(
            "SELECT {SWEET_COLUMNS} FROM sweets \
             WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%') \
               AND ($2::text IS NULL OR category ILIKE '%' || $2 || '%') \
               AND ($3::numeric IS NULL OR price >= $3) \
               AND ($4::numeric IS NULL OR price <= $4)"
        ))
        .bind(filter.name.as_deref())
        .bind(filter.category.as_deref())
        .bind(filter.price_min)
        .bind(filter.price_max)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_sweet).collect()
    }

    async fn update(&self, id: SweetId, patch: &SweetPatch) -> DomainResult<Sweet> {
        let row = sqlx::query(&format!(
            "UPDATE sweets SET \
                 name = COALESCE($2::text, name), \
                 category = COALESCE($3::text, category), \
                 price = COALESCE($4::numeric, price), \
                 quantity = COALESCE($5::bigint, quantity) \
             WHERE id = $1 \
             RETURNING {SWEET_COLUMNS}"
        ))
        .bind(id.as_uuid())
        .bind(patch.name.as_deref())
        .bind(patch.category.as_deref())
        .bind(patch.price)
        .bind(patch.quantity)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_sweet).transpose()?.ok_or(DomainError::NotFound)
    }

    async fn delete(&self, id: SweetId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM sweets WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }

    async fn withdraw(&self, id: SweetId, quantity: i64) -> DomainResult<i64> {
        let row = sqlx::query(
            "UPDATE sweets SET quantity = quantity - $2 \
             WHERE id = $1 AND quantity >= $2 \
             RETURNING quantity",
        )
        .bind(id.as_uuid())
        .bind(quantity)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if let Some(row) = row {
            return row.try_get("quantity").map_err(map_sqlx_error);
        }

        // Guard failed: nothing was written. The follow-up read only
        // classifies the error.
        match self.current_quantity(id).await? {
            None => Err(DomainError::NotFound),
            Some(available) => Err(DomainError::InsufficientStock {
                requested: quantity,
                available,
            }),
        }
    }

    async fn deposit(&self, id: SweetId, quantity: i64) -> DomainResult<i64> {
        let row = sqlx::query(
            "UPDATE sweets SET quantity = quantity + $2 \
             WHERE id = $1 \
             RETURNING quantity",
        )
        .bind(id.as_uuid())
        .bind(quantity)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        match row {
            Some(row) => row.try_get("quantity").map_err(map_sqlx_error),
            None => Err(DomainError::NotFound),
        }
    }
}
