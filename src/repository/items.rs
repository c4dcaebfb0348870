//! Items repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::item::{CreateItem, Item, ItemOut, ItemWithOwnerRow},
};

const ITEM_WITH_OWNER: &str = r#"
    SELECT i.id, i.name, i.description, i.available,
           i.owner_id, u.name AS owner_name, i.request_id
    FROM items i
    JOIN users u ON i.owner_id = u.id
"#;

#[derive(Clone)]
pub struct ItemsRepository {
    pool: Pool<Postgres>,
}

impl ItemsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get item by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Item> {
        sqlx::query_as::<_, Item>("SELECT * FROM items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", id)))
    }

    /// Get item by ID with its owner attached
    pub async fn get_with_owner(&self, id: i64) -> AppResult<ItemOut> {
        let query = format!("{} WHERE i.id = $1", ITEM_WITH_OWNER);
        let row = sqlx::query_as::<_, ItemWithOwnerRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", id)))?;
        Ok(row.into())
    }

    /// Create a new item
    pub async fn create(&self, item: &CreateItem, owner_id: i64) -> AppResult<Item> {
        let created = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, description, available, owner_id, request_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.available)
        .bind(owner_id)
        .bind(item.request_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    /// Persist an updated item
    pub async fn update(&self, item: &Item) -> AppResult<()> {
        sqlx::query("UPDATE items SET name = $1, description = $2, available = $3 WHERE id = $4")
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.available)
            .bind(item.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// List items owned by a user, paginated
    pub async fn list_by_owner(
        &self,
        owner_id: i64,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<ItemOut>> {
        let query = format!(
            "{} WHERE i.owner_id = $1 ORDER BY i.id LIMIT $2 OFFSET $3",
            ITEM_WITH_OWNER
        );
        let rows = sqlx::query_as::<_, ItemWithOwnerRow>(&query)
            .bind(owner_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Search available items by name or description, paginated
    pub async fn search(&self, text: &str, limit: i64, offset: i64) -> AppResult<Vec<ItemOut>> {
        let pattern = format!("%{}%", text.to_lowercase());
        let query = format!(
            r#"{}
            WHERE i.available = TRUE
              AND (LOWER(i.name) LIKE $1 OR LOWER(i.description) LIKE $1)
            ORDER BY i.id
            LIMIT $2 OFFSET $3
            "#,
            ITEM_WITH_OWNER
        );
        let rows = sqlx::query_as::<_, ItemWithOwnerRow>(&query)
            .bind(&pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// List items offered in response to a borrow request
    pub async fn find_by_request(&self, request_id: i64) -> AppResult<Vec<ItemOut>> {
        let query = format!("{} WHERE i.request_id = $1 ORDER BY i.id", ITEM_WITH_OWNER);
        let rows = sqlx::query_as::<_, ItemWithOwnerRow>(&query)
            .bind(request_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
