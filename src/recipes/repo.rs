use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::recipes::repo_types::{NewRecipe, PersistedRecipe};

impl PersistedRecipe {
    pub async fn insert(db: &PgPool, user_id: Uuid, new: &NewRecipe) -> anyhow::Result<Self> {
        let row = sqlx::query_as::<_, PersistedRecipe>(
            r#"
            INSERT INTO recipes (user_id, title, ingredients, steps, translated_urdu)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, title, ingredients, steps, translated_urdu, created_at
            "#,
        )
        .bind(user_id)
        .bind(&new.title)
        .bind(&new.ingredients)
        .bind(&new.steps)
        .bind(&new.translated_urdu)
        .fetch_one(db)
        .await
        .context("insert recipe")?;
        Ok(row)
    }

    /// Newest first.
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Self>> {
        let rows = sqlx::query_as::<_, PersistedRecipe>(
            r#"
            SELECT id, user_id, title, ingredients, steps, translated_urdu, created_at
              FROM recipes
             WHERE user_id = $1
             ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
        .context("list recipes by user")?;
        Ok(rows)
    }

    /// Deletes only when the row belongs to `user_id`; returns rows affected.
    pub async fn delete_for_user(db: &PgPool, user_id: Uuid, id: Uuid) -> anyhow::Result<u64> {
        let res = sqlx::query(
            r#"
            DELETE FROM recipes
             WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await
        .context("delete recipe")?;
        Ok(res.rows_affected())
    }
}
