use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::player_card::PlayerCard;

/// Query capability the player card repository runs its statements through
///
/// `PgPool` is the production implementation. Anything else that can answer
/// these two calls (an in-memory fake in tests, for instance) can stand in.
#[async_trait]
pub trait ConnectionPool: Send + Sync {
    /// Run a select and decode every row, preserving database order
    async fn fetch_cards(&self, sql: &'static str) -> Result<Vec<PlayerCard>, sqlx::Error>;

    /// Run a statement with `id` bound to `$1`, returning the affected row count
    async fn execute_with_id(&self, sql: &'static str, id: i32) -> Result<u64, sqlx::Error>;
}

#[async_trait]
impl ConnectionPool for PgPool {
    async fn fetch_cards(&self, sql: &'static str) -> Result<Vec<PlayerCard>, sqlx::Error> {
        sqlx::query_as::<_, PlayerCard>(sql).fetch_all(self).await
    }

    async fn execute_with_id(&self, sql: &'static str, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(sql).bind(id).execute(self).await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl<T: ConnectionPool + ?Sized> ConnectionPool for Arc<T> {
    async fn fetch_cards(&self, sql: &'static str) -> Result<Vec<PlayerCard>, sqlx::Error> {
        (**self).fetch_cards(sql).await
    }

    async fn execute_with_id(&self, sql: &'static str, id: i32) -> Result<u64, sqlx::Error> {
        (**self).execute_with_id(sql, id).await
    }
}
