use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::player_card::PlayerCard;
use crate::domain::repositories::{PlayerCardRepository, RepositoryError, RepositoryResult};
use crate::infrastructure::pool::ConnectionPool;

const LIST_PLAYER_CARDS: &str = "SELECT * FROM playercards;";
const DELETE_PLAYER_CARD: &str = "DELETE FROM playercards WHERE playerid=$1";

/// PostgreSQL implementation of PlayerCardRepository
///
/// Holds no state besides the injected pool, so one instance can serve
/// concurrent callers.
pub struct PostgresPlayerCardRepository<P = PgPool> {
    pool: P,
}

impl<P: ConnectionPool> PostgresPlayerCardRepository<P> {
    /// Creates a new PostgresPlayerCardRepository
    ///
    /// # Arguments
    /// * `pool` - connection pool the statements are sent through
    pub fn new(pool: P) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl<P: ConnectionPool> PlayerCardRepository for PostgresPlayerCardRepository<P> {
    async fn list_player_cards(&self) -> RepositoryResult<Vec<PlayerCard>> {
        tracing::debug!(sql = LIST_PLAYER_CARDS, "listing player cards");

        self.pool
            .fetch_cards(LIST_PLAYER_CARDS)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to list player cards");
                RepositoryError::Database(e)
            })
    }

    async fn remove_player_card(&self, player_id: i32) -> RepositoryResult<bool> {
        tracing::debug!(sql = DELETE_PLAYER_CARD, player_id, "removing player card");

        let rows_affected = self
            .pool
            .execute_with_id(DELETE_PLAYER_CARD, player_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, player_id, "Failed to remove player card");
                RepositoryError::Database(e)
            })?;

        if rows_affected == 0 {
            tracing::debug!(player_id, "Player card not found");
            return Ok(false);
        }

        Ok(true)
    }
}
