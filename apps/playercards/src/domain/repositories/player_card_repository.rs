use async_trait::async_trait;
use thiserror::Error;

use crate::domain::player_card::PlayerCard;

/// Message shown to callers whenever the database could not be reached or
/// rejected a statement. The cause itself only goes to the server log.
pub const SERVER_ERROR_MESSAGE: &str = "error, verifique os logs do servidor";

/// Errors surfaced by the player card repository
///
/// The display text is deliberately generic. The driver error is kept as the
/// `source()` for logging.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{}", SERVER_ERROR_MESSAGE)]
    Database(#[source] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository trait for player cards
#[async_trait]
pub trait PlayerCardRepository: Send + Sync {
    /// List every card in the order the database returns them
    async fn list_player_cards(&self) -> RepositoryResult<Vec<PlayerCard>>;

    /// Delete a card by id
    ///
    /// Returns `Ok(false)` when no card has that id.
    async fn remove_player_card(&self, player_id: i32) -> RepositoryResult<bool>;
}
