// Repository interfaces (ports)

pub mod player_card_repository;

pub use player_card_repository::{
    PlayerCardRepository, RepositoryError, RepositoryResult, SERVER_ERROR_MESSAGE,
};
