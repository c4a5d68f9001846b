// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod postgres_player_card_repository;

pub use postgres_player_card_repository::PostgresPlayerCardRepository;
