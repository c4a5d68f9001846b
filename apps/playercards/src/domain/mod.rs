// Domain layer module exports
// Domain is independent of infrastructure concerns

pub mod player_card;
pub mod repositories;

pub use player_card::PlayerCard;
