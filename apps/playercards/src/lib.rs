//! Player Cards Library
//!
//! Data access for the `playercards` table: the card record, the repository
//! contract, and its PostgreSQL implementation.

pub mod config;
pub mod domain;
pub mod infrastructure;
