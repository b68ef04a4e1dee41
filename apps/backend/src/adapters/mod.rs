//! SeaORM adapters: the only layer that talks to the database directly.
//!
//! Adapter functions return `sea_orm::DbErr`; the repos layer maps those to
//! `DomainError` via `From`.

pub mod games_sea;
pub mod users_sea;
