//! SeaORM entities mapping the `users` and `games` tables.

pub mod games;
pub mod users;
