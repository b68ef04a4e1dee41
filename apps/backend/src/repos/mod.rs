//! Repository functions exposing domain models over the adapters.

pub mod games;
pub mod users;
