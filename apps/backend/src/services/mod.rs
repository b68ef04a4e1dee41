//! Service layer: request-level orchestration over repos and domain logic.

pub mod games;
pub mod users;
