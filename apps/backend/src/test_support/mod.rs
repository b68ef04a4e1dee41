//! Two-stage test harness: build an `AppState`, then an Actix test service.
//!
//! Lives in the library (not `#[cfg(test)]`) so integration tests under
//! `tests/` can use it.

pub mod app_builder;
pub mod state_builder;

pub use app_builder::create_test_app_builder;
pub use state_builder::create_test_state;
