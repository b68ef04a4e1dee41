//! Test state builder (two-stage test harness, stage 1).

use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::state::build_state;
use crate::state::app_state::AppState;

/// Builder for creating test AppState instances
pub struct TestStateBuilder {
    with_db: bool,
}

impl TestStateBuilder {
    pub fn new() -> Self {
        Self { with_db: false }
    }

    /// Enable a freshly migrated test database (in-memory SQLite unless
    /// `TEST_DATABASE_URL` says otherwise).
    pub fn with_db(mut self) -> Self {
        self.with_db = true;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let mut builder = build_state();
        if self.with_db {
            builder = builder.with_db(DbProfile::Test);
        }
        builder.build().await
    }
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a new test state builder.
///
/// # Example
/// ```rust,no_run
/// use backend::test_support::create_test_state;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let state = create_test_state().with_db().build().await?;
/// # Ok(())
/// # }
/// ```
pub fn create_test_state() -> TestStateBuilder {
    TestStateBuilder::new()
}
