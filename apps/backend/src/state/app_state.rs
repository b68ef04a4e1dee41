use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// The database handle is injected at construction; nothing reads an
/// ambient global connection.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Database connection (optional for handler tests without storage)
    db: Option<DatabaseConnection>,
}

impl AppState {
    /// Create a new AppState with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    /// Create a new AppState without a database connection (for testing)
    pub fn new_without_db() -> Self {
        Self { db: None }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
