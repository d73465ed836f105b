/// Database test utilities with singleton pattern
///
/// Provides access to the test database with serialized tests and a clean
/// movies table per test
use cinedex_lib::shared::infrastructure::{Database, DbPool};
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use once_cell::sync::OnceCell;
use std::sync::{Arc, Mutex};

static DB: OnceCell<Arc<Database>> = OnceCell::new();

/// Get or create the singleton test database, migrated to the latest schema
pub fn get_test_db() -> Arc<Database> {
    DB.get_or_init(|| {
        dotenvy::dotenv().ok();
        let test_db_url = std::env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL must be set in .env for tests");

        let manager = ConnectionManager::<PgConnection>::new(test_db_url);
        let pool: DbPool = r2d2::Pool::builder()
            .max_size(5)
            .build(manager)
            .expect("Failed to create test database pool");

        let db = Database::from_pool(pool);
        db.run_migrations().expect("Failed to migrate test database");
        Arc::new(db)
    })
    .clone()
}

/// Clean the movies table - use at the start of each test
pub fn clean_test_db() {
    let db = get_test_db();
    let mut conn = db.get_connection().expect("Failed to get DB connection");

    diesel::sql_query("TRUNCATE TABLE movies")
        .execute(&mut conn)
        .expect("Failed to clean movies");
}

/// Global test mutex for serialization
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Acquire test lock to ensure tests run serially
/// Returns a guard that releases the lock when dropped
pub fn acquire_test_lock() -> std::sync::MutexGuard<'static, ()> {
    // Handle poisoned mutex by recovering from panic
    match TEST_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
