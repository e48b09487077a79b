use crate::config::DatabaseConfig;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

pub type DbPool = SqlitePool;

const CREATE_PRODUCTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    inventory INTEGER NOT NULL,
    price REAL NOT NULL
)";

/// Opens the connection pool described by `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    log::info!(
        "Connected to {} (max {} connections)",
        config.url,
        config.max_connections
    );

    Ok(pool)
}

/// Creates the `products` table if it is missing. Existing tables are left as they are.
pub async fn create_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PRODUCTS_TABLE).execute(pool).await?;
    Ok(())
}
