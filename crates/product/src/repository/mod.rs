mod command;
mod query;

pub use self::command::ProductCommandRepository;
pub use self::query::ProductQueryRepository;

use shared::config::ConnectionPool;
use tracing::info;

/// Creates the `products` table when it does not exist yet.
pub async fn ensure_schema(pool: &ConnectionPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            price BIGINT NOT NULL,
            description TEXT,
            quantity INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("🗄️ products table is ready");
    Ok(())
}
