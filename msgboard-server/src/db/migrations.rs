//! Schema migrations for the messages table

use sqlx::PgPool;

/// Create the messages table and its feed index if missing.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running message migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            id UUID PRIMARY KEY,
            author TEXT NOT NULL CHECK (author <> ''),
            content TEXT NOT NULL CHECK (content <> ''),
            like_count BIGINT NOT NULL DEFAULT 0 CHECK (like_count >= 0),
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL,
            CHECK (updated_at >= created_at)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Feed order: newest first, id as tie-breaker
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_messages_created ON messages(created_at DESC, id)",
    )
    .execute(pool)
    .await?;

    tracing::info!("Message migrations complete");
    Ok(())
}
