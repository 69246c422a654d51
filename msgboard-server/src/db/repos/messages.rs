//! PostgreSQL message store
//!
//! - save: INSERT with ON CONFLICT (id) overwrite, RETURNING the stored row
//! - list: count query + ordered page query

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use msgboard_core::models::{Message, Page, PageRequest};
use msgboard_core::{MessageStore, StoreError};

/// Message row as stored in the `messages` table
#[derive(Debug, Clone, FromRow)]
struct MessageRow {
    id: Uuid,
    author: String,
    content: String,
    like_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<MessageRow> for Message {
    type Error = StoreError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        let like_count = u32::try_from(row.like_count).map_err(|_| {
            StoreError::corrupt(row.id, format!("like_count out of range: {}", row.like_count))
        })?;

        Ok(Message {
            id: row.id,
            author: row.author,
            content: row.content,
            like_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Message store over a sqlx connection pool
#[derive(Debug, Clone)]
pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    async fn save(&self, message: Message) -> Result<Message, StoreError> {
        let row: MessageRow = sqlx::query_as(
            r#"
            INSERT INTO messages (id, author, content, like_count, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                author = EXCLUDED.author,
                content = EXCLUDED.content,
                like_count = EXCLUDED.like_count,
                created_at = EXCLUDED.created_at,
                updated_at = EXCLUDED.updated_at
            RETURNING id, author, content, like_count, created_at, updated_at
            "#,
        )
        .bind(message.id)
        .bind(&message.author)
        .bind(&message.content)
        .bind(i64::from(message.like_count))
        .bind(message.created_at)
        .bind(message.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        tracing::debug!(id = %row.id, "message row saved");
        row.try_into()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, StoreError> {
        let row: Option<MessageRow> = sqlx::query_as(
            r#"
            SELECT id, author, content, like_count, created_at, updated_at
            FROM messages
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        row.map(Message::try_from).transpose()
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::backend)?;

        tracing::debug!(%id, rows = result.rows_affected(), "message row deleted");
        Ok(())
    }

    /// Separate count so `total_elements` stays right for pages past the end.
    async fn list(&self, page: PageRequest) -> Result<Page<Message>, StoreError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::backend)?;

        if total == 0 {
            return Ok(Page::empty(page));
        }

        // Postgres takes signed 64-bit LIMIT/OFFSET.
        let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
        let rows: Vec<MessageRow> = sqlx::query_as(
            r#"
            SELECT id, author, content, like_count, created_at, updated_at
            FROM messages
            ORDER BY created_at DESC, id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(page.limit()))
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        let content = rows
            .into_iter()
            .map(Message::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(content, page, total as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};
    use chrono::Duration;
    use msgboard_core::models::{timestamp_now, MessageDraft};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p msgboard-server -- --ignored

    async fn store() -> PgMessageStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        sqlx::query("TRUNCATE messages")
            .execute(&pool)
            .await
            .expect("truncate failed");
        PgMessageStore::new(pool)
    }

    fn message_at(content: &str, at: DateTime<Utc>) -> Message {
        Message::create(Uuid::new_v4(), MessageDraft::new("João", content).unwrap(), at)
    }

    #[test]
    fn negative_like_count_is_corrupt() {
        let now = timestamp_now();
        let row = MessageRow {
            id: Uuid::nil(),
            author: "a".into(),
            content: "b".into(),
            like_count: -1,
            created_at: now,
            updated_at: now,
        };

        let err = Message::try_from(row).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn save_round_trips_and_overwrites() {
        let store = store().await;
        let message = message_at("first", timestamp_now());

        let saved = store.save(message.clone()).await.unwrap();
        assert_eq!(saved, message);

        let revised = message.clone().revise("second".into(), timestamp_now());
        store.save(revised.clone()).await.unwrap();

        let found = store.find_by_id(message.id).await.unwrap().unwrap();
        assert_eq!(found, revised);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_removes_row() {
        let store = store().await;
        let saved = store.save(message_at("x", timestamp_now())).await.unwrap();

        store.delete(&saved).await.unwrap();
        store.delete_by_id(saved.id).await.unwrap();

        assert!(store.find_by_id(saved.id).await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_orders_newest_first() {
        let store = store().await;
        let base = timestamp_now();
        for i in 0..3 {
            store
                .save(message_at(&format!("t{}", i + 1), base + Duration::seconds(i)))
                .await
                .unwrap();
        }

        let page = store.list(PageRequest::new(0, 10)).await.unwrap();
        let contents: Vec<_> = page.content.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["t3", "t2", "t1"]);
        assert_eq!(page.total_elements, 3);

        let page = store.list(PageRequest::new(5, 10)).await.unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 3);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_breaks_ties_by_id() {
        let store = store().await;
        let at = timestamp_now();
        let mut ids = Vec::new();
        for i in 0..3 {
            let saved = store.save(message_at(&format!("m{i}"), at)).await.unwrap();
            ids.push(saved.id);
        }
        ids.sort();

        let page = store.list(PageRequest::new(0, 10)).await.unwrap();
        let listed: Vec<_> = page.content.iter().map(|m| m.id).collect();
        assert_eq!(listed, ids);
    }
}
