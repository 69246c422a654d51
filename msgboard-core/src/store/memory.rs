//! In-process message store
//!
//! Backs tests and `msgboard serve --in-memory`. Every instance is isolated.

use std::cmp::Reverse;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::MessageStore;
use crate::error::StoreError;
use crate::models::{Message, Page, PageRequest};

/// Message store backed by a `HashMap` behind a tokio `RwLock`
#[derive(Debug, Default)]
pub struct InMemoryMessageStore {
    rows: RwLock<HashMap<Uuid, Message>>,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn save(&self, message: Message) -> Result<Message, StoreError> {
        let mut rows = self.rows.write().await;
        rows.insert(message.id, message.clone());
        Ok(message)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, StoreError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError> {
        self.rows.write().await.remove(&id);
        Ok(())
    }

    async fn list(&self, page: PageRequest) -> Result<Page<Message>, StoreError> {
        let rows = self.rows.read().await;
        let total = rows.len() as u64;

        let mut ordered: Vec<&Message> = rows.values().collect();
        ordered.sort_by_key(|m| (Reverse(m.created_at), m.id));

        // Offsets past usize::MAX can't index anything anyway.
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let content = ordered
            .into_iter()
            .skip(offset)
            .take(page.limit() as usize)
            .cloned()
            .collect();

        Ok(Page::new(content, page, total))
    }
}
