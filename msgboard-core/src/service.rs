//! Message service: the business rules over a [`MessageStore`]
//!
//! Stateless. Every call goes to the store; nothing is cached and nothing
//! is retried, so a store failure surfaces as [`ServiceError::Store`].

use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::error::{Result, ServiceError};
use crate::models::{timestamp_now, Message, MessageDraft, Page, PageRequest};
use crate::store::MessageStore;

/// Cloneable handle over a shared store
#[derive(Clone)]
pub struct MessageService {
    store: Arc<dyn MessageStore>,
}

impl MessageService {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    /// Persist a new message under a freshly generated id.
    ///
    /// Any id embedded in `draft` is ignored. `like_count` starts at 0 and
    /// both timestamps are set to the same instant.
    #[instrument(skip_all)]
    pub async fn register_message(&self, draft: MessageDraft) -> Result<Message> {
        let message = Message::create(Uuid::new_v4(), draft, timestamp_now());
        let saved = self.store.save(message).await?;
        info!(id = %saved.id, "message registered");
        Ok(saved)
    }

    /// Fetch a message, failing with [`ServiceError::NotFound`] when absent.
    #[instrument(skip(self))]
    pub async fn get_message(&self, id: Uuid) -> Result<Message> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound { id })
    }

    /// Replace the content of an existing message.
    ///
    /// The payload must embed the same id as the target; otherwise the call
    /// fails with [`ServiceError::IdMismatch`] and nothing is written. Only
    /// `content` and `updated_at` change; everything else comes from the
    /// stored record.
    #[instrument(skip(self, draft))]
    pub async fn update_message(&self, id: Uuid, draft: MessageDraft) -> Result<Message> {
        let stored = self.get_message(id).await?;

        if draft.id() != Some(stored.id) {
            debug!(payload_id = ?draft.id(), "update payload names a different message");
            return Err(ServiceError::IdMismatch {
                id,
                payload_id: draft.id(),
            });
        }

        let revised = stored.revise(draft.into_content(), timestamp_now());
        let saved = self.store.save(revised).await?;
        info!(id = %saved.id, "message updated");
        Ok(saved)
    }

    /// Hard-delete a message. Returns `true`; failures are errors.
    #[instrument(skip(self))]
    pub async fn remove_message(&self, id: Uuid) -> Result<bool> {
        let stored = self.get_message(id).await?;
        self.store.delete(&stored).await?;
        info!(id = %id, "message removed");
        Ok(true)
    }

    /// Newest-first page of messages, exactly as the store returns it.
    #[instrument(skip(self))]
    pub async fn list_messages(&self, page: PageRequest) -> Result<Page<Message>> {
        Ok(self.store.list(page).await?)
    }
}
