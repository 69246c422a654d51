//! Message persistence contract
//!
//! A store is a gateway with no business rules. Existence checks,
//! identity checks, and timestamps all live in [`crate::MessageService`].

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{Message, Page, PageRequest};

pub mod memory;

pub use memory::InMemoryMessageStore;

/// Persistence gateway for messages (testable)
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Insert when `message.id` is unknown, otherwise overwrite that row.
    ///
    /// Returns the persisted representation.
    async fn save(&self, message: Message) -> Result<Message, StoreError>;

    /// Look a record up by id. Absence is not an error here.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, StoreError>;

    /// Remove the row with this id. Removing an absent id is a no-op.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError>;

    /// Remove the row backing `message`.
    async fn delete(&self, message: &Message) -> Result<(), StoreError> {
        self.delete_by_id(message.id).await
    }

    /// One page of records, newest `created_at` first.
    ///
    /// Ties on `created_at` are broken by `id` ascending so that paging is
    /// stable. `total_elements` counts every record regardless of the page.
    async fn list(&self, page: PageRequest) -> Result<Page<Message>, StoreError>;
}
