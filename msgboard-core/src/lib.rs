//! msgboard-core: message records, the store contract, and the service rules.
//!
//! No HTTP and no SQL here. `msgboard-server` supplies both.

pub mod error;
pub mod models;
pub mod service;
pub mod store;

pub use error::{ErrorKind, ServiceError, StoreError, MESSAGE_ID_MISMATCH, MESSAGE_NOT_FOUND};
pub use models::{Message, MessageDraft, MessageInput, Page, PageParams, PageRequest};
pub use service::MessageService;
pub use store::{InMemoryMessageStore, MessageStore};
