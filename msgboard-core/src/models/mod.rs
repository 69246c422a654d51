//! Domain models with validation at construction
//!
//! Client input is validated when a [`MessageDraft`] is built.
//! Invalid input returns [`ValidationErrors`], not panic.

pub mod validation;
pub mod message;
pub mod pagination;

pub use validation::{ValidationError, ValidationErrors};
pub use message::{timestamp_now, Message, MessageDraft, MessageInput};
pub use pagination::{Page, PageParams, PageRequest, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
