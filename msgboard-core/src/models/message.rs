//! Message record and its validated input

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ValidationError, ValidationErrors};

/// Current time at the precision the stores keep (microseconds).
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// A persisted message.
///
/// `author` and `content` are never empty, `updated_at >= created_at`,
/// and `created_at` never changes after the first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub author: String,
    pub content: String,
    pub like_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Message {
    /// Build a brand-new record from a draft. Any id on the draft is ignored.
    pub fn create(id: Uuid, draft: MessageDraft, at: DateTime<Utc>) -> Self {
        Self {
            id,
            author: draft.author,
            content: draft.content,
            like_count: 0,
            created_at: at,
            updated_at: at,
        }
    }

    /// Replace the content and bump `updated_at`, keeping everything else.
    ///
    /// `updated_at` never moves backwards, even if `at` does.
    pub fn revise(self, content: String, at: DateTime<Utc>) -> Self {
        let updated_at = at.max(self.updated_at);
        Self {
            content,
            updated_at,
            ..self
        }
    }
}

/// Raw message payload as received from a client.
///
/// Missing or `null` text fields deserialize as `None` and fail validation
/// the same way empty strings do.
/// Server-managed fields (`likeCount`, timestamps) are not part of the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageInput {
    pub id: Option<Uuid>,
    pub author: Option<String>,
    pub content: Option<String>,
}

impl MessageInput {
    /// Check the non-empty rules, collecting every failure.
    pub fn validate(self) -> Result<MessageDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let author = self.author.filter(|s| !s.is_empty());
        if author.is_none() {
            errors.push(ValidationError::EmptyAuthor);
        }

        let content = self.content.filter(|s| !s.is_empty());
        if content.is_none() {
            errors.push(ValidationError::EmptyContent);
        }

        match (author, content) {
            (Some(author), Some(content)) => Ok(MessageDraft {
                id: self.id,
                author,
                content,
            }),
            _ => Err(errors),
        }
    }
}

/// Message payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    id: Option<Uuid>,
    author: String,
    content: String,
}

impl MessageDraft {
    /// Validate and build a draft without an embedded id.
    ///
    /// # Example
    /// ```
    /// use msgboard_core::models::MessageDraft;
    ///
    /// assert!(MessageDraft::new("Jose", "mensagem de José").is_ok());
    /// assert!(MessageDraft::new("", "").is_err());
    /// ```
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Result<Self, ValidationErrors> {
        MessageInput {
            id: None,
            author: Some(author.into()),
            content: Some(content.into()),
        }
        .validate()
    }

    /// Embed the id of the record this payload claims to describe.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}
