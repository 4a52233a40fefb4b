use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::{AuthorId, NoteId, RecordId};

/// A user review as produced by the store.
///
/// Counters are kept exactly as received (signed, possibly absent);
/// validation happens when the note is scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub label: String,
    pub author: AuthorId,
    pub product: RecordId,
    #[serde(default)]
    pub likes: Option<i64>,
    #[serde(default)]
    pub replies: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Note {
    pub fn new(
        id: impl Into<NoteId>,
        label: impl Into<String>,
        author: impl Into<AuthorId>,
        product: impl Into<RecordId>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            author: author.into(),
            product: product.into(),
            likes: None,
            replies: None,
            created_at: None,
        }
    }

    pub fn with_likes(mut self, likes: i64) -> Self {
        self.likes = Some(likes);
        self
    }

    pub fn with_replies(mut self, replies: i64) -> Self {
        self.replies = Some(replies);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}
