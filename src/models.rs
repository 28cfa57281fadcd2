use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::threading::ThreadRecord;

// ===== Comment Models =====

/// Author summary embedded in a comment, as the client sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentAuthor {
    pub id: Uuid,
    pub name: String,
}

/// One comment attached to an audio upload.
///
/// This is the flat record shape the persistence layer hands back: the
/// reply relationship exists only as `parent_id` until the thread builder
/// turns a page's worth of these into a forest. A `parent_id` that no
/// longer resolves (for example because a banned user's comments were
/// hard-deleted underneath their replies) is legal input and handled by
/// the builder, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub audio_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub user: CommentAuthor,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ThreadRecord for Comment {
    type Id = Uuid;
    type Timestamp = DateTime<Utc>;

    fn id(&self) -> Uuid {
        self.id
    }

    fn parent_id(&self) -> Option<Uuid> {
        self.parent_id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
