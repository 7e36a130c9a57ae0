//! Pull request comment snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single comment on a pull request, fetched once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Login of the comment author
    pub author: String,
    /// Raw comment text
    pub body: String,
    /// When the comment was created
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: impl Into<String>, body: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
            created_at,
        }
    }

    /// Pick the most recent comment: greatest `created_at`, ties resolved in
    /// favor of the one listed later.
    pub fn latest(comments: Vec<Comment>) -> Option<Comment> {
        comments.into_iter().reduce(|latest, next| {
            if next.created_at >= latest.created_at {
                next
            } else {
                latest
            }
        })
    }
}
