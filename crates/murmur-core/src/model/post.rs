// ── Post domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use super::id::{PostId, UserId};

/// Raw post record as supplied at store construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: PostId,
    pub author: UserId,
    pub description: String,
    pub image_url: Url,
    pub created_at: DateTime<Utc>,
}

/// Viewer-relative post snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: PostId,
    pub author: UserId,
    pub description: String,
    pub image_url: Url,
    pub created_at: DateTime<Utc>,

    /// Whether the current viewer has liked this post.
    pub viewer_likes: bool,
    /// Total number of likes.
    pub like_count: usize,
}
