// ── User domain types ──

use serde::{Deserialize, Serialize};
use url::Url;

use super::id::UserId;

/// Raw user record as supplied at store construction. Immutable after
/// load; everything viewer-relative is derived at query time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub full_name: String,
    #[serde(default)]
    pub avatar_url: Option<Url>,
}

/// Viewer-relative user snapshot.
///
/// An independent value assembled per read -- holding one of these never
/// observes later store mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub full_name: String,
    pub avatar_url: Option<Url>,

    /// Whether the current viewer follows this user.
    pub viewer_follows: bool,
    /// Whether this user follows the current viewer.
    pub follows_viewer: bool,
    /// How many users this user follows.
    pub follows_count: usize,
    /// How many users follow this user.
    pub followers_count: usize,
}
