// ── Post store ──
//
// Owns the post record set and the likes relation. Like pairs read as
// (user, post). The viewer is fixed at construction but, unlike the
// user store, does not need a post record -- no existence precondition.

use indexmap::IndexMap;
use tracing::debug;

use super::relation::RelationTable;
use crate::error::StoreError;
use crate::model::{Post, PostId, PostRecord, UserId};

/// In-memory post store bound to a fixed current viewer.
pub struct PostStore {
    records: IndexMap<PostId, PostRecord>,
    likes: RelationTable<UserId, PostId>,
    viewer: UserId,
}

impl PostStore {
    /// Build a store from raw records, an initial (user, post) like
    /// list, and the acting viewer. Duplicate pairs in the initial
    /// list are dropped.
    pub fn new(
        records: impl IntoIterator<Item = PostRecord>,
        likes: impl IntoIterator<Item = (UserId, PostId)>,
        viewer: UserId,
    ) -> Self {
        let records: IndexMap<_, _> = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        let likes = RelationTable::from_pairs(likes);
        debug!(
            viewer = %viewer,
            posts = records.len(),
            like_pairs = likes.len(),
            "post store ready"
        );

        Self {
            records,
            likes,
            viewer,
        }
    }

    /// The acting viewer's id.
    pub fn viewer(&self) -> &UserId {
        &self.viewer
    }

    /// Number of post records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Snapshot of the post with the given id, or `None` when no such
    /// record exists.
    pub fn post(&self, id: &PostId) -> Option<Post> {
        self.records.get(id).map(|record| self.snapshot(record))
    }

    /// Snapshots of all posts by the given author, in record order.
    /// An unknown author is simply an empty result.
    pub fn posts_by(&self, author: &UserId) -> Vec<Post> {
        self.records
            .values()
            .filter(|record| record.author == *author)
            .map(|record| self.snapshot(record))
            .collect()
    }

    /// Case-insensitive substring search against descriptions, in
    /// record order.
    pub fn find_posts(&self, query: &str) -> Vec<Post> {
        let needle = query.to_lowercase();
        self.records
            .values()
            .filter(|record| record.description.to_lowercase().contains(&needle))
            .map(|record| self.snapshot(record))
            .collect()
    }

    /// Record that the viewer likes the post.
    ///
    /// Rejects unknown posts and leaves the relation untouched. Liking
    /// an already-liked post is accepted and changes nothing.
    pub fn like(&mut self, id: &PostId) -> Result<(), StoreError> {
        self.check_exists(id)?;
        if self.likes.insert(self.viewer.clone(), id.clone()) {
            debug!(viewer = %self.viewer, post = %id, "like");
        }
        Ok(())
    }

    /// Remove the viewer's like of the post. Same acceptance rules as
    /// [`like`](Self::like).
    pub fn unlike(&mut self, id: &PostId) -> Result<(), StoreError> {
        self.check_exists(id)?;
        if self.likes.remove(&self.viewer, id) {
            debug!(viewer = %self.viewer, post = %id, "unlike");
        }
        Ok(())
    }

    /// Ids of the users who like the post, in like order, or `None`
    /// when the post has no record.
    pub fn liked_by(&self, id: &PostId) -> Option<Vec<UserId>> {
        if !self.records.contains_key(id) {
            return None;
        }
        Some(self.likes.lefts_for(id).cloned().collect())
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn check_exists(&self, id: &PostId) -> Result<(), StoreError> {
        if self.records.contains_key(id) {
            Ok(())
        } else {
            Err(StoreError::PostNotFound { id: id.clone() })
        }
    }

    fn snapshot(&self, record: &PostRecord) -> Post {
        Post {
            id: record.id.clone(),
            author: record.author.clone(),
            description: record.description.clone(),
            image_url: record.image_url.clone(),
            created_at: record.created_at,
            viewer_likes: self.likes.contains(&self.viewer, &record.id),
            like_count: self.likes.count_right(&record.id),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use url::Url;

    fn record(id: &str, author: &str, description: &str) -> PostRecord {
        PostRecord {
            id: PostId::from(id),
            author: UserId::from(author),
            description: description.into(),
            image_url: Url::parse("https://cdn.murmur.social/p/img.jpg").unwrap(),
            created_at: Utc.with_ymd_and_hms(2020, 6, 22, 9, 0, 0).unwrap(),
        }
    }

    fn store() -> PostStore {
        PostStore::new(
            [
                record("p1", "u1", "Sunrise over the bay"),
                record("p2", "u2", "Lunch break"),
                record("p3", "u1", "Night sky"),
            ],
            [(UserId::from("u2"), PostId::from("p1"))],
            UserId::from("u1"),
        )
    }

    #[test]
    fn post_lookup_and_derived_fields() {
        let store = store();
        let post = store.post(&PostId::from("p1")).unwrap();
        assert_eq!(post.like_count, 1);
        assert!(!post.viewer_likes); // u2 liked it, not the viewer
        assert!(store.post(&PostId::from("nope")).is_none());
    }

    #[test]
    fn posts_by_author_in_record_order() {
        let store = store();
        let ids: Vec<_> = store
            .posts_by(&UserId::from("u1"))
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, [PostId::from("p1"), PostId::from("p3")]);
        assert!(store.posts_by(&UserId::from("ghost")).is_empty());
    }

    #[test]
    fn find_posts_is_case_insensitive() {
        let store = store();
        let ids: Vec<_> = store
            .find_posts("NIGHT")
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, [PostId::from("p3")]);
        assert!(store.find_posts("nothing here").is_empty());
    }

    #[test]
    fn like_rejects_unknown_post_and_leaves_relation_alone() {
        let mut store = store();
        let err = store.like(&PostId::from("ghost")).unwrap_err();
        assert_eq!(
            err,
            StoreError::PostNotFound {
                id: PostId::from("ghost")
            }
        );
        assert_eq!(store.post(&PostId::from("p1")).unwrap().like_count, 1);
    }

    #[test]
    fn like_twice_counts_once() {
        let mut store = store();
        let id = PostId::from("p2");
        store.like(&id).unwrap();
        store.like(&id).unwrap();

        let post = store.post(&id).unwrap();
        assert!(post.viewer_likes);
        assert_eq!(post.like_count, 1);
    }

    #[test]
    fn like_then_unlike_round_trips() {
        let mut store = store();
        let id = PostId::from("p2");
        store.like(&id).unwrap();
        store.unlike(&id).unwrap();

        let post = store.post(&id).unwrap();
        assert!(!post.viewer_likes);
        assert_eq!(post.like_count, 0);
    }

    #[test]
    fn liked_by_lists_users_in_like_order() {
        let mut store = store();
        store.like(&PostId::from("p1")).unwrap();

        assert_eq!(
            store.liked_by(&PostId::from("p1")).unwrap(),
            [UserId::from("u2"), UserId::from("u1")]
        );
        assert!(store.liked_by(&PostId::from("ghost")).is_none());
        assert!(store.liked_by(&PostId::from("p3")).unwrap().is_empty());
    }
}
