// ── User store ──
//
// Owns the user record set and the follows relation. Every read
// assembles a fresh viewer-relative snapshot; records never carry
// derived state.

use indexmap::IndexMap;
use tracing::debug;

use super::relation::RelationTable;
use crate::error::StoreError;
use crate::model::{User, UserId, UserRecord};

/// In-memory user store bound to a fixed current viewer.
///
/// Follow pairs read as (follower, followee). Mutations go through
/// `&mut self`, so exclusive access is the one-writer guarantee.
#[derive(Debug)]
pub struct UserStore {
    records: IndexMap<UserId, UserRecord>,
    follows: RelationTable<UserId, UserId>,
    viewer: UserId,
}

impl UserStore {
    /// Build a store from raw records, an initial (follower, followee)
    /// pair list, and the acting viewer.
    ///
    /// Fails when `viewer` has no record -- every derived view depends
    /// on it. Duplicate pairs in the initial list are dropped.
    pub fn new(
        records: impl IntoIterator<Item = UserRecord>,
        follows: impl IntoIterator<Item = (UserId, UserId)>,
        viewer: UserId,
    ) -> Result<Self, StoreError> {
        let records: IndexMap<_, _> = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        if !records.contains_key(&viewer) {
            return Err(StoreError::UnknownViewer { id: viewer });
        }

        let follows = RelationTable::from_pairs(follows);
        debug!(
            viewer = %viewer,
            users = records.len(),
            follow_pairs = follows.len(),
            "user store ready"
        );

        Ok(Self {
            records,
            follows,
            viewer,
        })
    }

    /// The acting viewer's id.
    pub fn viewer(&self) -> &UserId {
        &self.viewer
    }

    /// Number of user records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Snapshot of the acting viewer.
    pub fn current_user(&self) -> User {
        match self.user(&self.viewer) {
            Some(user) => user,
            // Construction rejects a viewer without a record, and the
            // record set is immutable afterwards.
            None => unreachable!("viewer record missing from immutable record set"),
        }
    }

    /// Snapshot of the user with the given id, or `None` when no such
    /// record exists.
    pub fn user(&self, id: &UserId) -> Option<User> {
        self.records.get(id).map(|record| self.snapshot(record))
    }

    /// Case-insensitive substring search against username or full
    /// name, in record order.
    pub fn find_users(&self, query: &str) -> Vec<User> {
        let needle = query.to_lowercase();
        self.records
            .values()
            .filter(|record| {
                record.username.to_lowercase().contains(&needle)
                    || record.full_name.to_lowercase().contains(&needle)
            })
            .map(|record| self.snapshot(record))
            .collect()
    }

    /// Record that the viewer follows `target`.
    ///
    /// Rejects unknown targets and leaves the relation untouched.
    /// Following an already-followed user is accepted and changes
    /// nothing.
    pub fn follow(&mut self, target: &UserId) -> Result<(), StoreError> {
        self.check_exists(target)?;
        if self.follows.insert(self.viewer.clone(), target.clone()) {
            debug!(viewer = %self.viewer, target = %target, "follow");
        }
        Ok(())
    }

    /// Remove the viewer's follow of `target`. Same acceptance rules
    /// as [`follow`](Self::follow).
    pub fn unfollow(&mut self, target: &UserId) -> Result<(), StoreError> {
        self.check_exists(target)?;
        if self.follows.remove(&self.viewer, target) {
            debug!(viewer = %self.viewer, target = %target, "unfollow");
        }
        Ok(())
    }

    /// Snapshots of the users following `id`, or `None` when `id` has
    /// no record.
    pub fn followers(&self, id: &UserId) -> Option<Vec<User>> {
        if !self.records.contains_key(id) {
            return None;
        }
        Some(
            self.follows
                .lefts_for(id)
                .filter_map(|follower| self.user(follower))
                .collect(),
        )
    }

    /// Snapshots of the users `id` follows, or `None` when `id` has no
    /// record.
    pub fn following(&self, id: &UserId) -> Option<Vec<User>> {
        if !self.records.contains_key(id) {
            return None;
        }
        Some(
            self.follows
                .rights_for(id)
                .filter_map(|followee| self.user(followee))
                .collect(),
        )
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn check_exists(&self, id: &UserId) -> Result<(), StoreError> {
        if self.records.contains_key(id) {
            Ok(())
        } else {
            Err(StoreError::UserNotFound { id: id.clone() })
        }
    }

    fn snapshot(&self, record: &UserRecord) -> User {
        User {
            id: record.id.clone(),
            username: record.username.clone(),
            full_name: record.full_name.clone(),
            avatar_url: record.avatar_url.clone(),
            viewer_follows: self.follows.contains(&self.viewer, &record.id),
            follows_viewer: self.follows.contains(&record.id, &self.viewer),
            follows_count: self.follows.count_left(&record.id),
            followers_count: self.follows.count_right(&record.id),
        }
    }
}
