//! In-memory domain model for the Murmur social feed.
//!
//! This crate owns the entity records, the many-to-many relations
//! between them, and the viewer-relative views that feed UIs render:
//!
//! - **[`UserStore`]** -- user records plus the follows relation.
//!   Produces [`User`] snapshots, answers search, and applies
//!   follow/unfollow for the bound viewer.
//!
//! - **[`PostStore`]** -- post records plus the likes relation.
//!   Produces [`Post`] snapshots, answers author/text search, and
//!   applies like/unlike.
//!
//! - **[`RelationTable`]** -- ordered (left, right) pair storage with
//!   set semantics, shared by both stores. Linear-scan today; the
//!   stores only touch its query interface, so the representation can
//!   change underneath them.
//!
//! - **Domain model** ([`model`]) -- raw records ([`UserRecord`],
//!   [`PostRecord`]) as supplied at construction, snapshot values
//!   computed per read, and typed identifiers ([`UserId`], [`PostId`])
//!   that never mix across entity kinds.
//!
//! Everything is synchronous and single-writer: mutations take
//! `&mut self`, reads return owned values that never alias store
//! internals.

pub mod error;
pub mod model;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::StoreError;
pub use model::{Id, Post, PostId, PostKind, PostRecord, User, UserId, UserKind, UserRecord};
pub use store::{PostStore, RelationTable, UserStore};
