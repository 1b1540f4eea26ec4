// ── Core error types ──
//
// Every failure in this crate is a value. Rejected mutations and the
// single fallible construction carry the offending identifier so
// consumers can report it without re-deriving context.

use thiserror::Error;

use crate::model::{PostId, UserId};

/// Error type shared by both stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The designated current viewer has no record in the supplied set.
    /// The only condition that prevents a store from being built.
    #[error("Current viewer {id} is not in the user record set")]
    UnknownViewer { id: UserId },

    #[error("User not found: {id}")]
    UserNotFound { id: UserId },

    #[error("Post not found: {id}")]
    PostNotFound { id: PostId },
}
