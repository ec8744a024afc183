//! Port for the comment like and dislike toggles.
//!
//! Same contract as the bookmark toggle: the reaction row and the matching
//! counter on the comment change together or not at all. Likes and dislikes
//! are tracked independently.

use async_trait::async_trait;

use crate::domain::{CommentId, ReactionKind, ToggleOutcome, UserId};

use super::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentReactionRepository: Send + Sync {
    /// Bring the (user, comment, kind) reaction to the `desired` state.
    async fn toggle(
        &self,
        user_id: UserId,
        comment_id: CommentId,
        kind: ReactionKind,
        desired: bool,
    ) -> Result<ToggleOutcome, RepositoryError>;
}
