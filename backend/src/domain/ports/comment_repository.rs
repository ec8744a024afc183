//! Port for comment persistence and per-viewer listings.

use async_trait::async_trait;

use crate::domain::{Comment, CommentDraft, CommentId, CommentView, PostingId, UserId};

use super::RepositoryError;

/// Storage for comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Fetch a comment by identifier.
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, RepositoryError>;

    /// Store a new comment with zero reaction counters.
    async fn insert(&self, draft: &CommentDraft) -> Result<Comment, RepositoryError>;

    /// Comments on a posting ordered by identifier, each annotated with the
    /// author's nickname and whether `viewer` liked or disliked it.
    async fn list_for_posting(
        &self,
        posting_id: PostingId,
        viewer: UserId,
    ) -> Result<Vec<CommentView>, RepositoryError>;
}
