//! Driving ports for comments and their reactions.

use async_trait::async_trait;

use crate::domain::{CommentId, CommentView, Error, PostingId, ReactionKind, UserId};

/// Request to comment on a posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCommentRequest {
    pub user_id: UserId,
    pub posting_id: PostingId,
    pub content: String,
}

/// Identifier of the newly created comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateCommentResponse {
    pub comment_id: CommentId,
}

/// Request to bring a like or dislike to the `desired` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleReactionRequest {
    pub user_id: UserId,
    pub comment_id: CommentId,
    pub kind: ReactionKind,
    pub desired: bool,
}

/// Reaction state after a successful toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleReactionResponse {
    pub created: bool,
    /// Counter for the toggled reaction kind.
    pub count: u32,
}

/// Request to list the comments on a posting for a viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommentsRequest {
    pub user_id: UserId,
    pub posting_id: PostingId,
}

/// Driving port for comment write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentCommand: Send + Sync {
    /// Create a comment after confirming the author and posting exist.
    async fn create(&self, request: CreateCommentRequest) -> Result<CreateCommentResponse, Error>;

    /// Create or remove a like or dislike and move the matching counter.
    async fn toggle_reaction(
        &self,
        request: ToggleReactionRequest,
    ) -> Result<ToggleReactionResponse, Error>;
}

/// Driving port for comment reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentQuery: Send + Sync {
    /// Comments on a posting as seen by the requesting member.
    async fn list(&self, request: ListCommentsRequest) -> Result<Vec<CommentView>, Error>;
}
