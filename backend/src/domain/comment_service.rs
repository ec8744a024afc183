//! Comment domain service.
//!
//! Comments reference a posting; likes and dislikes reference a comment.
//! Every operation resolves the acting user first and the target second.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::lookup::{
    map_repository_error, require_comment, require_posting, require_user,
};
use crate::domain::ports::{
    CommentCommand, CommentQuery, CommentReactionRepository, CommentRepository,
    CreateCommentRequest, CreateCommentResponse, ListCommentsRequest, PostingRepository,
    ToggleReactionRequest, ToggleReactionResponse, UserRepository,
};
use crate::domain::{Association, CommentDraft, CommentView, Error, ReactionKind};

fn association_for(kind: ReactionKind) -> Association {
    match kind {
        ReactionKind::Like => Association::Like,
        ReactionKind::Dislike => Association::Dislike,
    }
}

/// Comment service implementing [`CommentCommand`] and [`CommentQuery`].
#[derive(Clone)]
pub struct CommentService<U, P, C, R> {
    users: Arc<U>,
    postings: Arc<P>,
    comments: Arc<C>,
    reactions: Arc<R>,
}

impl<U, P, C, R> CommentService<U, P, C, R> {
    pub fn new(users: Arc<U>, postings: Arc<P>, comments: Arc<C>, reactions: Arc<R>) -> Self {
        Self {
            users,
            postings,
            comments,
            reactions,
        }
    }
}

#[async_trait]
impl<U, P, C, R> CommentCommand for CommentService<U, P, C, R>
where
    U: UserRepository,
    P: PostingRepository,
    C: CommentRepository,
    R: CommentReactionRepository,
{
    async fn create(&self, request: CreateCommentRequest) -> Result<CreateCommentResponse, Error> {
        let draft = CommentDraft::new(request.user_id, request.posting_id, request.content)
            .map_err(|err| Error::invalid_request(format!("invalid comment: {err}")))?;

        require_user(self.users.as_ref(), draft.user_id()).await?;
        require_posting(self.postings.as_ref(), draft.posting_id()).await?;

        let comment = self
            .comments
            .insert(&draft)
            .await
            .map_err(map_repository_error)?;
        debug!(comment_id = %comment.id(), posting_id = %comment.posting_id(), "comment created");

        Ok(CreateCommentResponse {
            comment_id: comment.id(),
        })
    }

    async fn toggle_reaction(
        &self,
        request: ToggleReactionRequest,
    ) -> Result<ToggleReactionResponse, Error> {
        let ToggleReactionRequest {
            user_id,
            comment_id,
            kind,
            desired,
        } = request;
        require_user(self.users.as_ref(), user_id).await?;
        require_comment(self.comments.as_ref(), comment_id).await?;

        let outcome = self
            .reactions
            .toggle(user_id, comment_id, kind, desired)
            .await
            .map_err(map_repository_error)?;
        debug!(%user_id, %comment_id, %kind, desired, ?outcome, "reaction toggle resolved");

        let change = outcome.resolve(association_for(kind), format!("comment {comment_id}"))?;
        Ok(ToggleReactionResponse {
            created: change.created,
            count: change.count,
        })
    }
}

#[async_trait]
impl<U, P, C, R> CommentQuery for CommentService<U, P, C, R>
where
    U: UserRepository,
    P: PostingRepository,
    C: CommentRepository,
    R: CommentReactionRepository,
{
    async fn list(&self, request: ListCommentsRequest) -> Result<Vec<CommentView>, Error> {
        require_user(self.users.as_ref(), request.user_id).await?;
        require_posting(self.postings.as_ref(), request.posting_id).await?;

        self.comments
            .list_for_posting(request.posting_id, request.user_id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "comment_service_tests.rs"]
mod tests;
