//! Posting domain service.
//!
//! Creation validates the author and then the worksheet, in that order, and
//! writes nothing when either is missing. Bookmark toggles validate the user
//! and the posting before handing the atomic toggle to the bookmark port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::lookup::{
    map_repository_error, require_posting, require_user, require_worksheet,
};
use crate::domain::ports::{
    BookmarkRepository, CreatePostingRequest, CreatePostingResponse, PostingCommand,
    PostingQuery, PostingRepository, ToggleBookmarkRequest, ToggleBookmarkResponse,
    UserRepository, WorksheetRepository,
};
use crate::domain::{Association, Error, Posting, PostingDraft};

/// Posting service implementing [`PostingCommand`] and [`PostingQuery`].
#[derive(Clone)]
pub struct PostingService<U, W, P, B> {
    users: Arc<U>,
    worksheets: Arc<W>,
    postings: Arc<P>,
    bookmarks: Arc<B>,
}

impl<U, W, P, B> PostingService<U, W, P, B> {
    pub fn new(users: Arc<U>, worksheets: Arc<W>, postings: Arc<P>, bookmarks: Arc<B>) -> Self {
        Self {
            users,
            worksheets,
            postings,
            bookmarks,
        }
    }
}

#[async_trait]
impl<U, W, P, B> PostingCommand for PostingService<U, W, P, B>
where
    U: UserRepository,
    W: WorksheetRepository,
    P: PostingRepository,
    B: BookmarkRepository,
{
    async fn create(&self, request: CreatePostingRequest) -> Result<CreatePostingResponse, Error> {
        let draft = PostingDraft::new(
            request.user_id,
            request.worksheet_id,
            request.title,
            request.content,
        )
        .map_err(|err| Error::invalid_request(format!("invalid posting: {err}")))?;

        require_user(self.users.as_ref(), draft.user_id()).await?;
        require_worksheet(self.worksheets.as_ref(), draft.worksheet_id()).await?;

        let posting = self
            .postings
            .insert(&draft)
            .await
            .map_err(map_repository_error)?;
        debug!(posting_id = %posting.id(), worksheet_id = %posting.worksheet_id(), "posting created");

        Ok(CreatePostingResponse {
            posting_id: posting.id(),
        })
    }

    async fn toggle_bookmark(
        &self,
        request: ToggleBookmarkRequest,
    ) -> Result<ToggleBookmarkResponse, Error> {
        let ToggleBookmarkRequest {
            user_id,
            posting_id,
            bookmarked,
        } = request;
        require_user(self.users.as_ref(), user_id).await?;
        require_posting(self.postings.as_ref(), posting_id).await?;

        let outcome = self
            .bookmarks
            .toggle(user_id, posting_id, bookmarked)
            .await
            .map_err(map_repository_error)?;
        debug!(%user_id, %posting_id, bookmarked, ?outcome, "bookmark toggle resolved");

        let change = outcome.resolve(Association::Bookmark, format!("posting {posting_id}"))?;
        Ok(ToggleBookmarkResponse {
            created: change.created,
            bookmark_count: change.count,
        })
    }
}

#[async_trait]
impl<U, W, P, B> PostingQuery for PostingService<U, W, P, B>
where
    U: UserRepository,
    W: WorksheetRepository,
    P: PostingRepository,
    B: BookmarkRepository,
{
    async fn list(&self) -> Result<Vec<Posting>, Error> {
        let postings = self
            .postings
            .list_all()
            .await
            .map_err(map_repository_error)?;
        if postings.is_empty() {
            return Err(Error::not_found("no postings found"));
        }
        Ok(postings)
    }
}

#[cfg(test)]
#[path = "posting_service_tests.rs"]
mod tests;
