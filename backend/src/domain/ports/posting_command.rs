//! Driving ports for postings and their bookmarks.

use async_trait::async_trait;

use crate::domain::{Error, Posting, PostingId, UserId, WorksheetId};

/// Request to publish a posting about a worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePostingRequest {
    pub user_id: UserId,
    pub worksheet_id: WorksheetId,
    pub title: String,
    pub content: String,
}

/// Identifier of the newly created posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatePostingResponse {
    pub posting_id: PostingId,
}

/// Request to bring a bookmark to the `bookmarked` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleBookmarkRequest {
    pub user_id: UserId,
    pub posting_id: PostingId,
    pub bookmarked: bool,
}

/// Bookmark state after a successful toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleBookmarkResponse {
    /// `true` when a bookmark was created, `false` when one was removed.
    pub created: bool,
    pub bookmark_count: u32,
}

/// Driving port for posting write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostingCommand: Send + Sync {
    /// Create a posting after confirming the author and worksheet exist.
    async fn create(&self, request: CreatePostingRequest) -> Result<CreatePostingResponse, Error>;

    /// Create or remove a bookmark and move the posting's counter.
    async fn toggle_bookmark(
        &self,
        request: ToggleBookmarkRequest,
    ) -> Result<ToggleBookmarkResponse, Error>;
}

/// Driving port for posting reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostingQuery: Send + Sync {
    /// Every posting. An empty board is reported as not-found.
    async fn list(&self) -> Result<Vec<Posting>, Error>;
}
