//! Port for posting persistence.

use async_trait::async_trait;

use crate::domain::{Posting, PostingDraft, PostingId};

use super::RepositoryError;

/// Storage for postings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostingRepository: Send + Sync {
    /// Fetch a posting by identifier.
    async fn find_by_id(&self, id: PostingId) -> Result<Option<Posting>, RepositoryError>;

    /// Every posting ordered by identifier.
    async fn list_all(&self) -> Result<Vec<Posting>, RepositoryError>;

    /// Store a new posting with a zero bookmark counter.
    async fn insert(&self, draft: &PostingDraft) -> Result<Posting, RepositoryError>;
}
