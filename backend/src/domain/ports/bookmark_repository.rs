//! Port for the bookmark toggle.
//!
//! Adapters must check the bookmark row, write or delete it, and move the
//! posting's `bookmark_count` as one atomic unit. Callers validate the user
//! and posting beforehand; a posting deleted in between is reported as
//! [`ToggleOutcome::TargetMissing`].

use async_trait::async_trait;

use crate::domain::{PostingId, ToggleOutcome, UserId};

use super::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Bring the (user, posting) bookmark to the `bookmarked` state.
    async fn toggle(
        &self,
        user_id: UserId,
        posting_id: PostingId,
        bookmarked: bool,
    ) -> Result<ToggleOutcome, RepositoryError>;
}
