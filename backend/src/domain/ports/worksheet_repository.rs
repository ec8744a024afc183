//! Port for worksheet persistence.

use async_trait::async_trait;

use crate::domain::{Worksheet, WorksheetDraft, WorksheetId};

use super::RepositoryError;

/// Storage for worksheets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorksheetRepository: Send + Sync {
    /// Fetch a worksheet by identifier.
    async fn find_by_id(&self, id: WorksheetId) -> Result<Option<Worksheet>, RepositoryError>;

    /// Store a new worksheet. It starts unshared.
    async fn insert(&self, draft: &WorksheetDraft) -> Result<Worksheet, RepositoryError>;

    /// Invert the share flag in place and return its new value.
    ///
    /// The read and the write happen as one step, so concurrent shares each
    /// count as a flip. Returns `None` when no row with the id exists.
    async fn toggle_open(&self, id: WorksheetId) -> Result<Option<bool>, RepositoryError>;
}
