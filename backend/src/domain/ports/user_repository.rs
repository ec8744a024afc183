//! Port abstraction for reading community members.
use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::RepositoryError;

/// Read access to users. Registration happens elsewhere.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;
}
