//! Community member referenced by worksheets, postings, comments and
//! association rows.
//!
//! Users are created outside this service; the backend only reads them.

use crate::domain::UserId;

/// Maximum nickname length, in characters.
pub const NICKNAME_MAX: usize = 64;

/// Application user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    nickname: String,
}

impl User {
    /// Build a user from stored values.
    pub fn new(id: UserId, nickname: impl Into<String>) -> Self {
        Self {
            id,
            nickname: nickname.into(),
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Name shown next to the user's comments.
    pub fn nickname(&self) -> &str {
        self.nickname.as_str()
    }
}
