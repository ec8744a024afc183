//! Posting data model.
//!
//! Postings are community posts that reference the worksheet they discuss.
//! Each posting carries a denormalised bookmark counter which must equal the
//! number of live bookmark rows pointing at it.

use chrono::{DateTime, Utc};

use crate::domain::{PostingId, TITLE_MAX, UserId, WorksheetId};

/// Validation errors returned by [`PostingDraft::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostingValidationError {
    #[error("title must not be blank")]
    BlankTitle,
    #[error("title must be at most {max} characters")]
    TitleTooLong { max: usize },
    #[error("content must not be blank")]
    BlankContent,
}

/// Validated input for a posting that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostingDraft {
    user_id: UserId,
    worksheet_id: WorksheetId,
    title: String,
    content: String,
}

impl PostingDraft {
    pub fn new(
        user_id: UserId,
        worksheet_id: WorksheetId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, PostingValidationError> {
        let title = title.into();
        let content = content.into();
        if title.trim().is_empty() {
            return Err(PostingValidationError::BlankTitle);
        }
        if title.chars().count() > TITLE_MAX {
            return Err(PostingValidationError::TitleTooLong { max: TITLE_MAX });
        }
        if content.trim().is_empty() {
            return Err(PostingValidationError::BlankContent);
        }
        Ok(Self {
            user_id,
            worksheet_id,
            title,
            content,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn worksheet_id(&self) -> WorksheetId {
        self.worksheet_id
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn content(&self) -> &str {
        self.content.as_str()
    }
}

/// Stored posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    id: PostingId,
    draft: PostingDraft,
    bookmark_count: u32,
    created_at: DateTime<Utc>,
}

impl Posting {
    pub fn new(
        id: PostingId,
        draft: PostingDraft,
        bookmark_count: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            draft,
            bookmark_count,
            created_at,
        }
    }

    pub fn id(&self) -> PostingId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.draft.user_id
    }

    pub fn worksheet_id(&self) -> WorksheetId {
        self.draft.worksheet_id
    }

    pub fn title(&self) -> &str {
        self.draft.title()
    }

    pub fn content(&self) -> &str {
        self.draft.content()
    }

    /// Number of members who bookmarked the posting.
    pub fn bookmark_count(&self) -> u32 {
        self.bookmark_count
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
