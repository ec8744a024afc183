//! Worksheet data model.
//!
//! A worksheet records the hours and pay a member worked out for a job,
//! along with which statutory pay modifiers applied. Owners may share a
//! worksheet, which flips its `is_open` flag.

use chrono::{DateTime, Utc};

use crate::domain::{UserId, WorksheetId};

/// Maximum title length, in characters, for worksheets and postings.
pub const TITLE_MAX: usize = 255;

/// Validation errors returned by [`WorksheetDraft::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorksheetValidationError {
    #[error("title must not be blank")]
    BlankTitle,
    #[error("title must be at most {max} characters")]
    TitleTooLong { max: usize },
    #[error("content must not be blank")]
    BlankContent,
    #[error("total_pay must not be negative, got {total_pay}")]
    NegativeTotalPay { total_pay: i64 },
}

/// Pay modifiers that applied to the recorded work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayModifiers {
    pub extra_pay: bool,
    pub week_pay: bool,
    pub night_pay: bool,
    pub overtime_pay: bool,
    pub holiday_pay: bool,
}

/// Validated input for a worksheet that has not been stored yet.
///
/// ## Invariants
/// - `title` and `content` are non-empty once trimmed.
/// - `title` holds at most [`TITLE_MAX`] characters.
/// - `total_pay` is zero or positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorksheetDraft {
    user_id: UserId,
    title: String,
    content: String,
    total_pay: i64,
    modifiers: PayModifiers,
}

impl WorksheetDraft {
    /// Validate and construct a draft.
    ///
    /// # Examples
    /// ```
    /// use yourside::domain::{PayModifiers, UserId, WorksheetDraft};
    ///
    /// let draft = WorksheetDraft::new(UserId::new(1), "A", "night shift", 10_000, PayModifiers::default())
    ///     .expect("valid draft");
    /// assert_eq!(draft.total_pay(), 10_000);
    /// ```
    pub fn new(
        user_id: UserId,
        title: impl Into<String>,
        content: impl Into<String>,
        total_pay: i64,
        modifiers: PayModifiers,
    ) -> Result<Self, WorksheetValidationError> {
        let title = title.into();
        let content = content.into();
        if title.trim().is_empty() {
            return Err(WorksheetValidationError::BlankTitle);
        }
        if title.chars().count() > TITLE_MAX {
            return Err(WorksheetValidationError::TitleTooLong { max: TITLE_MAX });
        }
        if content.trim().is_empty() {
            return Err(WorksheetValidationError::BlankContent);
        }
        if total_pay < 0 {
            return Err(WorksheetValidationError::NegativeTotalPay { total_pay });
        }
        Ok(Self {
            user_id,
            title,
            content,
            total_pay,
            modifiers,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    pub fn total_pay(&self) -> i64 {
        self.total_pay
    }

    pub fn modifiers(&self) -> PayModifiers {
        self.modifiers
    }
}

/// Stored worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worksheet {
    id: WorksheetId,
    draft: WorksheetDraft,
    is_open: bool,
    created_at: DateTime<Utc>,
}

impl Worksheet {
    /// Combine a validated draft with the values assigned by storage.
    pub fn new(
        id: WorksheetId,
        draft: WorksheetDraft,
        is_open: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            draft,
            is_open,
            created_at,
        }
    }

    pub fn id(&self) -> WorksheetId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.draft.user_id
    }

    pub fn title(&self) -> &str {
        self.draft.title()
    }

    pub fn content(&self) -> &str {
        self.draft.content()
    }

    pub fn total_pay(&self) -> i64 {
        self.draft.total_pay
    }

    pub fn modifiers(&self) -> PayModifiers {
        self.draft.modifiers
    }

    /// Whether the owner has shared the worksheet.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Flip the share flag and return its new value.
    pub fn toggle_open(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }
}
