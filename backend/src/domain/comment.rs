//! Comment data model.
//!
//! Comments hang off postings. Members may like and dislike a comment; both
//! reactions are independent associations with their own counters on the
//! comment row.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::domain::{CommentId, PostingId, UserId};

/// Validation errors returned by [`CommentDraft::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommentValidationError {
    #[error("content must not be blank")]
    BlankContent,
}

/// Reaction a member can attach to a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    /// Value stored in the `kind` column.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }

    /// Parse the stored column value.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "like" => Some(Self::Like),
            "dislike" => Some(Self::Dislike),
            _ => None,
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated input for a comment that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    user_id: UserId,
    posting_id: PostingId,
    content: String,
}

impl CommentDraft {
    pub fn new(
        user_id: UserId,
        posting_id: PostingId,
        content: impl Into<String>,
    ) -> Result<Self, CommentValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(CommentValidationError::BlankContent);
        }
        Ok(Self {
            user_id,
            posting_id,
            content,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn posting_id(&self) -> PostingId {
        self.posting_id
    }

    pub fn content(&self) -> &str {
        self.content.as_str()
    }
}

/// Stored comment with its reaction counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    id: CommentId,
    draft: CommentDraft,
    like_count: u32,
    dislike_count: u32,
    created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(
        id: CommentId,
        draft: CommentDraft,
        like_count: u32,
        dislike_count: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            draft,
            like_count,
            dislike_count,
            created_at,
        }
    }

    pub fn id(&self) -> CommentId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.draft.user_id
    }

    pub fn posting_id(&self) -> PostingId {
        self.draft.posting_id
    }

    pub fn content(&self) -> &str {
        self.draft.content()
    }

    pub fn like_count(&self) -> u32 {
        self.like_count
    }

    pub fn dislike_count(&self) -> u32 {
        self.dislike_count
    }

    /// Counter tracking reactions of the given kind.
    pub fn reaction_count(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::Like => self.like_count,
            ReactionKind::Dislike => self.dislike_count,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Comment as seen by a particular member.
///
/// `liked` and `disliked` report whether the viewing member currently holds
/// that reaction on the comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub comment: Comment,
    pub nickname: String,
    pub liked: bool,
    pub disliked: bool,
}
