//! Toggle semantics for association rows that carry a counter.
//!
//! Bookmarks, comment likes and comment dislikes all follow the same rule:
//! the caller states whether the association should exist, the store either
//! writes the row and moves the counter by one, or rejects the request
//! without touching anything. Adapters decide with [`TogglePlan::decide`] and
//! report back a [`ToggleOutcome`], which services resolve into a domain
//! result with [`ToggleOutcome::resolve`].

use std::fmt;

use crate::domain::Error;

/// Association kinds that toggle a counter on their target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Association {
    Bookmark,
    Like,
    Dislike,
}

impl Association {
    /// Lower-case noun used in messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bookmark => "bookmark",
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

impl fmt::Display for Association {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Write a store must perform for a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TogglePlan {
    /// Insert the row and increment the counter.
    Insert,
    /// Delete the row and decrement the counter.
    Delete,
    /// The row exists and the caller asked to create it.
    RejectExisting,
    /// The row is absent and the caller asked to remove it.
    RejectMissing,
}

impl TogglePlan {
    /// Decide the write from the current row state and the desired state.
    ///
    /// # Examples
    /// ```
    /// use yourside::domain::TogglePlan;
    ///
    /// assert_eq!(TogglePlan::decide(false, true), TogglePlan::Insert);
    /// assert_eq!(TogglePlan::decide(true, true), TogglePlan::RejectExisting);
    /// ```
    pub const fn decide(exists: bool, desired: bool) -> Self {
        match (exists, desired) {
            (false, true) => Self::Insert,
            (true, false) => Self::Delete,
            (true, true) => Self::RejectExisting,
            (false, false) => Self::RejectMissing,
        }
    }

    /// Counter value after applying the plan. Rejections leave it unchanged.
    pub const fn apply(self, count: u32) -> u32 {
        match self {
            Self::Insert => count.saturating_add(1),
            Self::Delete => count.saturating_sub(1),
            Self::RejectExisting | Self::RejectMissing => count,
        }
    }

    /// Outcome reported after the plan ran against a counter.
    pub const fn outcome(self, count: u32) -> ToggleOutcome {
        match self {
            Self::Insert => ToggleOutcome::Associated { count },
            Self::Delete => ToggleOutcome::Dissociated { count },
            Self::RejectExisting => ToggleOutcome::AlreadyAssociated,
            Self::RejectMissing => ToggleOutcome::NotAssociated,
        }
    }
}

/// Result of an atomic toggle reported by a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The row was inserted; `count` is the updated counter.
    Associated { count: u32 },
    /// The row was deleted; `count` is the updated counter.
    Dissociated { count: u32 },
    /// Creation was requested but the row already existed.
    AlreadyAssociated,
    /// Removal was requested but no row existed.
    NotAssociated,
    /// The target vanished before the toggle could lock it.
    TargetMissing,
}

/// Successful toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssociationChange {
    /// `true` when the association was created, `false` when removed.
    pub created: bool,
    /// Counter on the target after the change.
    pub count: u32,
}

impl ToggleOutcome {
    /// Map the outcome onto a domain result.
    ///
    /// `target` names the entity the association points at and is only used
    /// when the target has disappeared.
    pub fn resolve(
        self,
        association: Association,
        target: impl fmt::Display,
    ) -> Result<AssociationChange, Error> {
        match self {
            Self::Associated { count } => Ok(AssociationChange {
                created: true,
                count,
            }),
            Self::Dissociated { count } => Ok(AssociationChange {
                created: false,
                count,
            }),
            Self::AlreadyAssociated => Err(Error::conflict(format!(
                "{association} already exists"
            ))),
            Self::NotAssociated => Err(Error::not_found(format!("{association} not found"))),
            Self::TargetMissing => Err(Error::not_found(format!("{target} not found"))),
        }
    }
}
