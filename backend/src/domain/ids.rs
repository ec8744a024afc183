//! Numeric identifiers for persisted entities.
//!
//! Every table keys its rows with a `BIGSERIAL`, so identifiers are thin
//! wrappers around `i64`. Distinct types stop a posting id from being passed
//! where a worksheet id is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw database key.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Raw database key.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_entity_id! {
    /// Identifier of a community member.
    UserId
}

define_entity_id! {
    /// Identifier of a worksheet.
    WorksheetId
}

define_entity_id! {
    /// Identifier of a posting.
    PostingId
}

define_entity_id! {
    /// Identifier of a comment on a posting.
    CommentId
}
