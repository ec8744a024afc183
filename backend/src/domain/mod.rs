//! Domain primitives, aggregates and services.
//!
//! Purpose: define the community entities (worksheets, postings, comments and
//! their association rows) and the services that validate references before
//! delegating to the persistence ports. Nothing here knows about HTTP or SQL.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure with trace capture.
//! - Worksheet, Posting, Comment and their drafts.
//! - Association / TogglePlan / ToggleOutcome: the toggle-counter rules.
//! - WorksheetService, PostingService, CommentService: driving port
//!   implementations.

pub mod association;
pub mod comment;
pub mod comment_service;
pub mod error;
pub mod ids;
pub mod ports;
pub mod posting;
pub mod posting_service;
pub mod trace_id;
pub mod user;
pub mod worksheet;
pub mod worksheet_service;

mod lookup;

pub use self::association::{Association, AssociationChange, ToggleOutcome, TogglePlan};
pub use self::comment::{
    Comment, CommentDraft, CommentValidationError, CommentView, ReactionKind,
};
pub use self::comment_service::CommentService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::ids::{CommentId, PostingId, UserId, WorksheetId};
pub use self::posting::{Posting, PostingDraft, PostingValidationError};
pub use self::posting_service::PostingService;
pub use self::trace_id::TraceId;
pub use self::user::{NICKNAME_MAX, User};
pub use self::worksheet::{
    PayModifiers, TITLE_MAX, Worksheet, WorksheetDraft, WorksheetValidationError,
};
pub use self::worksheet_service::WorksheetService;
