//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod bookmark_repository;
mod comment_command;
mod comment_reaction_repository;
mod comment_repository;
mod posting_command;
mod posting_repository;
mod repository_error;
mod user_repository;
mod worksheet_command;
mod worksheet_repository;

pub use bookmark_repository::BookmarkRepository;
#[cfg(test)]
pub use bookmark_repository::MockBookmarkRepository;
#[cfg(test)]
pub use comment_command::{MockCommentCommand, MockCommentQuery};
pub use comment_command::{
    CommentCommand, CommentQuery, CreateCommentRequest, CreateCommentResponse,
    ListCommentsRequest, ToggleReactionRequest, ToggleReactionResponse,
};
pub use comment_reaction_repository::CommentReactionRepository;
#[cfg(test)]
pub use comment_reaction_repository::MockCommentReactionRepository;
pub use comment_repository::CommentRepository;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use posting_command::{MockPostingCommand, MockPostingQuery};
pub use posting_command::{
    CreatePostingRequest, CreatePostingResponse, PostingCommand, PostingQuery,
    ToggleBookmarkRequest, ToggleBookmarkResponse,
};
#[cfg(test)]
pub use posting_repository::MockPostingRepository;
pub use posting_repository::PostingRepository;
pub use repository_error::RepositoryError;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
#[cfg(test)]
pub use worksheet_command::{MockWorksheetCommand, MockWorksheetQuery};
pub use worksheet_command::{
    RegisterWorksheetRequest, RegisterWorksheetResponse, ShareWorksheetResponse,
    WorksheetCommand, WorksheetQuery,
};
#[cfg(test)]
pub use worksheet_repository::MockWorksheetRepository;
pub use worksheet_repository::WorksheetRepository;
