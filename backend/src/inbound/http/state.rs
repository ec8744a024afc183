//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    BookmarkRepository, CommentCommand, CommentQuery, CommentReactionRepository,
    CommentRepository, PostingCommand, PostingQuery, PostingRepository, UserRepository,
    WorksheetCommand, WorksheetQuery, WorksheetRepository,
};
use crate::domain::{CommentService, PostingService, WorksheetService};

/// Parameter object bundling one adapter per repository port.
pub struct RepositoryPorts<U, W, P, B, C, R> {
    pub users: Arc<U>,
    pub worksheets: Arc<W>,
    pub postings: Arc<P>,
    pub bookmarks: Arc<B>,
    pub comments: Arc<C>,
    pub reactions: Arc<R>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub worksheets: Arc<dyn WorksheetCommand>,
    pub worksheets_query: Arc<dyn WorksheetQuery>,
    pub postings: Arc<dyn PostingCommand>,
    pub postings_query: Arc<dyn PostingQuery>,
    pub comments: Arc<dyn CommentCommand>,
    pub comments_query: Arc<dyn CommentQuery>,
}

impl HttpState {
    /// Build state from services that implement both halves of each
    /// command/query pair.
    pub fn from_services<W, P, C>(worksheets: Arc<W>, postings: Arc<P>, comments: Arc<C>) -> Self
    where
        W: WorksheetCommand + WorksheetQuery + 'static,
        P: PostingCommand + PostingQuery + 'static,
        C: CommentCommand + CommentQuery + 'static,
    {
        Self {
            worksheets: worksheets.clone(),
            worksheets_query: worksheets,
            postings: postings.clone(),
            postings_query: postings,
            comments: comments.clone(),
            comments_query: comments,
        }
    }

    /// Wire the domain services over a set of repository adapters.
    pub fn from_repositories<U, W, P, B, C, R>(ports: RepositoryPorts<U, W, P, B, C, R>) -> Self
    where
        U: UserRepository + 'static,
        W: WorksheetRepository + 'static,
        P: PostingRepository + 'static,
        B: BookmarkRepository + 'static,
        C: CommentRepository + 'static,
        R: CommentReactionRepository + 'static,
    {
        let RepositoryPorts {
            users,
            worksheets,
            postings,
            bookmarks,
            comments,
            reactions,
        } = ports;

        let worksheet_service = WorksheetService::new(users.clone(), worksheets.clone());
        let posting_service =
            PostingService::new(users.clone(), worksheets, postings.clone(), bookmarks);
        let comment_service = CommentService::new(users, postings, comments, reactions);

        Self::from_services(
            Arc::new(worksheet_service),
            Arc::new(posting_service),
            Arc::new(comment_service),
        )
    }
}
