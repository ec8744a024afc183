//! Posting and bookmark HTTP handlers.
//!
//! ```text
//! POST /api/posting
//! GET  /api/posting
//! POST /api/posting/bookmark
//! ```

use actix_web::http::StatusCode;
use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{CreatePostingRequest, ToggleBookmarkRequest};
use crate::domain::{Error, Posting, PostingId, UserId, WorksheetId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{ApiResponse, format_timestamp};
use crate::inbound::http::schemas::{EnvelopeSchema, ErrorEnvelopeSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require_id};

/// Request payload for publishing a posting about a worksheet.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreatePostingBody {
    #[schema(example = 1)]
    pub user_id: i64,
    #[schema(example = 3)]
    pub worksheet_id: i64,
    #[schema(example = "Is my night pay right?")]
    pub title: String,
    pub content: String,
}

/// Identifier of a newly created posting.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostingIdBody {
    pub posting_id: i64,
}

/// Board entry returned by the posting list.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostingSummaryBody {
    pub posting_id: i64,
    pub title: String,
    pub content: String,
    #[schema(example = "2024-03-09 07:05:01")]
    pub created_at: String,
    pub bookmark_count: u32,
}

/// Request payload for adding or removing a bookmark.
///
/// `bookmarked: true` asks for the bookmark to exist, `false` for it to be
/// gone.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BookmarkBody {
    pub user_id: i64,
    /// Posting to bookmark.
    pub post_id: i64,
    pub bookmarked: bool,
}

/// Bookmark counter after a toggle.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookmarkCountBody {
    pub bookmark_count: u32,
}

impl From<Posting> for PostingSummaryBody {
    fn from(value: Posting) -> Self {
        Self {
            posting_id: value.id().get(),
            title: value.title().to_owned(),
            content: value.content().to_owned(),
            created_at: format_timestamp(value.created_at()),
            bookmark_count: value.bookmark_count(),
        }
    }
}

fn parse_create_request(body: CreatePostingBody) -> Result<CreatePostingRequest, Error> {
    Ok(CreatePostingRequest {
        user_id: UserId::new(require_id(body.user_id, FieldName::new("user_id"))?),
        worksheet_id: WorksheetId::new(require_id(
            body.worksheet_id,
            FieldName::new("worksheet_id"),
        )?),
        title: body.title,
        content: body.content,
    })
}

fn parse_bookmark_request(body: BookmarkBody) -> Result<ToggleBookmarkRequest, Error> {
    Ok(ToggleBookmarkRequest {
        user_id: UserId::new(require_id(body.user_id, FieldName::new("user_id"))?),
        posting_id: PostingId::new(require_id(body.post_id, FieldName::new("post_id"))?),
        bookmarked: body.bookmarked,
    })
}

/// Publish a posting that references an existing worksheet.
#[utoipa::path(
    post,
    path = "/api/posting",
    request_body = CreatePostingBody,
    responses(
        (status = 201, description = "Posting created", body = EnvelopeSchema<PostingIdBody>),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 404, description = "User or worksheet not found", body = ErrorEnvelopeSchema),
        (status = 503, description = "Store unavailable", body = ErrorEnvelopeSchema)
    ),
    tags = ["postings"],
    operation_id = "createPosting"
)]
#[post("/posting")]
pub async fn create_posting(
    state: web::Data<HttpState>,
    payload: web::Json<CreatePostingBody>,
) -> ApiResult<ApiResponse<PostingIdBody>> {
    let request = parse_create_request(payload.into_inner())?;
    let response = state.postings.create(request).await?;
    Ok(ApiResponse::created(
        "posting created",
        PostingIdBody {
            posting_id: response.posting_id.get(),
        },
    ))
}

/// List every posting on the board.
///
/// An empty board is reported as not found.
#[utoipa::path(
    get,
    path = "/api/posting",
    responses(
        (status = 200, description = "Postings listed", body = EnvelopeSchema<Vec<PostingSummaryBody>>),
        (status = 404, description = "No postings exist", body = ErrorEnvelopeSchema)
    ),
    tags = ["postings"],
    operation_id = "listPostings"
)]
#[get("/posting")]
pub async fn list_postings(
    state: web::Data<HttpState>,
) -> ApiResult<ApiResponse<Vec<PostingSummaryBody>>> {
    let postings = state.postings_query.list().await?;
    let body = postings.into_iter().map(PostingSummaryBody::from).collect();
    Ok(ApiResponse::ok("postings listed", body))
}

/// Add or remove a bookmark and return the posting's bookmark counter.
#[utoipa::path(
    post,
    path = "/api/posting/bookmark",
    request_body = BookmarkBody,
    responses(
        (status = 201, description = "Bookmark added", body = EnvelopeSchema<BookmarkCountBody>),
        (status = 200, description = "Bookmark removed", body = EnvelopeSchema<BookmarkCountBody>),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 404, description = "User, posting or bookmark not found", body = ErrorEnvelopeSchema),
        (status = 409, description = "Bookmark already exists", body = ErrorEnvelopeSchema)
    ),
    tags = ["postings"],
    operation_id = "toggleBookmark"
)]
#[post("/posting/bookmark")]
pub async fn toggle_bookmark(
    state: web::Data<HttpState>,
    payload: web::Json<BookmarkBody>,
) -> ApiResult<ApiResponse<BookmarkCountBody>> {
    let request = parse_bookmark_request(payload.into_inner())?;
    let response = state.postings.toggle_bookmark(request).await?;
    let (status, message) = if response.created {
        (StatusCode::CREATED, "bookmark added")
    } else {
        (StatusCode::OK, "bookmark removed")
    };
    Ok(ApiResponse::new(
        status,
        message,
        Some(BookmarkCountBody {
            bookmark_count: response.bookmark_count,
        }),
    ))
}

#[cfg(test)]
#[path = "postings_tests.rs"]
mod tests;
