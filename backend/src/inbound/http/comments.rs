//! Comment, like and dislike HTTP handlers.
//!
//! ```text
//! POST /api/comment
//! GET  /api/comment?user_id=&posting_id=
//! POST /api/comment/like
//! POST /api/comment/dislike
//! ```

use actix_web::http::StatusCode;
use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{
    CreateCommentRequest, ListCommentsRequest, ToggleReactionRequest, ToggleReactionResponse,
};
use crate::domain::{CommentId, CommentView, Error, PostingId, ReactionKind, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{ApiResponse, format_timestamp};
use crate::inbound::http::schemas::{EnvelopeSchema, ErrorEnvelopeSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require_id};

/// Request payload for commenting on a posting.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateCommentBody {
    pub user_id: i64,
    pub posting_id: i64,
    #[schema(example = "Night pay should be 1.5x")]
    pub content: String,
}

/// Identifier of a newly created comment.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CommentIdBody {
    pub comment_id: i64,
}

/// Query parameters for listing comments; `user_id` is the viewer whose
/// reactions are reported.
#[derive(Debug, Clone, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentListQuery {
    pub user_id: i64,
    pub posting_id: i64,
}

/// Comment as seen by a particular viewer.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CommentBody {
    pub id: i64,
    pub nickname: String,
    #[schema(example = "2024-03-09 07:05:01")]
    pub created_at: String,
    pub content: String,
    pub is_liked: bool,
    pub is_disliked: bool,
    pub like_count: u32,
    pub dislike_count: u32,
}

/// Request payload for adding or removing a like.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct LikeBody {
    pub user_id: i64,
    pub comment_id: i64,
    pub liked: bool,
}

/// Request payload for adding or removing a dislike.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct DislikeBody {
    pub user_id: i64,
    pub comment_id: i64,
    pub disliked: bool,
}

/// Like counter after a toggle.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LikeCountBody {
    pub like_count: u32,
}

/// Dislike counter after a toggle.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DislikeCountBody {
    pub dislike_count: u32,
}

impl From<CommentView> for CommentBody {
    fn from(value: CommentView) -> Self {
        let CommentView {
            comment,
            nickname,
            liked,
            disliked,
        } = value;
        Self {
            id: comment.id().get(),
            nickname,
            created_at: format_timestamp(comment.created_at()),
            content: comment.content().to_owned(),
            is_liked: liked,
            is_disliked: disliked,
            like_count: comment.like_count(),
            dislike_count: comment.dislike_count(),
        }
    }
}

fn parse_reaction_request(
    user_id: i64,
    comment_id: i64,
    kind: ReactionKind,
    desired: bool,
) -> Result<ToggleReactionRequest, Error> {
    Ok(ToggleReactionRequest {
        user_id: UserId::new(require_id(user_id, FieldName::new("user_id"))?),
        comment_id: CommentId::new(require_id(comment_id, FieldName::new("comment_id"))?),
        kind,
        desired,
    })
}

fn reaction_status(response: &ToggleReactionResponse, kind: ReactionKind) -> (StatusCode, String) {
    if response.created {
        (StatusCode::CREATED, format!("{kind} added"))
    } else {
        (StatusCode::OK, format!("{kind} removed"))
    }
}

/// Comment on an existing posting.
#[utoipa::path(
    post,
    path = "/api/comment",
    request_body = CreateCommentBody,
    responses(
        (status = 201, description = "Comment created", body = EnvelopeSchema<CommentIdBody>),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 404, description = "User or posting not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["comments"],
    operation_id = "createComment"
)]
#[post("/comment")]
pub async fn create_comment(
    state: web::Data<HttpState>,
    payload: web::Json<CreateCommentBody>,
) -> ApiResult<ApiResponse<CommentIdBody>> {
    let body = payload.into_inner();
    let request = CreateCommentRequest {
        user_id: UserId::new(require_id(body.user_id, FieldName::new("user_id"))?),
        posting_id: PostingId::new(require_id(body.posting_id, FieldName::new("posting_id"))?),
        content: body.content,
    };
    let response = state.comments.create(request).await?;
    Ok(ApiResponse::created(
        "comment created",
        CommentIdBody {
            comment_id: response.comment_id.get(),
        },
    ))
}

/// List the comments on a posting, flagging the viewer's own reactions.
///
/// A posting without comments yields an empty list.
#[utoipa::path(
    get,
    path = "/api/comment",
    params(CommentListQuery),
    responses(
        (status = 200, description = "Comments listed", body = EnvelopeSchema<Vec<CommentBody>>),
        (status = 400, description = "Invalid query", body = ErrorEnvelopeSchema),
        (status = 404, description = "User or posting not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["comments"],
    operation_id = "listComments"
)]
#[get("/comment")]
pub async fn list_comments(
    state: web::Data<HttpState>,
    query: web::Query<CommentListQuery>,
) -> ApiResult<ApiResponse<Vec<CommentBody>>> {
    let query = query.into_inner();
    let request = ListCommentsRequest {
        user_id: UserId::new(require_id(query.user_id, FieldName::new("user_id"))?),
        posting_id: PostingId::new(require_id(query.posting_id, FieldName::new("posting_id"))?),
    };
    let views = state.comments_query.list(request).await?;
    let body = views.into_iter().map(CommentBody::from).collect();
    Ok(ApiResponse::ok("comments listed", body))
}

/// Add or remove a like and return the comment's like counter.
#[utoipa::path(
    post,
    path = "/api/comment/like",
    request_body = LikeBody,
    responses(
        (status = 201, description = "Like added", body = EnvelopeSchema<LikeCountBody>),
        (status = 200, description = "Like removed", body = EnvelopeSchema<LikeCountBody>),
        (status = 404, description = "User, comment or like not found", body = ErrorEnvelopeSchema),
        (status = 409, description = "Like already exists", body = ErrorEnvelopeSchema)
    ),
    tags = ["comments"],
    operation_id = "toggleLike"
)]
#[post("/comment/like")]
pub async fn toggle_like(
    state: web::Data<HttpState>,
    payload: web::Json<LikeBody>,
) -> ApiResult<ApiResponse<LikeCountBody>> {
    let body = payload.into_inner();
    let request =
        parse_reaction_request(body.user_id, body.comment_id, ReactionKind::Like, body.liked)?;
    let response = state.comments.toggle_reaction(request).await?;
    let (status, message) = reaction_status(&response, ReactionKind::Like);
    Ok(ApiResponse::new(
        status,
        message,
        Some(LikeCountBody {
            like_count: response.count,
        }),
    ))
}

/// Add or remove a dislike and return the comment's dislike counter.
#[utoipa::path(
    post,
    path = "/api/comment/dislike",
    request_body = DislikeBody,
    responses(
        (status = 201, description = "Dislike added", body = EnvelopeSchema<DislikeCountBody>),
        (status = 200, description = "Dislike removed", body = EnvelopeSchema<DislikeCountBody>),
        (status = 404, description = "User, comment or dislike not found", body = ErrorEnvelopeSchema),
        (status = 409, description = "Dislike already exists", body = ErrorEnvelopeSchema)
    ),
    tags = ["comments"],
    operation_id = "toggleDislike"
)]
#[post("/comment/dislike")]
pub async fn toggle_dislike(
    state: web::Data<HttpState>,
    payload: web::Json<DislikeBody>,
) -> ApiResult<ApiResponse<DislikeCountBody>> {
    let body = payload.into_inner();
    let request = parse_reaction_request(
        body.user_id,
        body.comment_id,
        ReactionKind::Dislike,
        body.disliked,
    )?;
    let response = state.comments.toggle_reaction(request).await?;
    let (status, message) = reaction_status(&response, ReactionKind::Dislike);
    Ok(ApiResponse::new(
        status,
        message,
        Some(DislikeCountBody {
            dislike_count: response.count,
        }),
    ))
}

#[cfg(test)]
#[path = "comments_tests.rs"]
mod tests;
