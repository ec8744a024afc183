//! Worksheet HTTP handlers.
//!
//! ```text
//! POST /api/worksheet
//! GET  /api/worksheet/{worksheet_id}
//! PUT  /api/worksheet/{worksheet_id}/share
//! ```

use actix_web::{get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{RegisterWorksheetRequest, ShareWorksheetResponse};
use crate::domain::{Error, PayModifiers, UserId, Worksheet, WorksheetId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{ApiResponse, format_timestamp};
use crate::inbound::http::schemas::{EnvelopeSchema, ErrorEnvelopeSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require_id};

/// Request payload for registering a worksheet.
///
/// Pay modifier flags default to `false` when omitted.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RegisterWorksheetBody {
    #[schema(example = 1)]
    pub user_id: i64,
    #[schema(example = "A")]
    pub title: String,
    #[schema(example = "Weekend cafe shift")]
    pub content: String,
    #[schema(example = 10000)]
    pub total_pay: i64,
    #[serde(default)]
    pub extra_pay: bool,
    #[serde(default)]
    pub week_pay: bool,
    #[serde(default)]
    pub night_pay: bool,
    #[serde(default)]
    pub overtime_pay: bool,
    #[serde(default)]
    pub holiday_pay: bool,
}

/// Identifier of a newly registered worksheet.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WorksheetIdBody {
    pub worksheet_id: i64,
}

/// Visibility of a worksheet after a share toggle.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WorksheetShareBody {
    pub worksheet_id: i64,
    pub is_open: bool,
}

/// Stored worksheet as returned by the detail endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WorksheetBody {
    pub worksheet_id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub total_pay: i64,
    pub extra_pay: bool,
    pub week_pay: bool,
    pub night_pay: bool,
    pub overtime_pay: bool,
    pub holiday_pay: bool,
    pub is_open: bool,
    #[schema(example = "2024-03-09 07:05:01")]
    pub created_at: String,
}

impl From<Worksheet> for WorksheetBody {
    fn from(value: Worksheet) -> Self {
        let modifiers = value.modifiers();
        Self {
            worksheet_id: value.id().get(),
            user_id: value.user_id().get(),
            title: value.title().to_owned(),
            content: value.content().to_owned(),
            total_pay: value.total_pay(),
            extra_pay: modifiers.extra_pay,
            week_pay: modifiers.week_pay,
            night_pay: modifiers.night_pay,
            overtime_pay: modifiers.overtime_pay,
            holiday_pay: modifiers.holiday_pay,
            is_open: value.is_open(),
            created_at: format_timestamp(value.created_at()),
        }
    }
}

impl From<ShareWorksheetResponse> for WorksheetShareBody {
    fn from(value: ShareWorksheetResponse) -> Self {
        Self {
            worksheet_id: value.worksheet_id.get(),
            is_open: value.is_open,
        }
    }
}

fn parse_register_request(body: RegisterWorksheetBody) -> Result<RegisterWorksheetRequest, Error> {
    let user_id = require_id(body.user_id, FieldName::new("user_id"))?;
    Ok(RegisterWorksheetRequest {
        user_id: UserId::new(user_id),
        title: body.title,
        content: body.content,
        total_pay: body.total_pay,
        modifiers: PayModifiers {
            extra_pay: body.extra_pay,
            week_pay: body.week_pay,
            night_pay: body.night_pay,
            overtime_pay: body.overtime_pay,
            holiday_pay: body.holiday_pay,
        },
    })
}

fn parse_worksheet_id(raw: i64) -> Result<WorksheetId, Error> {
    require_id(raw, FieldName::new("worksheet_id")).map(WorksheetId::new)
}

/// Register a worksheet for an existing user.
#[utoipa::path(
    post,
    path = "/api/worksheet",
    request_body = RegisterWorksheetBody,
    responses(
        (status = 201, description = "Worksheet registered", body = EnvelopeSchema<WorksheetIdBody>),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 404, description = "User not found", body = ErrorEnvelopeSchema),
        (status = 503, description = "Store unavailable", body = ErrorEnvelopeSchema)
    ),
    tags = ["worksheets"],
    operation_id = "registerWorksheet"
)]
#[post("/worksheet")]
pub async fn register_worksheet(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterWorksheetBody>,
) -> ApiResult<ApiResponse<WorksheetIdBody>> {
    let request = parse_register_request(payload.into_inner())?;
    let response = state.worksheets.register(request).await?;
    Ok(ApiResponse::created(
        "worksheet registered",
        WorksheetIdBody {
            worksheet_id: response.worksheet_id.get(),
        },
    ))
}

/// Fetch a single worksheet.
#[utoipa::path(
    get,
    path = "/api/worksheet/{worksheet_id}",
    params(("worksheet_id" = i64, Path, description = "Worksheet identifier")),
    responses(
        (status = 200, description = "Worksheet found", body = EnvelopeSchema<WorksheetBody>),
        (status = 400, description = "Invalid identifier", body = ErrorEnvelopeSchema),
        (status = 404, description = "Worksheet not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["worksheets"],
    operation_id = "getWorksheet"
)]
#[get("/worksheet/{worksheet_id}")]
pub async fn get_worksheet(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<ApiResponse<WorksheetBody>> {
    let worksheet_id = parse_worksheet_id(path.into_inner())?;
    let worksheet = state.worksheets_query.fetch(worksheet_id).await?;
    Ok(ApiResponse::ok(
        "worksheet found",
        WorksheetBody::from(worksheet),
    ))
}

/// Flip the public visibility of a worksheet.
///
/// Each call inverts `is_open`; two calls restore the original state.
#[utoipa::path(
    put,
    path = "/api/worksheet/{worksheet_id}/share",
    params(("worksheet_id" = i64, Path, description = "Worksheet identifier")),
    responses(
        (status = 200, description = "Visibility toggled", body = EnvelopeSchema<WorksheetShareBody>),
        (status = 400, description = "Invalid identifier", body = ErrorEnvelopeSchema),
        (status = 404, description = "Worksheet not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["worksheets"],
    operation_id = "shareWorksheet"
)]
#[put("/worksheet/{worksheet_id}/share")]
pub async fn share_worksheet(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<ApiResponse<WorksheetShareBody>> {
    let worksheet_id = parse_worksheet_id(path.into_inner())?;
    let response = state.worksheets.share(worksheet_id).await?;
    Ok(ApiResponse::ok(
        "worksheet visibility updated",
        WorksheetShareBody::from(response),
    ))
}

#[cfg(test)]
#[path = "worksheets_tests.rs"]
mod tests;
