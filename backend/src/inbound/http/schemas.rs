//! OpenAPI schema definitions for the response envelope.
//!
//! [`ApiResponse`](crate::inbound::http::envelope::ApiResponse) serialises
//! its status through a custom function, so the documented shape lives here
//! instead of on the runtime type.

use utoipa::ToSchema;

/// Successful envelope carrying a typed payload in `data`.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EnvelopeSchema<T> {
    /// HTTP status mirrored into the body.
    #[schema(example = 201)]
    status_code: u16,
    /// Always `true` for 2xx responses.
    success: bool,
    /// Human-readable outcome.
    message: Option<String>,
    /// Operation payload.
    data: Option<T>,
}

/// Failure envelope. `data` carries field details for invalid requests and
/// is `null` otherwise.
#[derive(ToSchema)]
#[schema(as = ErrorEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorEnvelopeSchema {
    /// HTTP status mirrored into the body.
    #[schema(example = 404)]
    status_code: u16,
    /// Always `false`.
    #[schema(example = false)]
    success: bool,
    /// Human-readable failure description.
    #[schema(example = "posting 9 not found")]
    message: Option<String>,
    /// Validation details for 400 responses.
    data: Option<serde_json::Value>,
}
