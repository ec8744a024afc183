//! Shared validation helpers for inbound HTTP adapters.
//!
//! Extractor failures (malformed JSON, bad path segments, bad query strings)
//! are turned into `InvalidRequest` domain errors so they render through the
//! same envelope as every other failure.

use actix_web::HttpRequest;
use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::web;
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MalformedBody,
    MalformedPath,
    MalformedQuery,
    InvalidId,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MalformedBody => "malformed_body",
            ErrorCode::MalformedPath => "malformed_path",
            ErrorCode::MalformedQuery => "malformed_query",
            ErrorCode::InvalidId => "invalid_id",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

fn extractor_error(code: ErrorCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({ "code": code.as_str() }))
}

/// Require a positive identifier supplied by the client.
pub(crate) fn require_id(value: i64, field: FieldName) -> Result<i64, Error> {
    if value > 0 {
        return Ok(value);
    }
    let field = field.as_str();
    Err(
        Error::invalid_request(format!("{field} must be a positive integer")).with_details(json!({
            "field": field,
            "value": value,
            "code": ErrorCode::InvalidId.as_str(),
        })),
    )
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = req.path(), error = %err, "rejected JSON body");
    extractor_error(ErrorCode::MalformedBody, format!("invalid request body: {err}")).into()
}

fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = req.path(), error = %err, "rejected path parameters");
    extractor_error(ErrorCode::MalformedPath, format!("invalid path parameter: {err}")).into()
}

fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = req.path(), error = %err, "rejected query string");
    extractor_error(ErrorCode::MalformedQuery, format!("invalid query string: {err}")).into()
}

/// JSON extractor configuration rendering failures as envelopes.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// Path extractor configuration rendering failures as envelopes.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error_handler)
}

/// Query extractor configuration rendering failures as envelopes.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(i64::MAX)]
    fn positive_ids_pass(#[case] value: i64) {
        assert_eq!(require_id(value, FieldName::new("user_id")), Ok(value));
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    fn non_positive_ids_are_rejected(#[case] value: i64) {
        let err = require_id(value, FieldName::new("posting_id")).expect_err("invalid id");

        assert_eq!(err.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(err.message(), "posting_id must be a positive integer");
        assert_eq!(
            err.details(),
            Some(&json!({"field": "posting_id", "value": value, "code": "invalid_id"}))
        );
    }

    #[rstest]
    fn extractor_errors_carry_a_code() {
        let err = extractor_error(ErrorCode::MalformedQuery, "invalid query string".to_owned());
        assert_eq!(err.details(), Some(&json!({"code": "malformed_query"})));
    }
}
