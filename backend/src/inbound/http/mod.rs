//! HTTP inbound adapter exposing REST endpoints.

pub mod comments;
pub mod envelope;
pub mod error;
pub mod health;
pub mod postings;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;
pub mod worksheets;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// Mount every community endpoint under `/api`, with extractor failures
/// rendered as envelopes.
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(validation::json_config())
        .app_data(validation::path_config())
        .app_data(validation::query_config())
        .service(worksheets::register_worksheet)
        .service(worksheets::get_worksheet)
        .service(worksheets::share_worksheet)
        .service(postings::create_posting)
        .service(postings::list_postings)
        .service(postings::toggle_bookmark)
        .service(comments::create_comment)
        .service(comments::list_comments)
        .service(comments::toggle_like)
        .service(comments::toggle_dislike)
}
