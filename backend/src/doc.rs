//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every community endpoint plus the health probes.
//! Success bodies are documented as `EnvelopeSchema<T>` and failures as the
//! shared `ErrorEnvelope`.
//!
//! The generated specification is served by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::ErrorEnvelopeSchema;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Yourside community API",
        description = "Worksheets, postings, comments, bookmarks and reactions."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::worksheets::register_worksheet,
        crate::inbound::http::worksheets::get_worksheet,
        crate::inbound::http::worksheets::share_worksheet,
        crate::inbound::http::postings::create_posting,
        crate::inbound::http::postings::list_postings,
        crate::inbound::http::postings::toggle_bookmark,
        crate::inbound::http::comments::create_comment,
        crate::inbound::http::comments::list_comments,
        crate::inbound::http::comments::toggle_like,
        crate::inbound::http::comments::toggle_dislike,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ErrorEnvelopeSchema)),
    tags(
        (name = "worksheets", description = "Pay worksheets and sharing"),
        (name = "postings", description = "Board postings and bookmarks"),
        (name = "comments", description = "Comments, likes and dislikes"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
