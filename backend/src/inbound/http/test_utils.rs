//! Test helpers for inbound HTTP components.
//!
//! Handler tests run against the in-memory store so they exercise the real
//! domain services end to end.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use serde_json::Value;

use crate::domain::UserId;
use crate::inbound::http::api_scope;
use crate::inbound::http::state::{HttpState, RepositoryPorts};
use crate::middleware::Trace;
use crate::outbound::memory::InMemoryStore;

/// Build HTTP state whose every port is backed by `store`.
pub fn memory_state(store: &Arc<InMemoryStore>) -> HttpState {
    HttpState::from_repositories(RepositoryPorts {
        users: store.clone(),
        worksheets: store.clone(),
        postings: store.clone(),
        bookmarks: store.clone(),
        comments: store.clone(),
        reactions: store.clone(),
    })
}

/// Register a member directly in the store.
pub fn seed_user(store: &InMemoryStore, nickname: &str) -> UserId {
    store.add_user(nickname).expect("user stored").id()
}

/// Initialise a service exposing the API scope over `store`.
pub async fn init_app(
    store: &Arc<InMemoryStore>,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(memory_state(store)))
            .wrap(Trace)
            .service(api_scope()),
    )
    .await
}

/// Send `request` and return the status with the decoded envelope.
pub async fn call_json<S>(app: &S, request: test::TestRequest) -> (u16, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status().as_u16();
    let body: Value = test::read_body_json(response).await;
    (status, body)
}
