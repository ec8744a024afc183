//! Builders wiring repository adapters into HTTP state.

use std::sync::Arc;

use yourside::inbound::http::state::{HttpState, RepositoryPorts};
use yourside::outbound::memory::InMemoryStore;
use yourside::outbound::persistence::{
    DbPool, DieselBookmarkRepository, DieselCommentReactionRepository, DieselCommentRepository,
    DieselPostingRepository, DieselUserRepository, DieselWorksheetRepository,
};

use super::config::StoreBackend;

fn postgres_state(pool: &DbPool) -> HttpState {
    HttpState::from_repositories(RepositoryPorts {
        users: Arc::new(DieselUserRepository::new(pool.clone())),
        worksheets: Arc::new(DieselWorksheetRepository::new(pool.clone())),
        postings: Arc::new(DieselPostingRepository::new(pool.clone())),
        bookmarks: Arc::new(DieselBookmarkRepository::new(pool.clone())),
        comments: Arc::new(DieselCommentRepository::new(pool.clone())),
        reactions: Arc::new(DieselCommentReactionRepository::new(pool.clone())),
    })
}

fn memory_state(store: &Arc<InMemoryStore>) -> HttpState {
    HttpState::from_repositories(RepositoryPorts {
        users: store.clone(),
        worksheets: store.clone(),
        postings: store.clone(),
        bookmarks: store.clone(),
        comments: store.clone(),
        reactions: store.clone(),
    })
}

/// Build handler state over the selected store.
pub(crate) fn build_http_state(store: &StoreBackend) -> HttpState {
    match store {
        StoreBackend::Postgres(pool) => postgres_state(pool),
        StoreBackend::Memory(store) => memory_state(store),
    }
}
