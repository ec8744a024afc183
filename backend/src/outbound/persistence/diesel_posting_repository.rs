//! PostgreSQL-backed `PostingRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PostingRepository, RepositoryError};
use crate::domain::{Posting, PostingDraft, PostingId, UserId, WorksheetId};

use super::diesel_error_mapping::{counter_from_column, map_diesel_error, map_pool_error};
use super::models::{NewPostingRow, PostingRow};
use super::pool::DbPool;
use super::schema::postings;

/// Diesel-backed implementation of the posting repository port.
#[derive(Clone)]
pub struct DieselPostingRepository {
    pool: DbPool,
}

impl DieselPostingRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_posting(row: PostingRow) -> Result<Posting, RepositoryError> {
    let draft = PostingDraft::new(
        UserId::new(row.user_id),
        WorksheetId::new(row.worksheet_id),
        row.title,
        row.content,
    )
    .map_err(|err| RepositoryError::query(format!("posting {}: {err}", row.id)))?;
    let bookmark_count = counter_from_column(row.bookmark_count, "bookmark_count")?;

    Ok(Posting::new(
        PostingId::new(row.id),
        draft,
        bookmark_count,
        row.created_at,
    ))
}

#[async_trait]
impl PostingRepository for DieselPostingRepository {
    async fn find_by_id(&self, id: PostingId) -> Result<Option<Posting>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = postings::table
            .find(id.get())
            .select(PostingRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_posting).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Posting>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PostingRow> = postings::table
            .order(postings::id.asc())
            .select(PostingRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_posting).collect()
    }

    async fn insert(&self, draft: &PostingDraft) -> Result<Posting, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewPostingRow {
            user_id: draft.user_id().get(),
            worksheet_id: draft.worksheet_id().get(),
            title: draft.title(),
            content: draft.content(),
        };

        let row = diesel::insert_into(postings::table)
            .values(&new_row)
            .returning(PostingRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_posting(row)
    }
}
