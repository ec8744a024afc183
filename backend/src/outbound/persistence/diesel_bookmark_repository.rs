//! PostgreSQL-backed `BookmarkRepository` implementation.
//!
//! The toggle runs in one transaction that first locks the posting row with
//! `SELECT ... FOR UPDATE`. Concurrent toggles on the same posting queue
//! behind that lock, so the bookmark row and `bookmark_count` never drift.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{BookmarkRepository, RepositoryError};
use crate::domain::{PostingId, ToggleOutcome, TogglePlan, UserId};

use super::diesel_error_mapping::{counter_from_column, map_diesel_error, map_pool_error};
use super::models::NewBookmarkRow;
use super::pool::DbPool;
use super::schema::{bookmarks, postings};

/// Diesel-backed implementation of the bookmark toggle port.
#[derive(Clone)]
pub struct DieselBookmarkRepository {
    pool: DbPool,
}

impl DieselBookmarkRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

async fn adjust_bookmark_count(
    conn: &mut AsyncPgConnection,
    posting_id: i64,
    delta: i32,
) -> QueryResult<i32> {
    diesel::update(postings::table.find(posting_id))
        .set(postings::bookmark_count.eq(postings::bookmark_count + delta))
        .returning(postings::bookmark_count)
        .get_result(conn)
        .await
}

#[async_trait]
impl BookmarkRepository for DieselBookmarkRepository {
    async fn toggle(
        &self,
        user_id: UserId,
        posting_id: PostingId,
        bookmarked: bool,
    ) -> Result<ToggleOutcome, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let user = user_id.get();
        let posting = posting_id.get();

        let applied = conn
            .transaction(|conn| {
                async move {
                    let locked: Option<i32> = postings::table
                        .find(posting)
                        .select(postings::bookmark_count)
                        .for_update()
                        .first(conn)
                        .await
                        .optional()?;
                    let Some(current) = locked else {
                        return Ok(None);
                    };

                    let exists: bool = diesel::select(diesel::dsl::exists(
                        bookmarks::table.find((user, posting)),
                    ))
                    .get_result(conn)
                    .await?;

                    let plan = TogglePlan::decide(exists, bookmarked);
                    let count = match plan {
                        TogglePlan::Insert => {
                            diesel::insert_into(bookmarks::table)
                                .values(NewBookmarkRow {
                                    user_id: user,
                                    posting_id: posting,
                                })
                                .execute(conn)
                                .await?;
                            adjust_bookmark_count(conn, posting, 1).await?
                        }
                        TogglePlan::Delete => {
                            diesel::delete(bookmarks::table.find((user, posting)))
                                .execute(conn)
                                .await?;
                            adjust_bookmark_count(conn, posting, -1).await?
                        }
                        TogglePlan::RejectExisting | TogglePlan::RejectMissing => current,
                    };
                    Ok::<_, diesel::result::Error>(Some((plan, count)))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        match applied {
            Some((plan, count)) => Ok(plan.outcome(counter_from_column(count, "bookmark_count")?)),
            None => Ok(ToggleOutcome::TargetMissing),
        }
    }
}
