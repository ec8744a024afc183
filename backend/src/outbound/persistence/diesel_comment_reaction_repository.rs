//! PostgreSQL-backed `CommentReactionRepository` implementation.
//!
//! Mirrors the bookmark toggle: the comment row is locked for the whole
//! transaction, then the reaction row and the counter for its kind change
//! together.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{CommentReactionRepository, RepositoryError};
use crate::domain::{CommentId, ReactionKind, ToggleOutcome, TogglePlan, UserId};

use super::diesel_error_mapping::{counter_from_column, map_diesel_error, map_pool_error};
use super::models::NewCommentReactionRow;
use super::pool::DbPool;
use super::schema::{comment_reactions, comments};

/// Diesel-backed implementation of the comment reaction toggle port.
#[derive(Clone)]
pub struct DieselCommentReactionRepository {
    pool: DbPool,
}

impl DieselCommentReactionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

async fn adjust_reaction_count(
    conn: &mut AsyncPgConnection,
    comment_id: i64,
    kind: ReactionKind,
    delta: i32,
) -> QueryResult<i32> {
    let target = comments::table.find(comment_id);
    match kind {
        ReactionKind::Like => {
            diesel::update(target)
                .set(comments::like_count.eq(comments::like_count + delta))
                .returning(comments::like_count)
                .get_result(conn)
                .await
        }
        ReactionKind::Dislike => {
            diesel::update(target)
                .set(comments::dislike_count.eq(comments::dislike_count + delta))
                .returning(comments::dislike_count)
                .get_result(conn)
                .await
        }
    }
}

#[async_trait]
impl CommentReactionRepository for DieselCommentReactionRepository {
    async fn toggle(
        &self,
        user_id: UserId,
        comment_id: CommentId,
        kind: ReactionKind,
        desired: bool,
    ) -> Result<ToggleOutcome, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let user = user_id.get();
        let comment = comment_id.get();
        let stored_kind = kind.as_str();

        let applied = conn
            .transaction(|conn| {
                async move {
                    let locked: Option<(i32, i32)> = comments::table
                        .find(comment)
                        .select((comments::like_count, comments::dislike_count))
                        .for_update()
                        .first(conn)
                        .await
                        .optional()?;
                    let Some((likes, dislikes)) = locked else {
                        return Ok(None);
                    };
                    let current = match kind {
                        ReactionKind::Like => likes,
                        ReactionKind::Dislike => dislikes,
                    };

                    let key = (user, comment, stored_kind);
                    let exists: bool =
                        diesel::select(diesel::dsl::exists(comment_reactions::table.find(key)))
                            .get_result(conn)
                            .await?;

                    let plan = TogglePlan::decide(exists, desired);
                    let count = match plan {
                        TogglePlan::Insert => {
                            diesel::insert_into(comment_reactions::table)
                                .values(NewCommentReactionRow {
                                    user_id: user,
                                    comment_id: comment,
                                    kind: stored_kind,
                                })
                                .execute(conn)
                                .await?;
                            adjust_reaction_count(conn, comment, kind, 1).await?
                        }
                        TogglePlan::Delete => {
                            diesel::delete(comment_reactions::table.find(key))
                                .execute(conn)
                                .await?;
                            adjust_reaction_count(conn, comment, kind, -1).await?
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
            Some((plan, count)) => Ok(plan.outcome(counter_from_column(count, kind.as_str())?)),
            None => Ok(ToggleOutcome::TargetMissing),
        }
    }
}
