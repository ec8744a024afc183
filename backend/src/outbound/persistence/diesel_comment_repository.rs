//! PostgreSQL-backed `CommentRepository` implementation.

use std::collections::HashSet;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CommentRepository, RepositoryError};
use crate::domain::{
    Comment, CommentDraft, CommentId, CommentView, PostingId, ReactionKind, UserId,
};

use super::diesel_error_mapping::{counter_from_column, map_diesel_error, map_pool_error};
use super::models::{CommentRow, NewCommentRow};
use super::pool::DbPool;
use super::schema::{comment_reactions, comments, users};

/// Diesel-backed implementation of the comment repository port.
#[derive(Clone)]
pub struct DieselCommentRepository {
    pool: DbPool,
}

impl DieselCommentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_comment(row: CommentRow) -> Result<Comment, RepositoryError> {
    let draft = CommentDraft::new(
        UserId::new(row.user_id),
        PostingId::new(row.posting_id),
        row.content,
    )
    .map_err(|err| RepositoryError::query(format!("comment {}: {err}", row.id)))?;

    Ok(Comment::new(
        CommentId::new(row.id),
        draft,
        counter_from_column(row.like_count, "like_count")?,
        counter_from_column(row.dislike_count, "dislike_count")?,
        row.created_at,
    ))
}

#[async_trait]
impl CommentRepository for DieselCommentRepository {
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = comments::table
            .find(id.get())
            .select(CommentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_comment).transpose()
    }

    async fn insert(&self, draft: &CommentDraft) -> Result<Comment, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewCommentRow {
            user_id: draft.user_id().get(),
            posting_id: draft.posting_id().get(),
            content: draft.content(),
        };

        let row = diesel::insert_into(comments::table)
            .values(&new_row)
            .returning(CommentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_comment(row)
    }

    async fn list_for_posting(
        &self,
        posting_id: PostingId,
        viewer: UserId,
    ) -> Result<Vec<CommentView>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(CommentRow, String)> = comments::table
            .inner_join(users::table)
            .filter(comments::posting_id.eq(posting_id.get()))
            .order(comments::id.asc())
            .select((CommentRow::as_select(), users::nickname))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = rows.iter().map(|(row, _)| row.id).collect();
        let reactions: Vec<(i64, String)> = comment_reactions::table
            .filter(comment_reactions::user_id.eq(viewer.get()))
            .filter(comment_reactions::comment_id.eq_any(ids))
            .select((comment_reactions::comment_id, comment_reactions::kind))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        let held: HashSet<(i64, ReactionKind)> = reactions
            .into_iter()
            .filter_map(|(id, kind)| ReactionKind::from_stored(&kind).map(|kind| (id, kind)))
            .collect();

        rows.into_iter()
            .map(|(row, nickname)| {
                let id = row.id;
                Ok(CommentView {
                    comment: row_to_comment(row)?,
                    nickname,
                    liked: held.contains(&(id, ReactionKind::Like)),
                    disliked: held.contains(&(id, ReactionKind::Dislike)),
                })
            })
            .collect()
    }
}
