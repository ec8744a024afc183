//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{bookmarks, comment_reactions, comments, postings, users, worksheets};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub nickname: String,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = worksheets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct WorksheetRow {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub total_pay: i64,
    pub extra_pay: bool,
    pub week_pay: bool,
    pub night_pay: bool,
    pub overtime_pay: bool,
    pub holiday_pay: bool,
    pub is_open: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = worksheets)]
pub(crate) struct NewWorksheetRow<'a> {
    pub user_id: i64,
    pub title: &'a str,
    pub content: &'a str,
    pub total_pay: i64,
    pub extra_pay: bool,
    pub week_pay: bool,
    pub night_pay: bool,
    pub overtime_pay: bool,
    pub holiday_pay: bool,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = postings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PostingRow {
    pub id: i64,
    pub user_id: i64,
    pub worksheet_id: i64,
    pub title: String,
    pub content: String,
    pub bookmark_count: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = postings)]
pub(crate) struct NewPostingRow<'a> {
    pub user_id: i64,
    pub worksheet_id: i64,
    pub title: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bookmarks)]
pub(crate) struct NewBookmarkRow {
    pub user_id: i64,
    pub posting_id: i64,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CommentRow {
    pub id: i64,
    pub user_id: i64,
    pub posting_id: i64,
    pub content: String,
    pub like_count: i32,
    pub dislike_count: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub(crate) struct NewCommentRow<'a> {
    pub user_id: i64,
    pub posting_id: i64,
    pub content: &'a str,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comment_reactions)]
pub(crate) struct NewCommentReactionRow<'a> {
    pub user_id: i64,
    pub comment_id: i64,
    pub kind: &'a str,
}
