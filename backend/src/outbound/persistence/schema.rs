//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Community members. Rows are created outside this service.
    users (id) {
        id -> Int8,
        nickname -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Pay worksheets; `is_open` is the share flag.
    worksheets (id) {
        id -> Int8,
        user_id -> Int8,
        title -> Varchar,
        content -> Text,
        total_pay -> Int8,
        extra_pay -> Bool,
        week_pay -> Bool,
        night_pay -> Bool,
        overtime_pay -> Bool,
        holiday_pay -> Bool,
        is_open -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Community postings with a denormalised bookmark counter.
    postings (id) {
        id -> Int8,
        user_id -> Int8,
        worksheet_id -> Int8,
        title -> Varchar,
        content -> Text,
        /// Equals the number of `bookmarks` rows for the posting.
        bookmark_count -> Int4,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// One row per (user, posting) bookmark.
    bookmarks (user_id, posting_id) {
        user_id -> Int8,
        posting_id -> Int8,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Comments on postings with like and dislike counters.
    comments (id) {
        id -> Int8,
        user_id -> Int8,
        posting_id -> Int8,
        content -> Text,
        like_count -> Int4,
        dislike_count -> Int4,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// One row per (user, comment, kind) reaction; `kind` is `like` or
    /// `dislike`.
    comment_reactions (user_id, comment_id, kind) {
        user_id -> Int8,
        comment_id -> Int8,
        kind -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(worksheets -> users (user_id));
diesel::joinable!(postings -> worksheets (worksheet_id));
diesel::joinable!(bookmarks -> postings (posting_id));
diesel::joinable!(comments -> users (user_id));
diesel::joinable!(comment_reactions -> comments (comment_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    worksheets,
    postings,
    bookmarks,
    comments,
    comment_reactions,
);
