//! In-process store implementing every repository port.
//!
//! Used when no database is configured and by handler tests. All tables sit
//! behind one mutex so a toggle reads the association, writes it and moves
//! the counter under a single guard, which gives the same atomicity as the
//! PostgreSQL transaction.

use std::collections::{BTreeMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{
    BookmarkRepository, CommentReactionRepository, CommentRepository, PostingRepository,
    RepositoryError, UserRepository, WorksheetRepository,
};
use crate::domain::{
    Comment, CommentDraft, CommentId, CommentView, Posting, PostingDraft, PostingId,
    ReactionKind, ToggleOutcome, TogglePlan, User, UserId, Worksheet, WorksheetDraft,
    WorksheetId,
};

struct PostingRow {
    draft: PostingDraft,
    bookmark_count: u32,
    created_at: DateTime<Utc>,
}

impl PostingRow {
    fn to_posting(&self, id: PostingId) -> Posting {
        Posting::new(id, self.draft.clone(), self.bookmark_count, self.created_at)
    }
}

struct CommentRow {
    draft: CommentDraft,
    like_count: u32,
    dislike_count: u32,
    created_at: DateTime<Utc>,
}

impl CommentRow {
    fn to_comment(&self, id: CommentId) -> Comment {
        Comment::new(
            id,
            self.draft.clone(),
            self.like_count,
            self.dislike_count,
            self.created_at,
        )
    }

    fn counter_mut(&mut self, kind: ReactionKind) -> &mut u32 {
        match kind {
            ReactionKind::Like => &mut self.like_count,
            ReactionKind::Dislike => &mut self.dislike_count,
        }
    }
}

#[derive(Default)]
struct Tables {
    last_id: i64,
    users: BTreeMap<UserId, User>,
    worksheets: BTreeMap<WorksheetId, Worksheet>,
    postings: BTreeMap<PostingId, PostingRow>,
    comments: BTreeMap<CommentId, CommentRow>,
    bookmarks: HashSet<(UserId, PostingId)>,
    reactions: HashSet<(UserId, CommentId, ReactionKind)>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// Mutex-guarded tables for users, worksheets, postings, comments and their
/// association rows.
///
/// Identifiers come from one sequence shared by all tables.
///
/// # Examples
/// ```
/// use yourside::outbound::memory::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// let user = store.add_user("mina").expect("store lock");
/// assert_eq!(user.nickname(), "mina");
/// ```
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a member. Users are created outside the API, so this is how
    /// local runs and tests make them available.
    pub fn add_user(&self, nickname: &str) -> Result<User, RepositoryError> {
        let mut tables = self.lock()?;
        let id = UserId::new(tables.next_id());
        let user = User::new(id, nickname);
        tables.users.insert(id, user.clone());
        Ok(user)
    }

    /// Number of bookmark rows pointing at a posting.
    pub fn bookmark_rows(&self, posting_id: PostingId) -> Result<usize, RepositoryError> {
        let tables = self.lock()?;
        Ok(tables
            .bookmarks
            .iter()
            .filter(|(_, posting)| *posting == posting_id)
            .count())
    }

    /// Number of reaction rows of one kind pointing at a comment.
    pub fn reaction_rows(
        &self,
        comment_id: CommentId,
        kind: ReactionKind,
    ) -> Result<usize, RepositoryError> {
        let tables = self.lock()?;
        Ok(tables
            .reactions
            .iter()
            .filter(|(_, comment, stored)| *comment == comment_id && *stored == kind)
            .count())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, RepositoryError> {
        self.tables
            .lock()
            .map_err(|_| RepositoryError::query("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.lock()?.users.get(&id).cloned())
    }
}

#[async_trait]
impl WorksheetRepository for InMemoryStore {
    async fn find_by_id(&self, id: WorksheetId) -> Result<Option<Worksheet>, RepositoryError> {
        Ok(self.lock()?.worksheets.get(&id).cloned())
    }

    async fn insert(&self, draft: &WorksheetDraft) -> Result<Worksheet, RepositoryError> {
        let mut tables = self.lock()?;
        let id = WorksheetId::new(tables.next_id());
        let worksheet = Worksheet::new(id, draft.clone(), false, Utc::now());
        tables.worksheets.insert(id, worksheet.clone());
        Ok(worksheet)
    }

    async fn toggle_open(&self, id: WorksheetId) -> Result<Option<bool>, RepositoryError> {
        Ok(self
            .lock()?
            .worksheets
            .get_mut(&id)
            .map(Worksheet::toggle_open))
    }
}

#[async_trait]
impl PostingRepository for InMemoryStore {
    async fn find_by_id(&self, id: PostingId) -> Result<Option<Posting>, RepositoryError> {
        Ok(self.lock()?.postings.get(&id).map(|row| row.to_posting(id)))
    }

    async fn list_all(&self) -> Result<Vec<Posting>, RepositoryError> {
        let tables = self.lock()?;
        Ok(tables
            .postings
            .iter()
            .map(|(id, row)| row.to_posting(*id))
            .collect())
    }

    async fn insert(&self, draft: &PostingDraft) -> Result<Posting, RepositoryError> {
        let mut tables = self.lock()?;
        let id = PostingId::new(tables.next_id());
        let row = PostingRow {
            draft: draft.clone(),
            bookmark_count: 0,
            created_at: Utc::now(),
        };
        let posting = row.to_posting(id);
        tables.postings.insert(id, row);
        Ok(posting)
    }
}

#[async_trait]
impl BookmarkRepository for InMemoryStore {
    async fn toggle(
        &self,
        user_id: UserId,
        posting_id: PostingId,
        bookmarked: bool,
    ) -> Result<ToggleOutcome, RepositoryError> {
        let mut guard = self.lock()?;
        let tables = &mut *guard;
        let Some(posting) = tables.postings.get_mut(&posting_id) else {
            return Ok(ToggleOutcome::TargetMissing);
        };

        let key = (user_id, posting_id);
        let plan = TogglePlan::decide(tables.bookmarks.contains(&key), bookmarked);
        match plan {
            TogglePlan::Insert => {
                tables.bookmarks.insert(key);
            }
            TogglePlan::Delete => {
                tables.bookmarks.remove(&key);
            }
            TogglePlan::RejectExisting | TogglePlan::RejectMissing => {}
        }
        posting.bookmark_count = plan.apply(posting.bookmark_count);
        Ok(plan.outcome(posting.bookmark_count))
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, RepositoryError> {
        Ok(self.lock()?.comments.get(&id).map(|row| row.to_comment(id)))
    }

    async fn insert(&self, draft: &CommentDraft) -> Result<Comment, RepositoryError> {
        let mut tables = self.lock()?;
        let id = CommentId::new(tables.next_id());
        let row = CommentRow {
            draft: draft.clone(),
            like_count: 0,
            dislike_count: 0,
            created_at: Utc::now(),
        };
        let comment = row.to_comment(id);
        tables.comments.insert(id, row);
        Ok(comment)
    }

    async fn list_for_posting(
        &self,
        posting_id: PostingId,
        viewer: UserId,
    ) -> Result<Vec<CommentView>, RepositoryError> {
        let tables = self.lock()?;
        tables
            .comments
            .iter()
            .filter(|(_, row)| row.draft.posting_id() == posting_id)
            .map(|(id, row)| {
                let author = row.draft.user_id();
                let nickname = tables
                    .users
                    .get(&author)
                    .map(|user| user.nickname().to_owned())
                    .ok_or_else(|| {
                        RepositoryError::query(format!("comment {id} references unknown user"))
                    })?;
                Ok(CommentView {
                    comment: row.to_comment(*id),
                    nickname,
                    liked: tables
                        .reactions
                        .contains(&(viewer, *id, ReactionKind::Like)),
                    disliked: tables
                        .reactions
                        .contains(&(viewer, *id, ReactionKind::Dislike)),
                })
            })
            .collect()
    }
}

#[async_trait]
impl CommentReactionRepository for InMemoryStore {
    async fn toggle(
        &self,
        user_id: UserId,
        comment_id: CommentId,
        kind: ReactionKind,
        desired: bool,
    ) -> Result<ToggleOutcome, RepositoryError> {
        let mut guard = self.lock()?;
        let tables = &mut *guard;
        let Some(comment) = tables.comments.get_mut(&comment_id) else {
            return Ok(ToggleOutcome::TargetMissing);
        };

        let key = (user_id, comment_id, kind);
        let plan = TogglePlan::decide(tables.reactions.contains(&key), desired);
        match plan {
            TogglePlan::Insert => {
                tables.reactions.insert(key);
            }
            TogglePlan::Delete => {
                tables.reactions.remove(&key);
            }
            TogglePlan::RejectExisting | TogglePlan::RejectMissing => {}
        }
        let counter = comment.counter_mut(kind);
        *counter = plan.apply(*counter);
        Ok(plan.outcome(*counter))
    }
}
