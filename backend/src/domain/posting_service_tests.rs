//! Tests for the posting service.

use std::sync::Arc;

use chrono::Utc;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{
    MockBookmarkRepository, MockPostingRepository, MockUserRepository, MockWorksheetRepository,
};
use crate::domain::{
    ErrorCode, PayModifiers, PostingId, ToggleOutcome, User, UserId, Worksheet, WorksheetDraft,
    WorksheetId,
};

type Service = PostingService<
    MockUserRepository,
    MockWorksheetRepository,
    MockPostingRepository,
    MockBookmarkRepository,
>;

#[derive(Default)]
struct Mocks {
    users: MockUserRepository,
    worksheets: MockWorksheetRepository,
    postings: MockPostingRepository,
    bookmarks: MockBookmarkRepository,
}

impl Mocks {
    fn with_user(mut self) -> Self {
        self.users
            .expect_find_by_id()
            .times(1)
            .return_once(|id| Ok(Some(User::new(id, "mina"))));
        self
    }

    fn with_worksheet(mut self) -> Self {
        self.worksheets
            .expect_find_by_id()
            .times(1)
            .return_once(|id| {
                let draft =
                    WorksheetDraft::new(UserId::new(1), "A", "shift", 0, PayModifiers::default())
                        .expect("valid draft");
                Ok(Some(Worksheet::new(id, draft, false, Utc::now())))
            });
        self
    }

    fn with_posting(mut self) -> Self {
        self.postings
            .expect_find_by_id()
            .times(1)
            .return_once(|id| Ok(Some(posting(id.get(), 0))));
        self
    }

    fn into_service(self) -> Service {
        PostingService::new(
            Arc::new(self.users),
            Arc::new(self.worksheets),
            Arc::new(self.postings),
            Arc::new(self.bookmarks),
        )
    }
}

fn posting(id: i64, bookmark_count: u32) -> Posting {
    let draft = PostingDraft::new(UserId::new(1), WorksheetId::new(2), "title", "body")
        .expect("valid draft");
    Posting::new(PostingId::new(id), draft, bookmark_count, Utc::now())
}

#[fixture]
fn create_request() -> CreatePostingRequest {
    CreatePostingRequest {
        user_id: UserId::new(1),
        worksheet_id: WorksheetId::new(2),
        title: "Night shift pay".to_owned(),
        content: "Was this calculated right?".to_owned(),
    }
}

fn bookmark_request(bookmarked: bool) -> ToggleBookmarkRequest {
    ToggleBookmarkRequest {
        user_id: UserId::new(1),
        posting_id: PostingId::new(5),
        bookmarked,
    }
}

#[rstest]
#[tokio::test]
async fn create_validates_user_then_worksheet(create_request: CreatePostingRequest) {
    let mut mocks = Mocks::default().with_user().with_worksheet();
    mocks.postings.expect_insert().times(1).return_once(|draft| {
        Ok(Posting::new(
            PostingId::new(21),
            draft.clone(),
            0,
            Utc::now(),
        ))
    });

    let response = mocks
        .into_service()
        .create(create_request)
        .await
        .expect("posting created");

    assert_eq!(response.posting_id, PostingId::new(21));
}

#[rstest]
#[tokio::test]
async fn create_with_missing_worksheet_writes_nothing(create_request: CreatePostingRequest) {
    let mut mocks = Mocks::default().with_user();
    mocks
        .worksheets
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(None));
    mocks.postings.expect_insert().never();

    let err = mocks
        .into_service()
        .create(create_request)
        .await
        .expect_err("missing worksheet");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "worksheet 2 not found");
}

#[rstest]
#[tokio::test]
async fn create_stops_at_first_missing_reference(create_request: CreatePostingRequest) {
    let mut mocks = Mocks::default();
    mocks
        .users
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(None));
    mocks.worksheets.expect_find_by_id().never();
    mocks.postings.expect_insert().never();

    let err = mocks
        .into_service()
        .create(create_request)
        .await
        .expect_err("missing user");

    assert_eq!(err.message(), "user 1 not found");
}

#[rstest]
#[tokio::test]
async fn create_rejects_blank_title(mut create_request: CreatePostingRequest) {
    create_request.title = "   ".to_owned();

    let err = Mocks::default()
        .into_service()
        .create(create_request)
        .await
        .expect_err("blank title");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[case(true, ToggleOutcome::Associated { count: 1 }, true, 1)]
#[case(false, ToggleOutcome::Dissociated { count: 0 }, false, 0)]
#[tokio::test]
async fn toggle_bookmark_reports_change(
    #[case] bookmarked: bool,
    #[case] outcome: ToggleOutcome,
    #[case] created: bool,
    #[case] count: u32,
) {
    let mut mocks = Mocks::default().with_user().with_posting();
    mocks
        .bookmarks
        .expect_toggle()
        .withf(move |user, posting, desired| {
            *user == UserId::new(1) && *posting == PostingId::new(5) && *desired == bookmarked
        })
        .times(1)
        .return_once(move |_, _, _| Ok(outcome));

    let response = mocks
        .into_service()
        .toggle_bookmark(bookmark_request(bookmarked))
        .await
        .expect("toggle succeeds");

    assert_eq!(response.created, created);
    assert_eq!(response.bookmark_count, count);
}

#[rstest]
#[case(true, ToggleOutcome::AlreadyAssociated, ErrorCode::Conflict, "bookmark already exists")]
#[case(false, ToggleOutcome::NotAssociated, ErrorCode::NotFound, "bookmark not found")]
#[case(true, ToggleOutcome::TargetMissing, ErrorCode::NotFound, "posting 5 not found")]
#[tokio::test]
async fn toggle_bookmark_rejections(
    #[case] bookmarked: bool,
    #[case] outcome: ToggleOutcome,
    #[case] code: ErrorCode,
    #[case] message: &str,
) {
    let mut mocks = Mocks::default().with_user().with_posting();
    mocks
        .bookmarks
        .expect_toggle()
        .times(1)
        .return_once(move |_, _, _| Ok(outcome));

    let err = mocks
        .into_service()
        .toggle_bookmark(bookmark_request(bookmarked))
        .await
        .expect_err("toggle rejected");

    assert_eq!(err.code(), code);
    assert_eq!(err.message(), message);
}

#[rstest]
#[tokio::test]
async fn toggle_bookmark_on_missing_posting_skips_toggle() {
    let mut mocks = Mocks::default().with_user();
    mocks
        .postings
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(None));
    mocks.bookmarks.expect_toggle().never();

    let err = mocks
        .into_service()
        .toggle_bookmark(bookmark_request(true))
        .await
        .expect_err("missing posting");

    assert_eq!(err.message(), "posting 5 not found");
}

#[rstest]
#[tokio::test]
async fn list_of_empty_board_is_not_found() {
    let mut mocks = Mocks::default();
    mocks
        .postings
        .expect_list_all()
        .times(1)
        .return_once(|| Ok(Vec::new()));

    let err = mocks.into_service().list().await.expect_err("empty board");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "no postings found");
}

#[rstest]
#[tokio::test]
async fn list_returns_every_posting() {
    let mut mocks = Mocks::default();
    mocks
        .postings
        .expect_list_all()
        .times(1)
        .return_once(|| Ok(vec![posting(1, 0), posting(2, 3)]));

    let postings = mocks.into_service().list().await.expect("postings listed");

    assert_eq!(postings.len(), 2);
    assert_eq!(postings[1].bookmark_count(), 3);
}
