//! Existence checks shared by the domain services.
//!
//! Services resolve referenced entities in request-field order and stop at
//! the first one that is missing. The not-found message names the entity and
//! the identifier the caller supplied.

use std::fmt::Display;

use crate::domain::ports::{
    CommentRepository, PostingRepository, RepositoryError, UserRepository, WorksheetRepository,
};
use crate::domain::{
    Comment, CommentId, Error, Posting, PostingId, User, UserId, Worksheet, WorksheetId,
};

pub(crate) fn map_repository_error(error: RepositoryError) -> Error {
    match error {
        RepositoryError::Connection { message } => {
            Error::service_unavailable(format!("repository unavailable: {message}"))
        }
        RepositoryError::Query { message } => {
            Error::internal(format!("repository error: {message}"))
        }
    }
}

fn require<T>(found: Option<T>, entity: &str, id: impl Display) -> Result<T, Error> {
    found.ok_or_else(|| Error::not_found(format!("{entity} {id} not found")))
}

pub(crate) async fn require_user<U>(users: &U, id: UserId) -> Result<User, Error>
where
    U: UserRepository + ?Sized,
{
    let found = users.find_by_id(id).await.map_err(map_repository_error)?;
    require(found, "user", id)
}

pub(crate) async fn require_worksheet<W>(worksheets: &W, id: WorksheetId) -> Result<Worksheet, Error>
where
    W: WorksheetRepository + ?Sized,
{
    let found = worksheets
        .find_by_id(id)
        .await
        .map_err(map_repository_error)?;
    require(found, "worksheet", id)
}

pub(crate) async fn require_posting<P>(postings: &P, id: PostingId) -> Result<Posting, Error>
where
    P: PostingRepository + ?Sized,
{
    let found = postings.find_by_id(id).await.map_err(map_repository_error)?;
    require(found, "posting", id)
}

pub(crate) async fn require_comment<C>(comments: &C, id: CommentId) -> Result<Comment, Error>
where
    C: CommentRepository + ?Sized,
{
    let found = comments.find_by_id(id).await.map_err(map_repository_error)?;
    require(found, "comment", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockUserRepository;
    use rstest::rstest;

    #[rstest]
    #[case(RepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(RepositoryError::query("bad column"), ErrorCode::InternalError)]
    fn repository_errors_map_to_codes(#[case] error: RepositoryError, #[case] code: ErrorCode) {
        assert_eq!(map_repository_error(error).code(), code);
    }

    #[tokio::test]
    async fn missing_user_names_identifier() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .times(1)
            .return_once(|_| Ok(None));

        let err = require_user(&users, UserId::new(7))
            .await
            .expect_err("user is missing");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "user 7 not found");
    }

    #[tokio::test]
    async fn present_user_is_returned() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .times(1)
            .return_once(|id| Ok(Some(User::new(id, "mina"))));

        let user = require_user(&users, UserId::new(3))
            .await
            .expect("user exists");
        assert_eq!(user.nickname(), "mina");
    }
}
