//! Integration tests for the Postgres user repository.

mod common;

use tally_core::ledger::{LedgerError, UserRepository as _};
use tally_db::UserRepository;
use tally_shared::types::UserId;

#[tokio::test]
#[ignore = "requires Postgres at DATABASE_URL"]
async fn test_create_and_find() {
    let repo = UserRepository::new(common::connect().await);

    let user = repo.create_user("Ada", "ada@example.com").await.unwrap();
    let found = repo.find_by_id(user.id).await.unwrap();

    assert_eq!(found, Some(user));
}

#[tokio::test]
#[ignore = "requires Postgres at DATABASE_URL"]
async fn test_update_profile_visible_immediately() {
    let repo = UserRepository::new(common::connect().await);
    let user = repo.create_user("Ada", "ada@old.example").await.unwrap();

    repo.update_profile(user.id, "Ada Lovelace", "ada@example.com")
        .await
        .unwrap();

    assert_eq!(
        repo.get_email(user.id).await.unwrap().as_deref(),
        Some("ada@example.com")
    );
}

#[tokio::test]
#[ignore = "requires Postgres at DATABASE_URL"]
async fn test_update_profile_unknown_user() {
    let repo = UserRepository::new(common::connect().await);

    let err = repo
        .update_profile(UserId::new(), "Nobody", "nobody@example.com")
        .await
        .unwrap_err();

    assert!(matches!(err, LedgerError::UserNotFound(_)));
}

#[tokio::test]
#[ignore = "requires Postgres at DATABASE_URL"]
async fn test_get_email_unknown_user() {
    let repo = UserRepository::new(common::connect().await);

    assert!(repo.get_email(UserId::new()).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Postgres at DATABASE_URL"]
async fn test_find_unknown_user_is_none() {
    let repo = UserRepository::new(common::connect().await);

    assert!(repo.find_by_id(UserId::new()).await.unwrap().is_none());
}
