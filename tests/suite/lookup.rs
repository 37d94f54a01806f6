//! Author lookup tests

use brandkit_lookup::{Call, LookupError, author_of_post, flat};
use brandkit_types::{PostId, RecordId, UserId};

use crate::common::{ADA, GRACE, POST, colliding_directory};

#[tokio::test]
async fn branded_lookup_finds_the_author() {
    let dir = colliding_directory();
    let author = author_of_post(&dir, &dir, PostId::from_unverified(POST))
        .await
        .unwrap();
    assert_eq!(author.id, UserId::from_unverified(ADA));
    assert_eq!(dir.calls(), vec![Call::Post(POST), Call::User(ADA)]);
}

// Known limitation: with shared-brand ids the post id reaches the user lookup.
#[tokio::test]
async fn flat_lookup_type_checks_and_returns_wrong_user() {
    let dir = colliding_directory();
    let found = flat::author_of_post(&dir, &dir, RecordId::from_unverified(POST))
        .await
        .unwrap();
    assert_eq!(found.id, RecordId::from_unverified(GRACE));
    assert_eq!(found.name, "Grace");
    assert_eq!(dir.calls(), vec![Call::FlatPost(POST), Call::FlatUser(POST)]);
}

#[tokio::test]
async fn lookups_run_concurrently_without_interference() {
    let dir = colliding_directory();
    let (branded, flat_result) = tokio::join!(
        author_of_post(&dir, &dir, PostId::from_unverified(POST)),
        flat::author_of_post(&dir, &dir, RecordId::from_unverified(POST)),
    );
    assert_eq!(branded.unwrap().name, "Ada");
    assert_eq!(flat_result.unwrap().name, "Grace");

    // Interleaving is up to the executor; each variant's own order is not.
    let calls = dir.calls();
    assert_eq!(calls.len(), 4, "{calls:?}");
    let position = |call: Call| {
        calls
            .iter()
            .position(|&logged| logged == call)
            .unwrap_or_else(|| panic!("{call:?} missing from {calls:?}"))
    };
    assert!(position(Call::Post(POST)) < position(Call::User(ADA)));
    assert!(position(Call::FlatPost(POST)) < position(Call::FlatUser(POST)));
}

#[tokio::test]
async fn unavailable_store_fails_both_variants() {
    let dir = colliding_directory().unavailable("offline");
    let expected = LookupError::Unavailable {
        message: "offline".to_string(),
    };
    assert_eq!(
        author_of_post(&dir, &dir, PostId::from_unverified(POST))
            .await
            .unwrap_err(),
        expected
    );
    assert_eq!(
        flat::author_of_post(&dir, &dir, RecordId::from_unverified(POST))
            .await
            .unwrap_err(),
        expected
    );
}
