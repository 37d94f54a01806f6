//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use brandkit_lookup::InMemoryDirectory;
use brandkit_types::{FlatPost, FlatUser, Post, PostId, RecordId, User, UserId};

pub const ADA: u64 = 7;
pub const GRACE: u64 = 42;
pub const POST: u64 = 42;

/// Tolerance comparison for converted amounts.
pub fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

/// Post `POST` by Ada, with a user whose id collides with the post id.
pub fn colliding_directory() -> InMemoryDirectory {
    InMemoryDirectory::new()
        .with_user(User {
            id: UserId::from_unverified(ADA),
            name: "Ada".to_string(),
        })
        .with_user(User {
            id: UserId::from_unverified(GRACE),
            name: "Grace".to_string(),
        })
        .with_post(Post {
            id: PostId::from_unverified(POST),
            author_id: UserId::from_unverified(ADA),
            title: "Branding in practice".to_string(),
            body: "Two numbers, two types.".to_string(),
        })
        .with_flat_user(FlatUser {
            id: RecordId::from_unverified(ADA),
            name: "Ada".to_string(),
        })
        .with_flat_user(FlatUser {
            id: RecordId::from_unverified(GRACE),
            name: "Grace".to_string(),
        })
        .with_flat_post(FlatPost {
            id: RecordId::from_unverified(POST),
            author_id: RecordId::from_unverified(ADA),
            title: "Branding in practice".to_string(),
            body: "Two numbers, two types.".to_string(),
        })
}
