//! Seed data for the `author` command.
//!
//! Post 42 is written by user 7, and user 42 also exists, so the flat lookup's
//! id swap lands on a real but wrong user.

use brandkit_lookup::InMemoryDirectory;
use brandkit_types::{FlatPost, FlatUser, Post, PostId, RecordId, User, UserId};

const USERS: &[(u64, &str)] = &[(7, "Ada Lovelace"), (42, "Grace Hopper")];

const POSTS: &[(u64, u64, &str, &str)] = &[
    (
        42,
        7,
        "Branding in practice",
        "Two numbers, two types, one representation.",
    ),
    (
        3,
        42,
        "Phantom types",
        "A marker that costs nothing at runtime.",
    ),
];

pub fn directory() -> InMemoryDirectory {
    let mut dir = InMemoryDirectory::new();

    for &(id, name) in USERS {
        dir = dir
            .with_user(User {
                id: UserId::from_unverified(id),
                name: name.to_string(),
            })
            .with_flat_user(FlatUser {
                id: RecordId::from_unverified(id),
                name: name.to_string(),
            });
    }

    for &(id, author, title, body) in POSTS {
        dir = dir
            .with_post(Post {
                id: PostId::from_unverified(id),
                author_id: UserId::from_unverified(author),
                title: title.to_string(),
                body: body.to_string(),
            })
            .with_flat_post(FlatPost {
                id: RecordId::from_unverified(id),
                author_id: RecordId::from_unverified(author),
                title: title.to_string(),
                body: body.to_string(),
            });
    }

    dir
}
