//! Users and posts with branded identifiers.
//!
//! [`UserId`] and [`PostId`] are both `u64` underneath. Because they carry
//! different tags, handing a post's own id to a user lookup does not compile:
//!
//! ```compile_fail,E0308
//! use brandkit_types::{Post, UserId};
//!
//! fn user_to_fetch(post: &Post) -> UserId {
//!     post.id
//! }
//! ```
//!
//! The [`RecordId`] family models records whose ids all share one brand. There
//! the same swap type-checks, which is the limit of branding: it separates
//! differently tagged values, not two values that happen to carry the same tag.

use serde::{Deserialize, Serialize};

use crate::brand::{Brand, BrandTag};

#[derive(Debug)]
pub enum UserTag {}

impl BrandTag for UserTag {
    const NAME: &'static str = "user";
}

#[derive(Debug)]
pub enum PostTag {}

impl BrandTag for PostTag {
    const NAME: &'static str = "post";
}

pub type UserId = Brand<u64, UserTag>;
pub type PostId = Brand<u64, PostTag>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub title: String,
    pub body: String,
}

// ============================================================================
// Shared-brand records
// ============================================================================

/// One tag for every record kind.
#[derive(Debug)]
pub enum Record {}

impl BrandTag for Record {
    const NAME: &'static str = "record";
}

pub type RecordId = Brand<u64, Record>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatUser {
    pub id: RecordId,
    pub name: String,
}

/// A post whose own id and author id are interchangeable to the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatPost {
    pub id: RecordId,
    pub author_id: RecordId,
    pub title: String,
    pub body: String,
}
