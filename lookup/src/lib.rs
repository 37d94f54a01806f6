//! Post and user lookups keyed by branded ids.
//!
//! The stores are trait seams; the crate ships only [`InMemoryDirectory`], a
//! fake used by tests and the demo binary.
//!
//! [`author_of_post`] resolves a post's author in two dependent steps: the user
//! lookup is issued only once the post is available, because the user id comes
//! out of the post. [`flat::author_of_post`] is the same operation over
//! shared-brand ids, kept with its identifier swap intact.
//!
//! With distinct brands the swap is a type error:
//!
//! ```compile_fail,E0308
//! use brandkit_lookup::{InMemoryDirectory, UserStore};
//! use brandkit_types::Post;
//!
//! fn swapped(dir: &InMemoryDirectory, post: &Post) {
//!     let _ = dir.fetch_user(post.id);
//! }
//! ```

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use brandkit_types::{Post, PostId, RecordId, User, UserId};

pub mod flat;
mod memory;

pub use memory::{Call, InMemoryDirectory};

pub type LookupFut<'a, T> = Pin<Box<dyn Future<Output = Result<T, LookupError>> + Send + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("post {id} not found")]
    PostNotFound { id: PostId },
    #[error("user {id} not found")]
    UserNotFound { id: UserId },
    #[error("record {id} not found")]
    RecordNotFound { id: RecordId },
    #[error("store unavailable: {message}")]
    Unavailable { message: String },
}

pub trait PostStore: Send + Sync {
    fn fetch_post(&self, id: PostId) -> LookupFut<'_, Post>;
}

pub trait UserStore: Send + Sync {
    fn fetch_user(&self, id: UserId) -> LookupFut<'_, User>;
}

/// Fetches the post, then the user it names as author.
pub async fn author_of_post<P, U>(
    posts: &P,
    users: &U,
    post_id: PostId,
) -> Result<User, LookupError>
where
    P: PostStore + ?Sized,
    U: UserStore + ?Sized,
{
    let post = posts.fetch_post(post_id).await?;
    tracing::debug!(post = %post.id, author = %post.author_id, "Resolving post author");
    users.fetch_user(post.author_id).await
}
