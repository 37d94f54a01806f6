//! Lookups over records whose ids all share the [`RecordId`] brand.
//!
//! [`author_of_post`] here passes the post's own id to the user lookup instead
//! of its author id. Both are `RecordId`, so the compiler accepts the call and
//! the lookup returns whichever user happens to share the post's number, or
//! [`LookupError::RecordNotFound`]. The branded version in the crate root
//! cannot express this mistake. This one is kept as is and its behaviour is
//! pinned by tests; it is a known limitation, not something to quietly repair.
//!
//! [`LookupError::RecordNotFound`]: crate::LookupError::RecordNotFound

use brandkit_types::{FlatPost, FlatUser, RecordId};

use crate::{LookupError, LookupFut};

pub trait FlatPostStore: Send + Sync {
    fn fetch_flat_post(&self, id: RecordId) -> LookupFut<'_, FlatPost>;
}

pub trait FlatUserStore: Send + Sync {
    fn fetch_flat_user(&self, id: RecordId) -> LookupFut<'_, FlatUser>;
}

/// Fetches the post, then looks up a user by the post's *own* id.
pub async fn author_of_post<P, U>(
    posts: &P,
    users: &U,
    post_id: RecordId,
) -> Result<FlatUser, LookupError>
where
    P: FlatPostStore + ?Sized,
    U: FlatUserStore + ?Sized,
{
    let post = posts.fetch_flat_post(post_id).await?;
    tracing::debug!(post = %post.id, author = %post.author_id, "Resolving post author");
    users.fetch_flat_user(post.id).await
}
