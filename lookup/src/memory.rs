use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use brandkit_types::{FlatPost, FlatUser, Post, PostId, RecordId, User, UserId};

use crate::flat::{FlatPostStore, FlatUserStore};
use crate::{LookupError, LookupFut, PostStore, UserStore};

/// A lookup issued against [`InMemoryDirectory`], with the widened id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Post(u64),
    User(u64),
    FlatPost(u64),
    FlatUser(u64),
}

/// In-memory stand-in for the post and user stores.
///
/// Records every lookup at the moment it is issued, so callers can assert on
/// ordering as well as results.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    posts: HashMap<PostId, Post>,
    users: HashMap<UserId, User>,
    flat_posts: HashMap<RecordId, FlatPost>,
    flat_users: HashMap<RecordId, FlatUser>,
    outage: Option<String>,
    calls: Mutex<Vec<Call>>,
}

impl InMemoryDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_post(mut self, post: Post) -> Self {
        self.posts.insert(post.id, post);
        self
    }

    #[must_use]
    pub fn with_user(mut self, user: User) -> Self {
        self.users.insert(user.id, user);
        self
    }

    #[must_use]
    pub fn with_flat_post(mut self, post: FlatPost) -> Self {
        self.flat_posts.insert(post.id, post);
        self
    }

    #[must_use]
    pub fn with_flat_user(mut self, user: FlatUser) -> Self {
        self.flat_users.insert(user.id, user);
        self
    }

    /// Makes every lookup fail with [`LookupError::Unavailable`].
    #[must_use]
    pub fn unavailable(mut self, message: impl Into<String>) -> Self {
        self.outage = Some(message.into());
        self
    }

    /// Lookups issued so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: Call) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }

    fn available(&self) -> Result<(), LookupError> {
        match &self.outage {
            Some(message) => Err(LookupError::Unavailable {
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl PostStore for InMemoryDirectory {
    fn fetch_post(&self, id: PostId) -> LookupFut<'_, Post> {
        self.record(Call::Post(id.into_inner()));
        Box::pin(async move {
            self.available()?;
            self.posts
                .get(&id)
                .cloned()
                .ok_or(LookupError::PostNotFound { id })
        })
    }
}

impl UserStore for InMemoryDirectory {
    fn fetch_user(&self, id: UserId) -> LookupFut<'_, User> {
        self.record(Call::User(id.into_inner()));
        Box::pin(async move {
            self.available()?;
            self.users
                .get(&id)
                .cloned()
                .ok_or(LookupError::UserNotFound { id })
        })
    }
}

impl FlatPostStore for InMemoryDirectory {
    fn fetch_flat_post(&self, id: RecordId) -> LookupFut<'_, FlatPost> {
        self.record(Call::FlatPost(id.into_inner()));
        Box::pin(async move {
            self.available()?;
            self.flat_posts
                .get(&id)
                .cloned()
                .ok_or(LookupError::RecordNotFound { id })
        })
    }
}

impl FlatUserStore for InMemoryDirectory {
    fn fetch_flat_user(&self, id: RecordId) -> LookupFut<'_, FlatUser> {
        self.record(Call::FlatUser(id.into_inner()));
        Box::pin(async move {
            self.available()?;
            self.flat_users
                .get(&id)
                .cloned()
                .ok_or(LookupError::RecordNotFound { id })
        })
    }
}
