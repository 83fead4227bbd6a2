//! Append-only in-memory store of fetched entities.
//!
//! The store is created empty at process start, lives for the process
//! lifetime, and is never pruned or persisted. Appends are unconditional
//! concatenation: ids are NOT deduplicated, so repeated fetches of
//! overlapping data grow the store. Consumers query snapshots by predicate
//! before issuing network requests.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::feed::types::{Comment, Post};

/// Shared handle to the in-memory entity store.
///
/// Cloning yields another handle to the same underlying data. Appends may
/// arrive from any runtime worker thread, so the backing state sits behind
/// a mutex; reads return snapshot clones and never hold the lock across an
/// await point.
#[derive(Clone, Default)]
pub struct Store {
  inner: Arc<Mutex<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
  comments: Vec<Comment>,
  posts: Vec<Post>,
}

impl Store {
  /// Create an empty store.
  pub fn new() -> Self {
    Self::default()
  }

  /// Snapshot of all stored posts in insertion order.
  pub fn posts(&self) -> Vec<Post> {
    self.lock().posts.clone()
  }

  /// Snapshot of all stored comments in insertion order.
  pub fn comments(&self) -> Vec<Comment> {
    self.lock().comments.clone()
  }

  /// Append posts without checking for existing ids.
  pub fn append_posts(&self, posts: Vec<Post>) {
    self.lock().posts.extend(posts);
  }

  /// Append comments without checking for existing ids.
  pub fn append_comments(&self, comments: Vec<Comment>) {
    self.lock().comments.extend(comments);
  }

  /// Posts belonging to one user, in insertion order.
  pub fn posts_by_user(&self, user_id: i64) -> Vec<Post> {
    self
      .lock()
      .posts
      .iter()
      .filter(|post| post.user_id == user_id)
      .cloned()
      .collect()
  }

  /// Comments belonging to one post, in insertion order.
  pub fn comments_for_post(&self, post_id: i64) -> Vec<Comment> {
    self
      .lock()
      .comments
      .iter()
      .filter(|comment| comment.post_id == post_id)
      .cloned()
      .collect()
  }

  fn lock(&self) -> MutexGuard<'_, StoreInner> {
    // A poisoning panic cannot leave the vectors half-appended, so the
    // data is still usable; recover the guard instead of propagating.
    match self.inner.lock() {
      Ok(guard) => guard,
      Err(poisoned) => poisoned.into_inner(),
    }
  }
}
