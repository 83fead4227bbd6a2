//! Cached feed client that wraps FeedClient with a cache-first read path.

use crate::error::FetchError;
use crate::store::Store;

use super::client::FeedClient;
use super::types::{Comment, Post};

/// Feed client with cache-first reads.
///
/// Wraps the underlying FeedClient and the shared store: each read filters
/// the store snapshot first and only falls through to the network when the
/// filtered result is empty. Successful fetches are appended wholesale and
/// the filter re-applied, so the store keeps whatever the network returned,
/// duplicates included.
#[derive(Clone)]
pub struct CachedFeedClient {
  inner: FeedClient,
  store: Store,
}

impl CachedFeedClient {
  pub fn new(inner: FeedClient, store: Store) -> Self {
    Self { inner, store }
  }

  /// All posts, fetched once and served from the store afterwards.
  pub async fn posts(&self) -> Result<Vec<Post>, FetchError> {
    let cached = self.store.posts();
    if !cached.is_empty() {
      return Ok(cached);
    }

    let posts = self.inner.fetch_posts().await?;
    self.store.append_posts(posts);
    Ok(self.store.posts())
  }

  /// Comments for one post, cache-first.
  pub async fn comments_for_post(&self, post_id: i64) -> Result<Vec<Comment>, FetchError> {
    let cached = self.store.comments_for_post(post_id);
    if !cached.is_empty() {
      return Ok(cached);
    }

    let comments = self.inner.fetch_comments(post_id).await?;
    self.store.append_comments(comments);
    Ok(self.store.comments_for_post(post_id))
  }

  /// Posts belonging to one user, filtered from the store only.
  ///
  /// Never fetches: the posts list is expected to be populated already by
  /// the time a per-user view is requested.
  pub fn posts_by_user(&self, user_id: i64) -> Vec<Post> {
    self.store.posts_by_user(user_id)
  }

  /// The shared store this client reads from and appends to.
  pub fn store(&self) -> &Store {
    &self.store
  }
}
