//! Typed client for the remote posts/comments feed.
//!
//! This module provides:
//! - Entity models decoded from the feed's JSON responses
//! - A fetch client with bounded retries and a closed error taxonomy
//! - A cached wrapper implementing the cache-first read path

mod cached_client;
mod client;
pub(crate) mod types;

pub use cached_client::CachedFeedClient;
pub use client::FeedClient;
pub use types::{Comment, Post};
