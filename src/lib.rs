//! Typed fetch client and in-memory store for a posts/comments feed.
//!
//! The core is two pieces: [`FeedClient`], which turns a logical request
//! ("all posts", "comments for post N") into bounded HTTP attempts and a
//! single typed outcome, and [`Store`], the append-only process-lifetime
//! cache those outcomes are merged into. [`CachedFeedClient`] composes the
//! two with a cache-first read path. Presentation is left entirely to the
//! consumer; failures come back as [`FetchError`] values, never as text.

pub mod config;
pub mod error;
pub mod feed;
pub mod store;

pub use config::{ClientConfig, Config};
pub use error::FetchError;
pub use feed::{CachedFeedClient, Comment, FeedClient, Post};
pub use store::Store;
