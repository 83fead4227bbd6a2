//! Feed API client with bounded retries.
//!
//! Each logical fetch runs as an explicit loop over HTTP attempts: one GET
//! per attempt, the outcome classified into success, a terminal failure, or
//! a transient failure that is retried after a flat delay while budget
//! remains. Attempts within one call are strictly sequential; a retry never
//! starts before the previous attempt's outcome is classified.

use std::time::Duration;

use color_eyre::{eyre::eyre, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::FetchError;

use super::types::{Comment, Post};

/// Additional attempts after the first when fetching posts.
const POSTS_RETRY_BUDGET: u32 = 3;
/// Additional attempts after the first when fetching comments.
const COMMENTS_RETRY_BUDGET: u32 = 1;

/// Feed API client.
///
/// Holds the HTTP connection pool and the validated base origin; carries no
/// per-call state. Fetch methods return either the decoded entities or one
/// terminal [`FetchError`], never partial results. The client does not touch
/// the shared store; merging results is the caller's responsibility.
#[derive(Clone)]
pub struct FeedClient {
  http: reqwest::Client,
  base_url: Url,
  retry_delay: Duration,
}

/// Outcome of a single HTTP attempt.
enum Attempt<T> {
  Success(T),
  /// Classified failure that must not be retried.
  Fatal(FetchError),
  /// Transient failure; carries the error to surface once the budget is
  /// exhausted.
  Transient(FetchError),
}

impl FeedClient {
  pub fn new(config: &ClientConfig) -> Result<Self> {
    let base_url = Url::parse(&config.base_url)
      .map_err(|e| eyre!("Invalid base url {}: {}", config.base_url, e))?;
    if base_url.cannot_be_a_base() {
      return Err(eyre!("Base url cannot carry path segments: {}", config.base_url));
    }

    // Only the total per-attempt timeout is set. Without a separate connect
    // timeout an attempt rides out the full window when connectivity is
    // missing instead of failing instantly.
    let http = reqwest::Client::builder()
      .timeout(config.timeout())
      .build()
      .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

    Ok(Self {
      http,
      base_url,
      retry_delay: config.retry_delay(),
    })
  }

  /// Fetch all posts.
  pub async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
    self.fetch_collection(&["posts"], POSTS_RETRY_BUDGET).await
  }

  /// Fetch the comments for a single post.
  pub async fn fetch_comments(&self, post_id: i64) -> Result<Vec<Comment>, FetchError> {
    self
      .fetch_collection(
        &["posts", &post_id.to_string(), "comments"],
        COMMENTS_RETRY_BUDGET,
      )
      .await
  }

  /// Fetch and decode a JSON array resource, retrying transient failures.
  ///
  /// `retries` is the budget of additional attempts after the first, so a
  /// call with budget N makes at most N+1 attempts. Terminal failures end
  /// the loop immediately regardless of remaining budget.
  async fn fetch_collection<T: DeserializeOwned>(
    &self,
    segments: &[&str],
    retries: u32,
  ) -> Result<Vec<T>, FetchError> {
    let url = self.collection_url(segments);
    let mut remaining = retries;
    let mut attempt = 1u32;

    loop {
      debug!(%url, attempt, "fetching collection");

      match self.attempt(&url).await {
        Attempt::Success(data) => return Ok(data),
        Attempt::Fatal(err) => {
          debug!(%url, %err, "terminal failure");
          return Err(err);
        }
        Attempt::Transient(err) => {
          if remaining == 0 {
            warn!(%url, %err, attempt, "retry budget exhausted");
            return Err(err);
          }
          remaining -= 1;
          attempt += 1;
          warn!(%url, %err, remaining, "transient failure, retrying after delay");
          tokio::time::sleep(self.retry_delay).await;
        }
      }
    }
  }

  /// Execute one GET and classify its outcome.
  async fn attempt<T: DeserializeOwned>(&self, url: &Url) -> Attempt<Vec<T>> {
    let response = match self.http.get(url.clone()).send().await {
      Ok(response) => response,
      Err(err) => return Attempt::Transient(transport_error_kind(&err)),
    };

    let status = response.status();
    if !status.is_success() {
      return match status {
        StatusCode::BAD_REQUEST => Attempt::Fatal(FetchError::BadRequest),
        StatusCode::NOT_FOUND => Attempt::Fatal(FetchError::NotFound),
        StatusCode::INTERNAL_SERVER_ERROR => Attempt::Fatal(FetchError::InternalServerError),
        _ => Attempt::Transient(FetchError::Unknown),
      };
    }

    let body = match response.bytes().await {
      Ok(body) => body,
      Err(err) => return Attempt::Transient(transport_error_kind(&err)),
    };

    if body.is_empty() {
      return Attempt::Fatal(FetchError::NoData);
    }

    match serde_json::from_slice(&body) {
      Ok(data) => Attempt::Success(data),
      Err(err) => {
        debug!(%url, %err, "response body failed to decode");
        Attempt::Fatal(FetchError::Decoding)
      }
    }
  }

  fn collection_url(&self, segments: &[&str]) -> Url {
    let mut url = self.base_url.clone();
    // Always Ok: cannot-be-a-base origins are rejected in `new`
    if let Ok(mut path) = url.path_segments_mut() {
      path.pop_if_empty().extend(segments);
    }
    url
  }
}

/// Terminal kind for a transport-level failure once the budget is spent.
fn transport_error_kind(err: &reqwest::Error) -> FetchError {
  if err.is_timeout() {
    FetchError::TimedOut
  } else {
    FetchError::Unknown
  }
}
