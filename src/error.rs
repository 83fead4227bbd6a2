//! Error taxonomy for feed fetches.
//!
//! A closed set of outcomes: every failed fetch maps to exactly one of these
//! kinds, and the display layer keys its message table on the stable
//! identifier strings, so both the variant set and `as_str` values must not
//! change without updating that table.

use std::fmt;

/// Terminal failure kinds returned by the feed client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchError {
  /// The server rejected the request with 400.
  BadRequest,
  /// The response body could not be decoded into the expected entities.
  Decoding,
  /// The server answered 500.
  InternalServerError,
  /// The server answered 2xx with an empty body.
  NoData,
  /// The server answered 404.
  NotFound,
  /// The attempt (and every retry) timed out.
  TimedOut,
  /// Any other failure: unexpected status codes or transport errors that
  /// outlived the retry budget.
  Unknown,
}

impl FetchError {
  /// Stable identifier for this kind.
  pub fn as_str(&self) -> &'static str {
    match self {
      FetchError::BadRequest => "badRequest",
      FetchError::Decoding => "decoding",
      FetchError::InternalServerError => "internalServerError",
      FetchError::NoData => "noData",
      FetchError::NotFound => "notFound",
      FetchError::TimedOut => "timedOut",
      FetchError::Unknown => "unknown",
    }
  }
}

impl fmt::Display for FetchError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::error::Error for FetchError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_identifiers_are_stable() {
    let expected = [
      (FetchError::BadRequest, "badRequest"),
      (FetchError::Decoding, "decoding"),
      (FetchError::InternalServerError, "internalServerError"),
      (FetchError::NoData, "noData"),
      (FetchError::NotFound, "notFound"),
      (FetchError::TimedOut, "timedOut"),
      (FetchError::Unknown, "unknown"),
    ];

    for (kind, id) in expected {
      assert_eq!(kind.as_str(), id);
      assert_eq!(kind.to_string(), id);
    }
  }
}
