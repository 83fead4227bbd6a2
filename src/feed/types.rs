use serde::{Deserialize, Serialize};

/// A single post retrieved from the feed.
///
/// Decoding is field-exact: a missing or mistyped required field fails the
/// whole response, never a partial one. Unknown extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
  pub id: i64,
  pub title: String,
  pub body: String,
  /// Grouping key; many posts share a user
  #[serde(rename = "userId")]
  pub user_id: i64,
}

/// A single comment retrieved from the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
  pub id: i64,
  /// References a `Post::id`; not enforced
  #[serde(rename = "postId")]
  pub post_id: i64,
  pub name: String,
  pub email: String,
  pub body: String,
}
