use clap::Parser;
use color_eyre::{eyre::eyre, Result};
use std::path::PathBuf;

use twipsum::{CachedFeedClient, Comment, Config, FeedClient, FetchError, Post, Store};

#[derive(Parser, Debug)]
#[command(name = "twipsum")]
#[command(about = "Browse posts and comments from the feed")]
#[command(version)]
struct Args {
  /// Path to config file (default: $XDG_CONFIG_HOME/twipsum/config.yaml)
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Show only posts from this user
  #[arg(short, long)]
  user: Option<i64>,

  /// Show one post and its comments
  #[arg(short, long)]
  post: Option<i64>,
}

#[tokio::main]
async fn main() -> Result<()> {
  color_eyre::install()?;

  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  // Load configuration
  let config = Config::load(args.config.as_deref())?;

  let store = Store::new();
  let client = CachedFeedClient::new(FeedClient::new(&config.client)?, store);

  let posts = client
    .posts()
    .await
    .map_err(|e| eyre!("{}", error_message(e)))?;

  if let Some(post_id) = args.post {
    let post = posts
      .iter()
      .find(|p| p.id == post_id)
      .ok_or_else(|| eyre!("No post with id {}", post_id))?;
    show_post_detail(&client, post).await;
    return Ok(());
  }

  let posts = match args.user {
    Some(user_id) => client.posts_by_user(user_id),
    None => posts,
  };

  for post in &posts {
    print_post(post);
  }

  Ok(())
}

/// Print one post followed by its comment section.
///
/// Mirrors the detail view's header semantics: an empty or missing comment
/// collection still renders a count, while any other failure renders the
/// unavailable message instead of an error trace.
async fn show_post_detail(client: &CachedFeedClient, post: &Post) {
  print_post(post);
  println!();

  match client.comments_for_post(post.id).await {
    Ok(comments) => {
      println!("{} Comments", comments.len());
      for comment in &comments {
        println!();
        print_comment(comment);
      }
    }
    Err(FetchError::NoData) | Err(FetchError::NotFound) => {
      println!("0 Comments");
    }
    Err(_) => {
      println!("Data Unavailable");
    }
  }
}

fn print_post(post: &Post) {
  println!("#{} [user {}] {}", post.id, post.user_id, post.title);
  println!("  {}", post.body.replace('\n', "\n  "));
}

fn print_comment(comment: &Comment) {
  println!("  {} <{}>", comment.name, comment.email);
  println!("    {}", comment.body.replace('\n', "\n    "));
}

/// User-facing text for each fetch failure, keyed by the stable error kind.
fn error_message(err: FetchError) -> &'static str {
  match err {
    FetchError::BadRequest => "The request was not accepted",
    FetchError::Decoding => "The feed sent data that could not be read",
    FetchError::InternalServerError => "The feed had an internal problem",
    FetchError::NoData => "The feed sent no data",
    FetchError::NotFound => "The requested data does not exist",
    FetchError::TimedOut => "The feed took too long to respond",
    FetchError::Unknown => "Data Unavailable",
  }
}
