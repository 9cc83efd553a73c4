//! Post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A blog post owned by a single author.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    /// Unique post identifier.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body (raw markup; escaping for display is the renderer's job).
    pub body: String,
    /// The owning user's id.
    pub author_id: i64,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
}

/// A post joined with its author's username, used for single-post views.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostWithAuthor {
    /// Unique post identifier.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub body: String,
    /// The owning user's id.
    pub author_id: i64,
    /// The owning user's username.
    pub author_username: String,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
}

/// Ownership projection of a post, used solely for authorization decisions.
///
/// Fetched fresh per request; caching it would allow a stale-owner bypass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PostOwnership {
    /// The post id.
    pub id: i64,
    /// The owning user's id.
    pub author_id: i64,
}

/// Data required to create a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    /// Post title.
    pub title: String,
    /// Post body.
    pub body: String,
    /// The authoring user's id.
    pub author_id: i64,
}

/// Data for updating an existing post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePost {
    /// New title.
    pub title: String,
    /// New body.
    pub body: String,
}
