//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quill_entity::post::{Post, PostWithAuthor};
use quill_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// User summary for responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
        }
    }
}

/// Register/login response. The session token itself travels only in the
/// cookie; the body reports who is now logged in and until when.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The authenticated user.
    pub user: UserResponse,
    /// Session expiry.
    pub session_expires_at: DateTime<Utc>,
}

/// Post summary for list and mutation responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    /// Post ID.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Body.
    pub body: String,
    /// Owning user's id.
    pub author_id: i64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
            author_id: post.author_id,
            created_at: post.created_at,
        }
    }
}

/// Single-post view, including the author's username and whether the
/// viewer owns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostViewResponse {
    /// Post ID.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Body.
    pub body: String,
    /// Owning user's id.
    pub author_id: i64,
    /// Owning user's username.
    pub author_username: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Whether the viewer owns this post.
    pub is_owner: bool,
}

impl PostViewResponse {
    /// Builds a view response from the joined post and the viewer's
    /// ownership flag.
    pub fn new(post: PostWithAuthor, is_owner: bool) -> Self {
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
            author_id: post.author_id,
            author_username: post.author_username,
            created_at: post.created_at,
            is_owner,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}
