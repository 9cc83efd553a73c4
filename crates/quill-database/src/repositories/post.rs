//! Post repository implementation.
//!
//! Mutations run inside a caller-owned transaction: the ownership row is
//! fetched with `FOR UPDATE` so ownership cannot change between the guard
//! decision and the mutation.

use sqlx::{PgPool, Postgres, Transaction};

use quill_core::error::{AppError, ErrorKind};
use quill_core::result::AppResult;
use quill_entity::post::{CreatePost, Post, PostOwnership, PostWithAuthor, UpdatePost};

/// Repository for post CRUD and ownership queries.
#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new post repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction for a guarded mutation.
    pub async fn begin(&self) -> AppResult<Transaction<'static, Postgres>> {
        self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })
    }

    /// Find a post joined with its author's username.
    pub async fn find_with_author(&self, id: i64) -> AppResult<Option<PostWithAuthor>> {
        sqlx::query_as::<_, PostWithAuthor>(
            "SELECT posts.id, posts.title, posts.body, posts.author_id, \
                    users.username AS author_username, posts.created_at \
             FROM posts INNER JOIN users ON posts.author_id = users.id \
             WHERE posts.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find post", e))
    }

    /// List a user's posts, newest first.
    pub async fn list_by_author(&self, author_id: i64) -> AppResult<Vec<Post>> {
        sqlx::query_as::<_, Post>(
            "SELECT * FROM posts WHERE author_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list posts", e))
    }

    /// Create a new post.
    pub async fn create(&self, data: &CreatePost) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(
            "INSERT INTO posts (title, body, author_id) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.body)
        .bind(data.author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create post", e))
    }

    /// Fetch a post's ownership projection inside a transaction, locking the
    /// row until the transaction ends.
    pub async fn ownership_for_update(
        tx: &mut Transaction<'_, Postgres>,
        id: i64,
    ) -> AppResult<Option<PostOwnership>> {
        sqlx::query_as::<_, PostOwnership>(
            "SELECT id, author_id FROM posts WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock post", e))
    }

    /// Update a post's title and body within the caller's transaction.
    pub async fn update_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        id: i64,
        data: &UpdatePost,
    ) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(
            "UPDATE posts SET title = $2, body = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.body)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update post", e))
    }

    /// Delete a post within the caller's transaction.
    pub async fn delete_in_tx(tx: &mut Transaction<'_, Postgres>, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete post", e))?;
        Ok(())
    }
}
