//! Post service — list, view, create, and ownership-guarded mutations.

use std::sync::Arc;

use tracing::info;

use quill_auth::guard::{AccessDecision, ViewDecision, authorize_mutation, authorize_view};
use quill_auth::identity::Identity;
use quill_core::error::AppError;
use quill_core::result::AppResult;
use quill_database::repositories::PostRepository;
use quill_entity::post::{CreatePost, Post, PostOwnership, PostWithAuthor, UpdatePost};

use super::validation::validate_post;

const LOGIN_REQUIRED: &str = "You must be logged in";
const POST_NOT_FOUND: &str = "Post not found";

/// A single post as seen by a specific viewer.
#[derive(Debug, Clone)]
pub struct PostView {
    /// The post with its author's username.
    pub post: PostWithAuthor,
    /// Whether the viewer owns the post (drives edit/delete affordances).
    pub is_owner: bool,
}

/// Handles post operations. Mutations fetch the ownership row, apply the
/// guard, and mutate inside one transaction so ownership cannot change
/// between check and act.
#[derive(Debug, Clone)]
pub struct PostService {
    /// Post repository.
    post_repo: Arc<PostRepository>,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(post_repo: Arc<PostRepository>) -> Self {
        Self { post_repo }
    }

    /// Lists the caller's own posts, newest first.
    pub async fn list_own(&self, identity: &Identity) -> AppResult<Vec<Post>> {
        let Some(user_id) = identity.user_id() else {
            return Err(AppError::authentication(LOGIN_REQUIRED));
        };
        self.post_repo.list_by_author(user_id).await
    }

    /// Creates a post owned by the caller.
    pub async fn create(&self, identity: &Identity, title: &str, body: &str) -> AppResult<Post> {
        let Some(user_id) = identity.user_id() else {
            return Err(AppError::authentication(LOGIN_REQUIRED));
        };

        let title = title.trim().to_string();
        let body = body.trim().to_string();

        let errors = validate_post(&title, &body);
        if !errors.is_empty() {
            return Err(AppError::validation_messages(errors));
        }

        let post = self
            .post_repo
            .create(&CreatePost {
                title,
                body,
                author_id: user_id,
            })
            .await?;

        info!(post_id = post.id, author_id = user_id, "post created");
        Ok(post)
    }

    /// Fetches a single post for viewing. Any authenticated user may view;
    /// the result carries `is_owner` for the caller's affordances.
    pub async fn view(&self, identity: &Identity, post_id: i64) -> AppResult<PostView> {
        if !identity.is_authenticated() {
            return Err(AppError::authentication(LOGIN_REQUIRED));
        }

        let post = self.post_repo.find_with_author(post_id).await?;
        let ownership = post.as_ref().map(|p| PostOwnership {
            id: p.id,
            author_id: p.author_id,
        });

        match (authorize_view(identity, ownership.as_ref()), post) {
            (ViewDecision::Allowed { is_owner }, Some(post)) => Ok(PostView { post, is_owner }),
            (ViewDecision::Allowed { .. }, None) | (ViewDecision::NotFound, _) => {
                Err(AppError::not_found(POST_NOT_FOUND))
            }
            (ViewDecision::Unauthenticated, _) => Err(AppError::authentication(LOGIN_REQUIRED)),
        }
    }

    /// Updates a post the caller owns.
    pub async fn update(
        &self,
        identity: &Identity,
        post_id: i64,
        input: UpdatePost,
    ) -> AppResult<Post> {
        let mut tx = self.post_repo.begin().await?;
        let ownership = PostRepository::ownership_for_update(&mut tx, post_id).await?;

        match authorize_mutation(identity, ownership.as_ref()) {
            AccessDecision::Allowed => {}
            AccessDecision::Unauthenticated => {
                return Err(AppError::authentication(LOGIN_REQUIRED));
            }
            AccessDecision::Forbidden => {
                return Err(AppError::authorization("Not the owner of this post"));
            }
            AccessDecision::NotFound => return Err(AppError::not_found(POST_NOT_FOUND)),
        }

        let input = UpdatePost {
            title: input.title.trim().to_string(),
            body: input.body.trim().to_string(),
        };
        let errors = validate_post(&input.title, &input.body);
        if !errors.is_empty() {
            // Dropping the transaction releases the row lock.
            return Err(AppError::validation_messages(errors));
        }

        let post = PostRepository::update_in_tx(&mut tx, post_id, &input).await?;
        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit update: {e}")))?;

        info!(post_id, "post updated");
        Ok(post)
    }

    /// Deletes a post the caller owns.
    pub async fn delete(&self, identity: &Identity, post_id: i64) -> AppResult<()> {
        let mut tx = self.post_repo.begin().await?;
        let ownership = PostRepository::ownership_for_update(&mut tx, post_id).await?;

        match authorize_mutation(identity, ownership.as_ref()) {
            AccessDecision::Allowed => {}
            AccessDecision::Unauthenticated => {
                return Err(AppError::authentication(LOGIN_REQUIRED));
            }
            AccessDecision::Forbidden => {
                return Err(AppError::authorization("Not the owner of this post"));
            }
            AccessDecision::NotFound => return Err(AppError::not_found(POST_NOT_FOUND)),
        }

        PostRepository::delete_in_tx(&mut tx, post_id).await?;
        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit delete: {e}")))?;

        info!(post_id, "post deleted");
        Ok(())
    }
}
