//! Registration and login flows.

use std::sync::Arc;

use tracing::info;

use quill_auth::password::PasswordHasher;
use quill_auth::token::{SessionEncoder, SignedSession};
use quill_core::config::auth::AuthConfig;
use quill_core::error::{AppError, ErrorKind};
use quill_core::result::AppResult;
use quill_database::repositories::UserRepository;
use quill_entity::user::{CreateUser, User};

use super::validation::{INVALID_CREDENTIALS, validate_login, validate_registration};

/// Result of a successful registration or login: the user plus a freshly
/// minted session to hand to the client.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The authenticated user.
    pub user: User,
    /// The minted session token and its expiry.
    pub session: SignedSession,
}

/// Orchestrates registration and login.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Session token encoder.
    encoder: Arc<SessionEncoder>,
    /// Auth policy configuration.
    config: AuthConfig,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<SessionEncoder>,
        config: AuthConfig,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
            config,
        }
    }

    /// Registers a new user and logs them in.
    ///
    /// The uniqueness lookup runs before hashing so a doomed registration
    /// never pays the Argon2 cost. A concurrent registration that loses the
    /// insert race surfaces as the same "already taken" validation error.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<AuthenticatedUser> {
        let username = username.trim().to_string();

        let mut errors = validate_registration(&username, password, &self.config);

        if errors.is_empty() && self.user_repo.find_by_username(&username).await?.is_some() {
            errors.push("Username already taken".to_string());
        }

        if !errors.is_empty() {
            return Err(AppError::validation_messages(errors));
        }

        let password_hash = self.hash_blocking(password.to_string()).await?;

        let user = self
            .user_repo
            .create(&CreateUser {
                username,
                password_hash,
            })
            .await
            .map_err(|e| match e.kind {
                ErrorKind::Conflict => AppError::validation("Username already taken"),
                _ => e,
            })?;

        info!(user_id = user.id, username = %user.username, "user registered");

        let session = self.mint_session(&user)?;
        Ok(AuthenticatedUser { user, session })
    }

    /// Authenticates an existing user.
    ///
    /// A missing user and a wrong password produce the identical generic
    /// error; nothing in the response distinguishes the two.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<AuthenticatedUser> {
        if !validate_login(username, password).is_empty() {
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        let Some(user) = self.user_repo.find_by_username(username.trim()).await? else {
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        let verified = self
            .verify_blocking(password.to_string(), user.password_hash.clone())
            .await?;

        if !verified {
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        info!(user_id = user.id, username = %user.username, "user logged in");

        let session = self.mint_session(&user)?;
        Ok(AuthenticatedUser { user, session })
    }

    /// Looks up a user's profile by id.
    pub async fn get_profile(&self, user_id: i64) -> AppResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    fn mint_session(&self, user: &User) -> AppResult<SignedSession> {
        self.encoder.sign(user.id, &user.username)
    }

    /// Argon2 hashing is CPU-bound; run it off the async runtime so it does
    /// not stall unrelated requests.
    async fn hash_blocking(&self, password: String) -> AppResult<String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {e}")))?
    }

    async fn verify_blocking(&self, password: String, hash: String) -> AppResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Verification task failed: {e}")))
    }
}
