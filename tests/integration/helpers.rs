//! Shared test helpers for integration tests.
//!
//! These tests need a running PostgreSQL matching `config/test.toml`, so
//! every test carries `#[ignore]` and runs with `cargo test -- --ignored`.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use quill_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db_pool = quill_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        quill_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let user_repo = Arc::new(quill_database::repositories::UserRepository::new(
            db_pool.clone(),
        ));
        let post_repo = Arc::new(quill_database::repositories::PostRepository::new(
            db_pool.clone(),
        ));

        let password_hasher = Arc::new(quill_auth::password::hasher::PasswordHasher::new());
        let session_encoder = Arc::new(quill_auth::token::encoder::SessionEncoder::new(
            &config.auth,
        ));
        let session_decoder = Arc::new(quill_auth::token::decoder::SessionDecoder::new(
            &config.auth,
        ));

        let auth_service = Arc::new(quill_service::auth::AuthService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&session_encoder),
            config.auth.clone(),
        ));
        let post_service = Arc::new(quill_service::post::PostService::new(Arc::clone(&post_repo)));

        let app_state = quill_api::state::AppState {
            config: Arc::new(config.clone()),
            db_pool: db_pool.clone(),
            session_decoder,
            auth_service,
            post_service,
        };

        let router = quill_api::router::build_router(app_state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        let tables = ["posts", "users"];

        for table in &tables {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Register a user through the API and return their session cookie
    pub async fn register(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );

        response
            .session_cookie()
            .expect("No session cookie in registration response")
    }

    /// Login and return the session cookie
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .session_cookie()
            .expect("No session cookie in login response")
    }

    /// Create a post as the given session and return its id
    pub async fn create_post(&self, cookie: &str, title: &str, body: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/posts",
                Some(serde_json::json!({
                    "title": title,
                    "body": body,
                })),
                Some(cookie),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Post creation failed: {:?}",
            response.body
        );

        response.body["data"]["id"]
            .as_i64()
            .expect("No post id in creation response")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let set_cookies = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok().map(str::to_string))
            .collect();

        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookies,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Raw Set-Cookie header values
    pub set_cookies: Vec<String>,
}

impl TestResponse {
    /// The `name=value` pair of the session cookie, if one was set
    /// with a non-empty value.
    pub fn session_cookie(&self) -> Option<String> {
        self.set_cookies
            .iter()
            .filter_map(|c| c.split(';').next())
            .find(|pair| {
                pair.starts_with("OurSUperApp=") && pair.len() > "OurSUperApp=".len()
            })
            .map(str::to_string)
    }
}
