//! Integration tests for registration, login, and session handling.

mod helpers;

use http::StatusCode;

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_register_success() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "newuser",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["user"]["username"], "newuser");
    // The hash never leaves the server.
    assert!(response.body["data"]["user"].get("password_hash").is_none());
    // Registration logs the user in.
    let cookie = response.session_cookie().expect("No session cookie set");
    assert!(cookie.starts_with("OurSUperApp="));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_register_session_cookie_attributes() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "cookieuser",
                "password": "password123",
            })),
            None,
        )
        .await;

    let raw = response
        .set_cookies
        .iter()
        .find(|c| c.starts_with("OurSUperApp="))
        .expect("No session cookie set");

    assert!(raw.contains("HttpOnly"));
    assert!(raw.contains("SameSite=Strict"));
    assert!(raw.contains("Path=/"));
    assert!(raw.contains("Max-Age=86400"));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_register_short_username() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "ab",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let details = response.body["details"]
        .as_array()
        .expect("No details array");
    assert!(
        details
            .iter()
            .any(|d| d.as_str().is_some_and(|s| s.contains("at least 3")))
    );

    // The rejected registration must not have written anything.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to count users");
    assert_eq!(count, 0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_register_reports_all_field_errors_at_once() {
    let app = helpers::TestApp::new().await;

    // Bad username AND bad password: both must be reported in one response.
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "ab",
                "password": "short",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let details = response.body["details"]
        .as_array()
        .expect("No details array");
    assert!(details.len() >= 2, "Expected both field errors: {details:?}");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_register_duplicate_username() {
    let app = helpers::TestApp::new().await;
    app.register("takenuser", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "takenuser",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let details = response.body["details"]
        .as_array()
        .expect("No details array");
    assert!(
        details
            .iter()
            .any(|d| d.as_str() == Some("Username already taken"))
    );
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_concurrent_duplicate_registration() {
    let app = helpers::TestApp::new().await;

    let body = serde_json::json!({
        "username": "raceuser",
        "password": "password123",
    });

    let (first, second) = tokio::join!(
        app.request("POST", "/api/auth/register", Some(body.clone()), None),
        app.request("POST", "/api/auth/register", Some(body.clone()), None),
    );

    let mut statuses = [first.status, second.status];
    statuses.sort();
    // Exactly one insert wins; the loser gets the same validation error a
    // sequential duplicate would.
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::BAD_REQUEST]);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;
    app.register("testuser", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "testuser",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["user"]["username"], "testuser");
    assert!(response.session_cookie().is_some());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_login_failures_are_indistinguishable() {
    let app = helpers::TestApp::new().await;
    app.register("realuser", "password123").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "realuser",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    let no_such_user = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "nobody",
                "password": "password123",
            })),
            None,
        )
        .await;

    // Wrong password and unknown username must look identical to the caller.
    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(no_such_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, no_such_user.body);
    assert_eq!(
        wrong_password.body["message"],
        "Invalid username / password provided"
    );
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_me_authenticated() {
    let app = helpers::TestApp::new().await;
    let cookie = app.register("meuser", "password123").await;

    let response = app
        .request("GET", "/api/auth/me", None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], "meuser");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_me_unauthenticated() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_me_tampered_cookie() {
    let app = helpers::TestApp::new().await;
    let cookie = app.register("tampuser", "password123").await;

    // Flip the last character of the token.
    let mut tampered = cookie.clone();
    let last = tampered.pop().expect("Empty cookie");
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let response = app
        .request("GET", "/api/auth/me", None, Some(&tampered))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_logout_clears_cookie() {
    let app = helpers::TestApp::new().await;
    let cookie = app.register("logoutuser", "password123").await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);

    let removal = response
        .set_cookies
        .iter()
        .find(|c| c.starts_with("OurSUperApp="))
        .expect("No removal cookie set");
    assert!(removal.contains("Max-Age=0"));
}
