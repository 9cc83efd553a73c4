//! Integration tests for post CRUD and ownership enforcement.

mod helpers;

use http::StatusCode;

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_create_and_list_posts() {
    let app = helpers::TestApp::new().await;
    let cookie = app.register("writer", "password123").await;

    app.create_post(&cookie, "First post", "Hello world").await;
    app.create_post(&cookie, "Second post", "More words").await;

    let response = app.request("GET", "/api/posts", None, Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    let posts = response.body["data"].as_array().expect("No posts array");
    assert_eq!(posts.len(), 2);
    // Newest first.
    assert_eq!(posts[0]["title"], "Second post");
    assert_eq!(posts[1]["title"], "First post");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_list_shows_only_own_posts() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("alice", "password123").await;
    let bob = app.register("bob", "password123").await;

    app.create_post(&alice, "Alice's post", "Contents").await;

    let response = app.request("GET", "/api/posts", None, Some(&bob)).await;

    assert_eq!(response.status, StatusCode::OK);
    let posts = response.body["data"].as_array().expect("No posts array");
    assert!(posts.is_empty());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_create_post_requires_login() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/posts",
            Some(serde_json::json!({
                "title": "Anonymous post",
                "body": "Should not work",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_create_post_empty_title() {
    let app = helpers::TestApp::new().await;
    let cookie = app.register("writer2", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/posts",
            Some(serde_json::json!({
                "title": "   ",
                "body": "A body",
            })),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_view_own_post() {
    let app = helpers::TestApp::new().await;
    let cookie = app.register("viewer1", "password123").await;
    let post_id = app.create_post(&cookie, "My post", "My words").await;

    let response = app
        .request("GET", &format!("/api/posts/{post_id}"), None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "My post");
    assert_eq!(response.body["data"]["author_username"], "viewer1");
    assert_eq!(response.body["data"]["is_owner"], true);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_view_anothers_post() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("alice2", "password123").await;
    let bob = app.register("bob2", "password123").await;
    let post_id = app.create_post(&alice, "Alice's post", "Contents").await;

    // Any logged-in user may read, but does not own.
    let response = app
        .request("GET", &format!("/api/posts/{post_id}"), None, Some(&bob))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["is_owner"], false);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_update_own_post() {
    let app = helpers::TestApp::new().await;
    let cookie = app.register("editor", "password123").await;
    let post_id = app.create_post(&cookie, "Draft", "Draft body").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/posts/{post_id}"),
            Some(serde_json::json!({
                "title": "Final",
                "body": "Final body",
            })),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Final");
    assert_eq!(response.body["data"]["body"], "Final body");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_update_forbidden_matches_missing() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("alice3", "password123").await;
    let bob = app.register("bob3", "password123").await;
    let post_id = app.create_post(&alice, "Alice's post", "Contents").await;

    let payload = serde_json::json!({
        "title": "Hijacked",
        "body": "Hijacked body",
    });

    let not_owner = app
        .request(
            "PUT",
            &format!("/api/posts/{post_id}"),
            Some(payload.clone()),
            Some(&bob),
        )
        .await;

    let missing = app
        .request("PUT", "/api/posts/999999", Some(payload), Some(&bob))
        .await;

    // A post you don't own and a post that doesn't exist must be
    // indistinguishable to the caller.
    assert_eq!(not_owner.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(not_owner.body, missing.body);

    // And the post is untouched.
    let check = app
        .request("GET", &format!("/api/posts/{post_id}"), None, Some(&alice))
        .await;
    assert_eq!(check.body["data"]["title"], "Alice's post");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_delete_own_post() {
    let app = helpers::TestApp::new().await;
    let cookie = app.register("deleter", "password123").await;
    let post_id = app.create_post(&cookie, "Ephemeral", "Soon gone").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/posts/{post_id}"),
            None,
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);

    let check = app
        .request("GET", &format!("/api/posts/{post_id}"), None, Some(&cookie))
        .await;
    assert_eq!(check.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_delete_forbidden_matches_missing() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("alice4", "password123").await;
    let bob = app.register("bob4", "password123").await;
    let post_id = app.create_post(&alice, "Alice's post", "Contents").await;

    let not_owner = app
        .request(
            "DELETE",
            &format!("/api/posts/{post_id}"),
            None,
            Some(&bob),
        )
        .await;

    let missing = app
        .request("DELETE", "/api/posts/999999", None, Some(&bob))
        .await;

    assert_eq!(not_owner.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(not_owner.body, missing.body);

    // The post survives.
    let check = app
        .request("GET", &format!("/api/posts/{post_id}"), None, Some(&alice))
        .await;
    assert_eq!(check.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_view_requires_login() {
    let app = helpers::TestApp::new().await;
    let cookie = app.register("author5", "password123").await;
    let post_id = app.create_post(&cookie, "Members only", "Contents").await;

    let response = app
        .request("GET", &format!("/api/posts/{post_id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
