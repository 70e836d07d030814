//! API Integration Tests
//!
//! The default suite runs against the in-memory store and needs no external
//! services. Tests named `*_postgres` also run against PostgreSQL when
//! DATABASE_URL is set and skip otherwise.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use forum_core::UserId;
use integration_tests::{
    assert_status, assert_text, fixtures::*, foreign_token, TestServer,
};
use reqwest::StatusCode;

const SUBREDDIT: &str = "/api/subreddit";

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body = assert_text(response, StatusCode::OK).await.unwrap();

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Community Creation Tests
// ============================================================================

#[tokio::test]
async fn test_create_community() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for("u1").unwrap();

    let response = server
        .post_auth(SUBREDDIT, &token, &CreateCommunityRequest::named("golang"))
        .await
        .unwrap();
    let body = assert_text(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, "golang");

    let repo = server.state.services().community_repo();
    let community = repo.find_by_name("golang").await.unwrap().unwrap();
    assert_eq!(community.creator_id, UserId::from("u1"));

    let members = repo.find_members(community.id).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].user_id, UserId::from("u1"));
    assert_eq!(members[0].community_id, community.id);
}

#[tokio::test]
async fn test_create_duplicate_community() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for("u1").unwrap();
    let request = CreateCommunityRequest::named("golang");

    let response = server.post_auth(SUBREDDIT, &token, &request).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let other = server.token_for("u2").unwrap();
    let response = server.post_auth(SUBREDDIT, &other, &request).await.unwrap();
    let body = assert_text(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body, "Subreddit of the same name already exists");

    let repo = server.state.services().community_repo();
    let community = repo.find_by_name("golang").await.unwrap().unwrap();
    assert_eq!(community.creator_id, UserId::from("u1"));
    assert_eq!(repo.find_members(community.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_community_without_session() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(SUBREDDIT, &CreateCommunityRequest::named("golang"))
        .await
        .unwrap();
    let body = assert_text(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body, "Unauthorized");

    let forged = foreign_token("u1").unwrap();
    let response = server
        .post_auth(SUBREDDIT, &forged, &CreateCommunityRequest::named("golang"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let repo = server.state.services().community_repo();
    assert!(repo.find_by_name("golang").await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_community_with_invalid_body() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for("u1").unwrap();

    for body in ["{}", r#"{"name":"ab"}"#, r#"{"name":null}"#, "[]"] {
        let response = server.post_raw_auth(SUBREDDIT, &token, body).await.unwrap();
        let text = assert_text(response, StatusCode::UNPROCESSABLE_ENTITY)
            .await
            .unwrap();
        assert!(!text.is_empty(), "empty 422 body for {body}");
    }

    let repo = server.state.services().community_repo();
    assert!(repo.find_by_name("ab").await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_community_with_malformed_json() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.token_for("u1").unwrap();

    for body in ["{not json", r#"{"name":"golang""#] {
        let response = server.post_raw_auth(SUBREDDIT, &token, body).await.unwrap();
        let text = assert_text(response, StatusCode::INTERNAL_SERVER_ERROR)
            .await
            .unwrap();
        assert_eq!(text, "Could not create Subreddit");
    }

    let repo = server.state.services().community_repo();
    assert!(repo.find_by_name("golang").await.unwrap().is_none());
}

#[tokio::test]
async fn test_concurrent_creation_yields_one_community() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateCommunityRequest::unique();

    let url = format!("{}{}", server.base_url(), SUBREDDIT);

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let client = server.client.clone();
            let url = url.clone();
            let token = server.token_for(&unique_user()).unwrap();
            let body = serde_json::json!({ "name": request.name });
            tokio::spawn(async move {
                client
                    .post(&url)
                    .bearer_auth(token)
                    .json(&body)
                    .send()
                    .await
                    .map(|r| r.status())
            })
        })
        .collect();

    let mut statuses = Vec::new();
    for task in tasks {
        statuses.push(task.await.unwrap().unwrap());
    }

    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 1);
    assert!(statuses
        .iter()
        .all(|s| *s == StatusCode::OK || *s == StatusCode::CONFLICT));
}

// ============================================================================
// PostgreSQL-backed Tests
// ============================================================================

#[tokio::test]
async fn test_create_community_postgres() {
    let Some(server) = TestServer::start_postgres().await.expect("Failed to start server") else {
        return;
    };
    let user = unique_user();
    let token = server.token_for(&user).unwrap();
    let request = CreateCommunityRequest::unique();

    let response = server.post_auth(SUBREDDIT, &token, &request).await.unwrap();
    assert_eq!(assert_text(response, StatusCode::OK).await.unwrap(), request.name);

    let response = server.post_auth(SUBREDDIT, &token, &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let repo = server.state.services().community_repo();
    let community = repo.find_by_name(&request.name).await.unwrap().unwrap();
    let members = repo.find_members(community.id).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].user_id, UserId::from(user.as_str()));
}

#[tokio::test]
async fn test_health_ready_postgres() {
    let Some(server) = TestServer::start_postgres().await.expect("Failed to start server") else {
        return;
    };
    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
