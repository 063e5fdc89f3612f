//! End-to-end tests for the `/users` REST endpoints.
//!
//! These tests build the real axum `Router` and send requests
//! with `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use tower::ServiceExt;
use users::models::{MAX_USER_ID, User, UserName, UserResponse};
use users::{InMemoryUserRepository, UserId, UsersConfig, users_router};

fn user(id: u64, name: &str) -> User {
    User::new(UserId::new(id).unwrap(), UserName::new(name).unwrap())
}

fn app(repo: InMemoryUserRepository) -> Router {
    users_router(repo, UsersConfig::default())
}

async fn send(
    router: Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Vec<u8>) {
    let body = body.map(|b| Body::from(b.to_owned())).unwrap_or_else(Body::empty);
    let response = router
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn list_returns_empty_array_then_seeded_users() {
    let repo = InMemoryUserRepository::new();

    let (status, body) = send(app(repo.clone()), Method::GET, "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    let list: Vec<UserResponse> = serde_json::from_slice(&body).unwrap();
    assert!(list.is_empty());

    let repo = InMemoryUserRepository::seeded([user(1, "A"), user(2, "B")]);
    let (status, body) = send(app(repo), Method::GET, "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    let list: Vec<UserResponse> = serde_json::from_slice(&body).unwrap();
    assert_eq!(list.len(), 2);
}

#[tokio::test]
async fn create_then_list_returns_exactly_the_created_users() {
    let repo = InMemoryUserRepository::new();

    for name in ["Ada", "Grace"] {
        let payload = format!(r#"{{"name":"{name}"}}"#);
        let (status, body) = send(app(repo.clone()), Method::POST, "/users", Some(&payload)).await;
        assert_eq!(status, StatusCode::OK);
        let created: UserResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(created.name, name);
    }

    let (_, body) = send(app(repo), Method::GET, "/users", None).await;
    let list: Vec<UserResponse> = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        list,
        vec![
            UserResponse {
                id: 1,
                name: "Ada".into()
            },
            UserResponse {
                id: 2,
                name: "Grace".into()
            },
        ]
    );
}

#[tokio::test]
async fn create_accepts_caller_id_and_rejects_duplicates() {
    let repo = InMemoryUserRepository::new();

    let (status, body) = send(
        app(repo.clone()),
        Method::POST,
        "/users",
        Some(r#"{"id":7,"name":"Seven"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let created: UserResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(created.id, 7);

    let (status, _) = send(
        app(repo.clone()),
        Method::POST,
        "/users",
        Some(r#"{"id":7,"name":"Again"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = send(app(repo), Method::POST, "/users", Some(r#"{"name":"Next"}"#)).await;
    let next: UserResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(next.id, 8);
}

#[tokio::test]
async fn create_with_bad_json_is_400() {
    let repo = InMemoryUserRepository::new();
    let (status, body) = send(
        app(repo.clone()),
        Method::POST,
        "/users",
        Some("{\"name\": \"MissingEnd"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let problem: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(problem["status"], 400);
    assert!(problem["detail"].as_str().unwrap().contains("malformed input"));
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn create_with_missing_name_or_zero_id_is_400() {
    let repo = InMemoryUserRepository::new();
    for payload in [r#"{}"#, r#"{"name":null}"#, r#"{"id":0,"name":"Zero"}"#] {
        let (status, _) = send(app(repo.clone()), Method::POST, "/users", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload}");
    }
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn create_stores_name_exactly_as_sent() {
    let repo = InMemoryUserRepository::new();
    for name in ["  Padded  ", ""] {
        let payload = serde_json::json!({ "name": name }).to_string();
        let (status, body) = send(app(repo.clone()), Method::POST, "/users", Some(&payload)).await;
        assert_eq!(status, StatusCode::OK);
        let created: UserResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(created.name, name);

        let (_, body) = send(
            app(repo.clone()),
            Method::GET,
            &format!("/users/{}", created.id),
            None,
        )
        .await;
        let fetched: UserResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(fetched.name, name);
    }
}

#[tokio::test]
async fn create_rejects_ids_beyond_the_ceiling() {
    let repo = InMemoryUserRepository::new();
    let (status, body) = send(
        app(repo.clone()),
        Method::POST,
        "/users",
        Some(r#"{"id":18446744073709551615,"name":"Max"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let problem: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(
        problem["detail"]
            .as_str()
            .unwrap()
            .contains("invalid identifier")
    );
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn create_without_id_still_works_after_the_largest_id_is_taken() {
    let repo = InMemoryUserRepository::new();
    let payload = serde_json::json!({ "id": MAX_USER_ID, "name": "Max" }).to_string();
    let (status, body) = send(app(repo.clone()), Method::POST, "/users", Some(&payload)).await;
    assert_eq!(status, StatusCode::OK);
    let created: UserResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(created.id, MAX_USER_ID);

    for expected in [1, 2] {
        let (status, body) = send(
            app(repo.clone()),
            Method::POST,
            "/users",
            Some(r#"{"name":"Next"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let next: UserResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(next.id, expected);
    }
}

#[tokio::test]
async fn get_by_id() {
    let repo = InMemoryUserRepository::seeded([user(1, "A")]);

    let (status, body) = send(app(repo.clone()), Method::GET, "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let found: UserResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(found.name, "A");

    let (status, _) = send(app(repo.clone()), Method::GET, "/users/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(app(repo), Method::GET, "/users/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let problem: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(
        problem["detail"]
            .as_str()
            .unwrap()
            .contains("invalid identifier")
    );
}

#[tokio::test]
async fn update_scenarios() {
    let repo = InMemoryUserRepository::seeded([user(1, "Original")]);
    let payload = r#"{"name":"Updated"}"#;

    let (status, body) = send(app(repo.clone()), Method::PUT, "/users/1", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    let updated: UserResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        updated,
        UserResponse {
            id: 1,
            name: "Updated".into()
        }
    );

    let (status, _) = send(app(repo.clone()), Method::PUT, "/users/99", Some(payload)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(app(repo.clone()), Method::PUT, "/users/1", Some("{badjson")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(app(repo.clone()), Method::PUT, "/users/abc", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The failed attempts left the stored record alone
    let (_, body) = send(app(repo.clone()), Method::GET, "/users/1", None).await;
    let current: UserResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(current.name, "Updated");

    let (status, body) = send(app(repo), Method::PUT, "/users/1", Some(r#"{"name":""}"#)).await;
    assert_eq!(status, StatusCode::OK);
    let cleared: UserResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(cleared.name, "");
}

#[tokio::test]
async fn update_with_invalid_id_is_reported_before_bad_body() {
    let repo = InMemoryUserRepository::seeded([user(1, "Original")]);
    let (status, body) = send(app(repo), Method::PUT, "/users/abc", Some("{badjson")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let problem: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(
        problem["detail"]
            .as_str()
            .unwrap()
            .contains("invalid identifier")
    );
}

#[tokio::test]
async fn delete_scenarios() {
    let repo = InMemoryUserRepository::seeded([user(1, "A")]);

    let (status, _) = send(app(repo.clone()), Method::DELETE, "/users/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(app(repo.clone()), Method::DELETE, "/users/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(app(repo.clone()), Method::DELETE, "/users/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
    assert!(repo.is_empty().await);

    let (status, _) = send(app(repo), Method::DELETE, "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
