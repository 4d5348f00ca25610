use reqwest::Client;
use serde_json::json;

mod common;
use common::admin_helpers::create_admin_user_and_login;
use common::utils::{create_test_user_and_login, make_authenticated_request, spawn_app};

#[tokio::test]
async fn login_returns_token_and_user() {
    let test_app = spawn_app().await;
    let user = create_test_user_and_login(&test_app).await;

    assert!(!user.token.is_empty());
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let user = create_test_user_and_login(&test_app).await;

    let wrong_password = client
        .post(test_app.api("/login"))
        .json(&json!({ "username": user.username, "password": "nope" }))
        .send()
        .await
        .unwrap();
    assert_eq!(401, wrong_password.status().as_u16());

    let unknown_user = client
        .post(test_app.api("/login"))
        .json(&json!({ "username": "ghost", "password": "password123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(401, unknown_user.status().as_u16());
}

#[tokio::test]
async fn profile_requires_a_token() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client.get(test_app.api("/profile")).send().await.unwrap();
    assert_eq!(401, response.status().as_u16());

    let response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &test_app.api("/profile"),
        "not-a-jwt",
        None,
    )
    .await;
    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn profile_returns_current_user() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let user = create_test_user_and_login(&test_app).await;

    let response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &test_app.api("/profile"),
        &user.token,
        None,
    )
    .await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(user.username, body["username"]);
    assert_eq!(user.user_id.to_string(), body["id"]);
}

#[tokio::test]
async fn verify_admin_reflects_the_stored_flag() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let regular = create_test_user_and_login(&test_app).await;
    let admin = create_admin_user_and_login(&test_app).await;

    let response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &test_app.api("/verify-admin"),
        &regular.token,
        None,
    )
    .await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json!({ "is_admin": false }), body);

    let response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &test_app.api("/verify-admin"),
        &admin.token,
        None,
    )
    .await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json!({ "is_admin": true }), body);
}
