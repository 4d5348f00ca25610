use reqwest::Client;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::utils::{create_test_user_and_login, make_authenticated_request, TestApp, UserRegLoginResponse};

/// Registers a user and promotes it straight through the database.
pub async fn create_admin_user_and_login(app: &TestApp) -> UserRegLoginResponse {
    let user = create_test_user_and_login(app).await;

    sqlx::query("UPDATE users SET is_admin = TRUE WHERE id = $1")
        .bind(user.user_id)
        .execute(&app.db_pool)
        .await
        .expect("Failed to promote user to admin");

    user
}

async fn admin_post(app: &TestApp, token: &str, path: &str, body: Value) -> Value {
    let response = make_authenticated_request(
        &Client::new(),
        reqwest::Method::POST,
        &app.api(path),
        token,
        Some(body),
    )
    .await;
    assert_eq!(201, response.status().as_u16(), "POST {} failed", path);
    response.json().await.expect("Failed to parse response")
}

pub async fn create_sport(app: &TestApp, token: &str) -> String {
    let name = format!("Futsal {}", &Uuid::new_v4().to_string()[..8]);
    let body = admin_post(app, token, "/admin/sports", json!({ "name": name, "type": "team" })).await;
    body["id"].as_str().expect("No sport id").to_string()
}

pub async fn create_team(app: &TestApp, token: &str, name: &str) -> String {
    let body = admin_post(app, token, "/admin/teams", json!({ "name": name, "city": "Caxias" })).await;
    body["id"].as_str().expect("No team id").to_string()
}

pub async fn create_game(app: &TestApp, token: &str, sport_id: &str, team_a: &str, team_b: &str, date: &str) -> Value {
    admin_post(
        app,
        token,
        "/admin/games",
        json!({
            "sport_id": sport_id,
            "team_a_id": team_a,
            "team_b_id": team_b,
            "game_date": date,
            "location": "Main court"
        }),
    )
    .await
}
