use reqwest::Client;
use serde_json::{json, Value};
use uuid::Uuid;

mod common;
use common::admin_helpers::{create_admin_user_and_login, create_team};
use common::utils::{make_authenticated_request, spawn_app, TestApp};

async fn admin_request(app: &TestApp, token: &str, method: reqwest::Method, path: &str, body: Option<Value>) -> reqwest::Response {
    make_authenticated_request(&Client::new(), method, &app.api(path), token, body).await
}

#[tokio::test]
async fn standing_totals_follow_partial_updates() {
    let test_app = spawn_app().await;
    let admin = create_admin_user_and_login(&test_app).await;
    let team = create_team(&test_app, &admin.token, "Informatica").await;

    let response = admin_request(
        &test_app,
        &admin.token,
        reqwest::Method::POST,
        "/admin/medals",
        Some(json!({ "team_id": team, "gold_medals": 1, "bronze_medals": 2 })),
    )
    .await;
    assert_eq!(201, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(0, body["silver_medals"]);
    assert_eq!(3, body["total_medals"]);

    let response = admin_request(
        &test_app,
        &admin.token,
        reqwest::Method::PUT,
        &format!("/admin/medals/{}", team),
        Some(json!({ "silver_medals": 2 })),
    )
    .await;
    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(1, body["gold_medals"]);
    assert_eq!(2, body["silver_medals"]);
    assert_eq!(2, body["bronze_medals"]);
    assert_eq!(5, body["total_medals"]);

    let public: Value = Client::new()
        .get(test_app.api(&format!("/medals/{}", team)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(5, public["total_medals"]);
}

#[tokio::test]
async fn one_standing_per_team() {
    let test_app = spawn_app().await;
    let admin = create_admin_user_and_login(&test_app).await;
    let team = create_team(&test_app, &admin.token, "Edificacoes").await;
    let create = json!({ "team_id": team });

    let first = admin_request(&test_app, &admin.token, reqwest::Method::POST, "/admin/medals", Some(create.clone())).await;
    assert_eq!(201, first.status().as_u16());

    let second = admin_request(&test_app, &admin.token, reqwest::Method::POST, "/admin/medals", Some(create.clone())).await;
    assert_eq!(409, second.status().as_u16());

    let path = format!("/admin/medals/{}", team);
    let deleted = admin_request(&test_app, &admin.token, reqwest::Method::DELETE, &path, None).await;
    assert_eq!(200, deleted.status().as_u16());

    let again = admin_request(&test_app, &admin.token, reqwest::Method::DELETE, &path, None).await;
    assert_eq!(404, again.status().as_u16());

    let recreated = admin_request(&test_app, &admin.token, reqwest::Method::POST, "/admin/medals", Some(create)).await;
    assert_eq!(201, recreated.status().as_u16());
}

#[tokio::test]
async fn create_standing_validates_input() {
    let test_app = spawn_app().await;
    let admin = create_admin_user_and_login(&test_app).await;
    let team = create_team(&test_app, &admin.token, "Agropecuaria").await;

    let test_cases = vec![
        (json!({ "gold_medals": 1 }), "missing team"),
        (json!({ "team_id": Uuid::new_v4().to_string() }), "unknown team"),
        (json!({ "team_id": team, "gold_medals": -1 }), "negative count"),
    ];

    for (body, description) in test_cases {
        let response = admin_request(&test_app, &admin.token, reqwest::Method::POST, "/admin/medals", Some(body)).await;
        assert_eq!(400, response.status().as_u16(), "Expected 400 for {}", description);
    }

    let response = admin_request(
        &test_app,
        &admin.token,
        reqwest::Method::PUT,
        &format!("/admin/medals/{}", team),
        Some(json!({ "gold_medals": 1 })),
    )
    .await;
    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn listing_is_ranked_gold_silver_bronze_and_stable_on_ties() {
    let test_app = spawn_app().await;
    let admin = create_admin_user_and_login(&test_app).await;

    let rows = [
        ("First Tie", 1, 1, 1),
        ("Bronze Heavy", 1, 1, 5),
        ("Second Tie", 1, 1, 1),
        ("Gold Leader", 3, 0, 0),
        ("Silver Edge", 1, 2, 0),
    ];
    for (name, gold, silver, bronze) in rows {
        let team = create_team(&test_app, &admin.token, name).await;
        let response = admin_request(
            &test_app,
            &admin.token,
            reqwest::Method::POST,
            "/admin/medals",
            Some(json!({
                "team_id": team,
                "gold_medals": gold,
                "silver_medals": silver,
                "bronze_medals": bronze
            })),
        )
        .await;
        assert_eq!(201, response.status().as_u16());
    }

    let standings: Vec<Value> = Client::new()
        .get(test_app.api("/medals"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let order: Vec<&str> = standings.iter().map(|s| s["team_name"].as_str().unwrap()).collect();
    assert_eq!(
        vec!["Gold Leader", "Silver Edge", "Bronze Heavy", "First Tie", "Second Tie"],
        order
    );
    assert_eq!(7, standings[2]["total_medals"]);
}

#[tokio::test]
async fn deleting_a_team_removes_its_standing() {
    let test_app = spawn_app().await;
    let admin = create_admin_user_and_login(&test_app).await;
    let team = create_team(&test_app, &admin.token, "Temporary").await;

    admin_request(&test_app, &admin.token, reqwest::Method::POST, "/admin/medals", Some(json!({ "team_id": team, "gold_medals": 2 }))).await;

    let response = admin_request(&test_app, &admin.token, reqwest::Method::DELETE, &format!("/admin/teams/{}", team), None).await;
    assert_eq!(200, response.status().as_u16());

    let response = Client::new().get(test_app.api(&format!("/medals/{}", team))).send().await.unwrap();
    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn counts_whose_total_overflows_are_rejected() {
    let test_app = spawn_app().await;
    let admin = create_admin_user_and_login(&test_app).await;
    let team = create_team(&test_app, &admin.token, "Overflow").await;

    let response = admin_request(
        &test_app,
        &admin.token,
        reqwest::Method::POST,
        "/admin/medals",
        Some(json!({ "team_id": team, "gold_medals": 2147483647, "silver_medals": 1 })),
    )
    .await;
    assert_eq!(400, response.status().as_u16());

    let response = admin_request(
        &test_app,
        &admin.token,
        reqwest::Method::POST,
        "/admin/medals",
        Some(json!({ "team_id": team, "gold_medals": 2147483647 })),
    )
    .await;
    assert_eq!(201, response.status().as_u16());

    let response = admin_request(
        &test_app,
        &admin.token,
        reqwest::Method::PUT,
        &format!("/admin/medals/{}", team),
        Some(json!({ "bronze_medals": 1 })),
    )
    .await;
    assert_eq!(400, response.status().as_u16());

    let response = Client::new().get(test_app.api("/medals")).send().await.unwrap();
    assert_eq!(200, response.status().as_u16());
    let standings: Vec<Value> = response.json().await.unwrap();
    assert_eq!(2147483647i64, standings[0]["total_medals"]);
}
