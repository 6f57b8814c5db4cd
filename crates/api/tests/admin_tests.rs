mod common;

use api::app::build_router;
use api::gql::build_schema;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::*;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health_endpoint() {
    let app_state = setup_test_db().await;
    let app = build_router(app_state.clone(), build_schema(app_state), &[]);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_admin_team_search_is_case_insensitive() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let marker = Uuid::new_v4().simple().to_string();
    let name = format!("Searchable Sharks {marker}");
    let team_id = create_test_team(&schema, &name).await;
    create_test_team(&schema, &unique_name("Unrelated")).await;

    let app = build_router(app_state.clone(), schema, &[]);
    let (status, body) = get_json(
        app,
        &format!("/admin/teams?search=SHARKS%20{}", marker.to_uppercase()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let teams = body.as_array().unwrap();
    assert_eq!(teams.len(), 1, "Only the matching team: {body}");
    assert_eq!(teams[0]["uuid"], team_id.to_string());
    assert_eq!(teams[0]["name"], name);
}

#[tokio::test]
async fn test_admin_players_filter_by_team_and_search() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let team_name = unique_name("Admin Roster");
    let team_id = create_test_team(&schema, &team_name).await;
    let other_team = create_test_team(&schema, &unique_name("Admin Other")).await;
    let keeper = create_test_player(&schema, team_id, "Quinn", "Marsh", 1).await;
    create_test_player(&schema, team_id, "Lena", "Brook", 8).await;
    create_test_player(&schema, other_team, "Quinn", "Elsewhere", 4).await;

    let app = build_router(app_state.clone(), schema, &[]);

    let (status, body) = get_json(app.clone(), &format!("/admin/players?team_id={team_id}")).await;
    assert_eq!(status, StatusCode::OK);
    let players = body.as_array().unwrap();
    assert_eq!(players.len(), 2);
    assert!(players.iter().all(|p| p["team_name"] == team_name));

    let (status, body) = get_json(
        app,
        &format!("/admin/players?team_id={team_id}&search=quinn"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let players = body.as_array().unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0]["uuid"], keeper.to_string());
    assert_eq!(players[0]["jersey_number"], 1);
}

#[tokio::test]
async fn test_admin_matches_filter_by_team_and_date_range() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let home_name = unique_name("Range Home");
    let home = create_test_team(&schema, &home_name).await;
    let away = create_test_team(&schema, &unique_name("Range Away")).await;
    let early = create_test_match(&schema, home, away, "2024-01-10T12:00:00Z").await;
    let late = create_test_match(&schema, home, away, "2024-03-10T12:00:00Z").await;
    create_test_match(&schema, away, home, "2024-02-10T12:00:00Z").await;

    let app = build_router(app_state.clone(), schema, &[]);

    let (status, body) = get_json(app.clone(), &format!("/admin/matches?home_team_id={home}")).await;
    assert_eq!(status, StatusCode::OK);
    let matches = body.as_array().unwrap();
    assert_eq!(matches.len(), 2);
    // Newest first.
    assert_eq!(matches[0]["uuid"], late.to_string());
    assert_eq!(matches[1]["uuid"], early.to_string());
    assert_eq!(matches[0]["home_team_name"], home_name);

    let (status, body) = get_json(
        app.clone(),
        &format!(
            "/admin/matches?home_team_id={home}&from=2024-01-01T00:00:00Z&to=2024-02-01T00:00:00Z"
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let matches = body.as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["uuid"], early.to_string());

    let search = home_name.split(' ').next_back().unwrap();
    let (status, body) = get_json(app, &format!("/admin/matches?search={search}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.as_array().unwrap().len(),
        3,
        "Search matches either side's team name"
    );
}

#[tokio::test]
async fn test_admin_matches_rejects_inverted_range() {
    let app_state = setup_test_db().await;
    let app = build_router(app_state.clone(), build_schema(app_state), &[]);

    let (status, body) = get_json(
        app,
        "/admin/matches?from=2024-02-01T00:00:00Z&to=2024-01-01T00:00:00Z",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("from"));
}

#[tokio::test]
async fn test_admin_search_matches_wildcards_literally() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let marker = Uuid::new_v4().simple().to_string();
    let literal = format!("Wild_card {marker}");
    let literal_id = create_test_team(&schema, &literal).await;
    create_test_team(&schema, &format!("Wildxcard {marker}")).await;

    let app = build_router(app_state.clone(), schema, &[]);

    let (status, body) = get_json(
        app.clone(),
        &format!("/admin/teams?search=wild_card%20{marker}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let teams = body.as_array().unwrap();
    assert_eq!(teams.len(), 1, "Underscore must not act as a wildcard: {body}");
    assert_eq!(teams[0]["uuid"], literal_id.to_string());

    let (status, body) = get_json(app, &format!("/admin/teams?search=%25{marker}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        body.as_array().unwrap().is_empty(),
        "No team name contains a literal percent sign: {body}"
    );
}
