//! Checks that must fail at the API layer, before any data access.
//! The pool used here never connects, so reaching the database would error differently.

mod common;

use api::gql::{build_read_only_schema, build_schema};
use async_graphql::Request;
use common::*;

#[tokio::test]
async fn test_missing_required_argument_is_rejected() {
    let schema = build_schema(offline_state());

    let response = execute_graphql(&schema, "mutation { createTeam { uuid } }", None).await;

    assert_eq!(response.errors.len(), 1, "{:?}", response.errors);
    assert!(
        response.errors[0].message.contains("required"),
        "unexpected message: {}",
        response.errors[0].message
    );
}

#[tokio::test]
async fn test_mistyped_argument_is_rejected() {
    let schema = build_schema(offline_state());

    let response = execute_graphql(
        &schema,
        r#"
        mutation {
            createPlayer(firstName: "A", lastName: "B", jerseyNumber: "nine", teamId: "00000000-0000-0000-0000-000000000000") {
                uuid
            }
        }
        "#,
        None,
    )
    .await;

    assert!(!response.errors.is_empty());
    assert_eq!(error_code(&response), None);
}

#[tokio::test]
async fn test_malformed_uuid_is_rejected() {
    let schema = build_schema(offline_state());

    let response = execute_graphql(&schema, r#"query { team(uuid: "not-a-uuid") { name } }"#, None).await;

    assert!(!response.errors.is_empty());
    assert_eq!(error_code(&response), None);
}

#[tokio::test]
async fn test_negative_jersey_number_fails_validation_before_data_access() {
    let schema = build_schema(offline_state());

    let response = execute_graphql(
        &schema,
        r#"
        mutation {
            createPlayer(firstName: "Sam", lastName: "Lee", jerseyNumber: -1, teamId: "00000000-0000-0000-0000-000000000000") {
                uuid
            }
        }
        "#,
        None,
    )
    .await;

    assert_eq!(error_code(&response).as_deref(), Some("VALIDATION_ERROR"));
    assert_eq!(
        response.errors[0].message,
        "jerseyNumber must be greater than or equal to 0"
    );
}

#[tokio::test]
async fn test_blank_player_name_fails_validation() {
    let schema = build_schema(offline_state());

    let response = execute_graphql(
        &schema,
        r#"
        mutation {
            updatePlayer(uuid: "00000000-0000-0000-0000-000000000000", firstName: "") { uuid }
        }
        "#,
        None,
    )
    .await;

    assert_eq!(error_code(&response).as_deref(), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_overlong_team_name_fails_validation() {
    let schema = build_schema(offline_state());

    let query = format!(
        r#"mutation {{ createTeam(name: "{}") {{ uuid }} }}"#,
        "x".repeat(101)
    );
    let response = execute_graphql(&schema, &query, None).await;

    assert_eq!(error_code(&response).as_deref(), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_read_only_schema_has_no_mutations() {
    let schema = build_read_only_schema(offline_state());

    let response = schema
        .execute(Request::new(r#"mutation { createTeam(name: "Lions") { uuid } }"#))
        .await;

    assert!(
        !response.errors.is_empty(),
        "Mutations must not be served by the read-only schema"
    );
    assert!(!schema.sdl().contains("createTeam"));
    assert!(schema.sdl().contains("teams: [Team!]!"));
}
