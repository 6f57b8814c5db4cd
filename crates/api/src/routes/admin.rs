//! Read-only admin views over the league tables.
//!
//! Each endpoint mirrors an admin list page: the list columns, a free-text
//! search box and the sidebar filters. Rows carry joined team names so a UI
//! can render them without extra lookups.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;
use infra::models::{MatchListRow, PlayerListRow, TeamRow};
use infra::repos::{matches, players, teams, MatchFilter, PlayerFilter, TeamFilter};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/teams", get(list_teams))
        .route("/admin/players", get(list_players))
        .route("/admin/matches", get(list_matches))
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamParams {
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerParams {
    pub search: Option<String>,
    pub team_id: Option<Uuid>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MatchParams {
    pub search: Option<String>,
    pub home_team_id: Option<Uuid>,
    pub away_team_id: Option<Uuid>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

async fn list_teams(
    State(state): State<AppState>,
    Query(params): Query<TeamParams>,
) -> Result<Json<Vec<TeamRow>>, AppError> {
    let rows = teams::search(
        &state.db,
        TeamFilter {
            search: params.search,
        },
    )
    .await?;
    Ok(Json(rows))
}

async fn list_players(
    State(state): State<AppState>,
    Query(params): Query<PlayerParams>,
) -> Result<Json<Vec<PlayerListRow>>, AppError> {
    let rows = players::search(
        &state.db,
        PlayerFilter {
            search: params.search,
            team_id: params.team_id,
        },
    )
    .await?;
    Ok(Json(rows))
}

async fn list_matches(
    State(state): State<AppState>,
    Query(params): Query<MatchParams>,
) -> Result<Json<Vec<MatchListRow>>, AppError> {
    if let (Some(from), Some(to)) = (params.from, params.to) {
        if from > to {
            return Err(AppError::BadRequest(
                "`from` must not be later than `to`".to_string(),
            ));
        }
    }

    let rows = matches::search(
        &state.db,
        MatchFilter {
            search: params.search,
            home_team_id: params.home_team_id,
            away_team_id: params.away_team_id,
            from: params.from,
            to: params.to,
        },
    )
    .await?;
    Ok(Json(rows))
}
