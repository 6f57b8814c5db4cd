use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TeamRow {
    pub uuid: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PlayerRow {
    pub uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: i32,
    pub team_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MatchRow {
    pub uuid: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub match_date: DateTime<Utc>,
    pub home_score: i32,
    pub away_score: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Player joined with its team name, for admin list views.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PlayerListRow {
    pub uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: i32,
    pub team_id: Uuid,
    pub team_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Match joined with both team names, for admin list views.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MatchListRow {
    pub uuid: Uuid,
    pub home_team_id: Uuid,
    pub home_team_name: String,
    pub away_team_id: Uuid,
    pub away_team_name: String,
    pub match_date: DateTime<Utc>,
    pub home_score: i32,
    pub away_score: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
