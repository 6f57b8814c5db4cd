use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use infra::models::MatchRow;
use infra::repos::{matches, teams, CreateMatch, UpdateMatch};

use crate::gql::common::validation::{non_negative, optional_non_negative};
use crate::gql::error::GqlError;

pub struct NewMatch {
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub match_date: DateTime<Utc>,
    pub home_score: i32,
    pub away_score: i32,
}

#[derive(Default)]
pub struct MatchChanges {
    pub home_team_id: Option<Uuid>,
    pub away_team_id: Option<Uuid>,
    pub match_date: Option<DateTime<Utc>>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}

impl NewMatch {
    fn validate(self) -> Result<CreateMatch, GqlError> {
        Ok(CreateMatch {
            home_team_id: self.home_team_id,
            away_team_id: self.away_team_id,
            match_date: self.match_date,
            home_score: non_negative("homeScore", self.home_score)?,
            away_score: non_negative("awayScore", self.away_score)?,
        })
    }
}

impl MatchChanges {
    fn validate(self) -> Result<UpdateMatch, GqlError> {
        Ok(UpdateMatch {
            home_team_id: self.home_team_id,
            away_team_id: self.away_team_id,
            match_date: self.match_date,
            home_score: optional_non_negative("homeScore", self.home_score)?,
            away_score: optional_non_negative("awayScore", self.away_score)?,
        })
    }
}

async fn require_team(conn: &mut PgConnection, field: &str, id: Uuid) -> Result<(), GqlError> {
    match teams::get_by_id(conn, id).await? {
        Some(_) => Ok(()),
        None => Err(GqlError::NotFound(format!("{field}: Team not found: {id}"))),
    }
}

pub async fn get_match(pool: &PgPool, id: Uuid) -> Result<MatchRow, GqlError> {
    matches::get_by_id(pool, id)
        .await?
        .ok_or_else(|| GqlError::not_found("Match", id))
}

pub async fn create_match(pool: &PgPool, input: NewMatch) -> Result<MatchRow, GqlError> {
    let data = input.validate()?;

    let mut tx = pool.begin().await?;

    require_team(&mut tx, "homeTeamId", data.home_team_id).await?;
    require_team(&mut tx, "awayTeamId", data.away_team_id).await?;

    let row = matches::create(&mut *tx, data).await?;
    tx.commit().await?;

    tracing::info!(
        match_uuid = %row.uuid,
        home_team_uuid = %row.home_team_id,
        away_team_uuid = %row.away_team_id,
        "Match created"
    );
    Ok(row)
}

pub async fn update_match(
    pool: &PgPool,
    id: Uuid,
    changes: MatchChanges,
) -> Result<MatchRow, GqlError> {
    let data = changes.validate()?;

    let mut tx = pool.begin().await?;

    if let Some(home_team_id) = data.home_team_id {
        require_team(&mut tx, "homeTeamId", home_team_id).await?;
    }
    if let Some(away_team_id) = data.away_team_id {
        require_team(&mut tx, "awayTeamId", away_team_id).await?;
    }

    let row = matches::update(&mut *tx, id, data)
        .await?
        .ok_or_else(|| GqlError::not_found("Match", id))?;
    tx.commit().await?;

    tracing::info!(match_uuid = %row.uuid, "Match updated");
    Ok(row)
}

pub async fn delete_match(pool: &PgPool, id: Uuid) -> Result<(), GqlError> {
    if !matches::delete(pool, id).await? {
        return Err(GqlError::not_found("Match", id));
    }

    tracing::info!(match_uuid = %id, "Match deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_scores_are_rejected() {
        let err = NewMatch {
            home_team_id: Uuid::new_v4(),
            away_team_id: Uuid::new_v4(),
            match_date: Utc::now(),
            home_score: 2,
            away_score: -1,
        }
        .validate()
        .unwrap_err();

        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.to_string(), "awayScore must be greater than or equal to 0");
    }

    #[test]
    fn same_team_on_both_sides_is_allowed() {
        let team = Uuid::new_v4();
        let data = NewMatch {
            home_team_id: team,
            away_team_id: team,
            match_date: Utc::now(),
            home_score: 0,
            away_score: 0,
        }
        .validate()
        .unwrap();

        assert_eq!(data.home_team_id, data.away_team_id);
    }

    #[test]
    fn partial_changes_only_touch_supplied_fields() {
        let data = MatchChanges {
            home_score: Some(3),
            ..Default::default()
        }
        .validate()
        .unwrap();

        assert_eq!(data.home_score, Some(3));
        assert!(data.away_score.is_none());
        assert!(data.match_date.is_none());
        assert!(data.home_team_id.is_none());
    }
}
