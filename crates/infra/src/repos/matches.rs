use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, Postgres, QueryBuilder, Result as SqlxResult};
use uuid::Uuid;

use super::contains_pattern;
use crate::models::{MatchListRow, MatchRow};

#[derive(Debug, Clone)]
pub struct CreateMatch {
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub match_date: DateTime<Utc>,
    pub home_score: i32,
    pub away_score: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMatch {
    pub home_team_id: Option<Uuid>,
    pub away_team_id: Option<Uuid>,
    pub match_date: Option<DateTime<Utc>>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}

/// Admin filter. `from` is inclusive, `to` exclusive.
#[derive(Debug, Clone, Default)]
pub struct MatchFilter {
    pub search: Option<String>,
    pub home_team_id: Option<Uuid>,
    pub away_team_id: Option<Uuid>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<MatchRow>> {
    sqlx::query_as::<_, MatchRow>(
        r#"
        SELECT uuid, home_team_id, away_team_id, match_date, home_score, away_score,
               created_at, updated_at
        FROM matches
        ORDER BY match_date DESC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn list_by_home_team<'e>(
    executor: impl PgExecutor<'e>,
    team_id: Uuid,
) -> SqlxResult<Vec<MatchRow>> {
    sqlx::query_as::<_, MatchRow>(
        r#"
        SELECT uuid, home_team_id, away_team_id, match_date, home_score, away_score,
               created_at, updated_at
        FROM matches
        WHERE home_team_id = $1
        ORDER BY match_date DESC
        "#,
    )
    .bind(team_id)
    .fetch_all(executor)
    .await
}

pub async fn list_by_away_team<'e>(
    executor: impl PgExecutor<'e>,
    team_id: Uuid,
) -> SqlxResult<Vec<MatchRow>> {
    sqlx::query_as::<_, MatchRow>(
        r#"
        SELECT uuid, home_team_id, away_team_id, match_date, home_score, away_score,
               created_at, updated_at
        FROM matches
        WHERE away_team_id = $1
        ORDER BY match_date DESC
        "#,
    )
    .bind(team_id)
    .fetch_all(executor)
    .await
}

/// Number of matches where the team plays home or away.
pub async fn count_for_team<'e>(executor: impl PgExecutor<'e>, team_id: Uuid) -> SqlxResult<i64> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM matches WHERE home_team_id = $1 OR away_team_id = $1",
    )
    .bind(team_id)
    .fetch_one(executor)
    .await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<Option<MatchRow>> {
    sqlx::query_as::<_, MatchRow>(
        r#"
        SELECT uuid, home_team_id, away_team_id, match_date, home_score, away_score,
               created_at, updated_at
        FROM matches
        WHERE uuid = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreateMatch) -> SqlxResult<MatchRow> {
    sqlx::query_as::<_, MatchRow>(
        r#"
        INSERT INTO matches (home_team_id, away_team_id, match_date, home_score, away_score)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING uuid, home_team_id, away_team_id, match_date, home_score, away_score,
                  created_at, updated_at
        "#,
    )
    .bind(data.home_team_id)
    .bind(data.away_team_id)
    .bind(data.match_date)
    .bind(data.home_score)
    .bind(data.away_score)
    .fetch_one(executor)
    .await
}

pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: UpdateMatch,
) -> SqlxResult<Option<MatchRow>> {
    sqlx::query_as::<_, MatchRow>(
        r#"
        UPDATE matches
        SET home_team_id = COALESCE($2, home_team_id),
            away_team_id = COALESCE($3, away_team_id),
            match_date = COALESCE($4, match_date),
            home_score = COALESCE($5, home_score),
            away_score = COALESCE($6, away_score),
            updated_at = GREATEST(NOW(), created_at)
        WHERE uuid = $1
        RETURNING uuid, home_team_id, away_team_id, match_date, home_score, away_score,
                  created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(data.home_team_id)
    .bind(data.away_team_id)
    .bind(data.match_date)
    .bind(data.home_score)
    .bind(data.away_score)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let result = sqlx::query("DELETE FROM matches WHERE uuid = $1")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn search<'e>(
    executor: impl PgExecutor<'e>,
    filter: MatchFilter,
) -> SqlxResult<Vec<MatchListRow>> {
    let mut query: QueryBuilder<Postgres> = QueryBuilder::new(
        r#"
        SELECT m.uuid, m.home_team_id, ht.name AS home_team_name,
               m.away_team_id, awt.name AS away_team_name,
               m.match_date, m.home_score, m.away_score, m.created_at, m.updated_at
        FROM matches m
        INNER JOIN teams ht ON ht.uuid = m.home_team_id
        INNER JOIN teams awt ON awt.uuid = m.away_team_id
        WHERE 1=1
        "#,
    );

    if let Some(search) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
        let pattern = contains_pattern(search);
        query.push(" AND (LOWER(ht.name) LIKE ");
        query.push_bind(pattern.clone());
        query.push(r" ESCAPE '\' OR LOWER(awt.name) LIKE ");
        query.push_bind(pattern);
        query.push(r" ESCAPE '\')");
    }

    if let Some(home_team_id) = filter.home_team_id {
        query.push(" AND m.home_team_id = ");
        query.push_bind(home_team_id);
    }

    if let Some(away_team_id) = filter.away_team_id {
        query.push(" AND m.away_team_id = ");
        query.push_bind(away_team_id);
    }

    if let Some(from) = filter.from {
        query.push(" AND m.match_date >= ");
        query.push_bind(from);
    }

    if let Some(to) = filter.to {
        query.push(" AND m.match_date < ");
        query.push_bind(to);
    }

    query.push(" ORDER BY m.match_date DESC");

    query
        .build_query_as::<MatchListRow>()
        .fetch_all(executor)
        .await
}
