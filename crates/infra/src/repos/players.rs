use sqlx::{PgExecutor, Postgres, QueryBuilder, Result as SqlxResult};
use uuid::Uuid;

use super::contains_pattern;
use crate::models::{PlayerListRow, PlayerRow};

#[derive(Debug, Clone)]
pub struct CreatePlayer {
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: i32,
    pub team_id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePlayer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub jersey_number: Option<i32>,
    pub team_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    pub search: Option<String>,
    pub team_id: Option<Uuid>,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<PlayerRow>> {
    sqlx::query_as::<_, PlayerRow>(
        r#"
        SELECT uuid, first_name, last_name, jersey_number, team_id, created_at, updated_at
        FROM players
        ORDER BY last_name ASC, first_name ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn list_by_team<'e>(
    executor: impl PgExecutor<'e>,
    team_id: Uuid,
) -> SqlxResult<Vec<PlayerRow>> {
    sqlx::query_as::<_, PlayerRow>(
        r#"
        SELECT uuid, first_name, last_name, jersey_number, team_id, created_at, updated_at
        FROM players
        WHERE team_id = $1
        ORDER BY jersey_number ASC, last_name ASC
        "#,
    )
    .bind(team_id)
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<PlayerRow>> {
    sqlx::query_as::<_, PlayerRow>(
        r#"
        SELECT uuid, first_name, last_name, jersey_number, team_id, created_at, updated_at
        FROM players
        WHERE uuid = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreatePlayer) -> SqlxResult<PlayerRow> {
    sqlx::query_as::<_, PlayerRow>(
        r#"
        INSERT INTO players (first_name, last_name, jersey_number, team_id)
        VALUES ($1, $2, $3, $4)
        RETURNING uuid, first_name, last_name, jersey_number, team_id, created_at, updated_at
        "#,
    )
    .bind(data.first_name)
    .bind(data.last_name)
    .bind(data.jersey_number)
    .bind(data.team_id)
    .fetch_one(executor)
    .await
}

pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: UpdatePlayer,
) -> SqlxResult<Option<PlayerRow>> {
    sqlx::query_as::<_, PlayerRow>(
        r#"
        UPDATE players
        SET first_name = COALESCE($2, first_name),
            last_name = COALESCE($3, last_name),
            jersey_number = COALESCE($4, jersey_number),
            team_id = COALESCE($5, team_id),
            updated_at = GREATEST(NOW(), created_at)
        WHERE uuid = $1
        RETURNING uuid, first_name, last_name, jersey_number, team_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(data.first_name)
    .bind(data.last_name)
    .bind(data.jersey_number)
    .bind(data.team_id)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let result = sqlx::query("DELETE FROM players WHERE uuid = $1")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Remove every player on a team. Returns the number of rows deleted.
pub async fn delete_by_team<'e>(executor: impl PgExecutor<'e>, team_id: Uuid) -> SqlxResult<u64> {
    let result = sqlx::query("DELETE FROM players WHERE team_id = $1")
        .bind(team_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}

pub async fn search<'e>(
    executor: impl PgExecutor<'e>,
    filter: PlayerFilter,
) -> SqlxResult<Vec<PlayerListRow>> {
    let mut query: QueryBuilder<Postgres> = QueryBuilder::new(
        r#"
        SELECT p.uuid, p.first_name, p.last_name, p.jersey_number, p.team_id,
               t.name AS team_name, p.created_at, p.updated_at
        FROM players p
        INNER JOIN teams t ON t.uuid = p.team_id
        WHERE 1=1
        "#,
    );

    if let Some(search) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
        let pattern = contains_pattern(search);
        query.push(" AND (LOWER(p.first_name) LIKE ");
        query.push_bind(pattern.clone());
        query.push(r" ESCAPE '\' OR LOWER(p.last_name) LIKE ");
        query.push_bind(pattern);
        query.push(r" ESCAPE '\')");
    }

    if let Some(team_id) = filter.team_id {
        query.push(" AND p.team_id = ");
        query.push_bind(team_id);
    }

    query.push(" ORDER BY p.last_name ASC, p.first_name ASC");

    query
        .build_query_as::<PlayerListRow>()
        .fetch_all(executor)
        .await
}
