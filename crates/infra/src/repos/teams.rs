use sqlx::{PgExecutor, Postgres, QueryBuilder, Result as SqlxResult};
use uuid::Uuid;

use super::contains_pattern;
use crate::models::TeamRow;

#[derive(Debug, Clone, Default)]
pub struct TeamFilter {
    pub search: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateTeam {
    pub name: Option<String>,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<TeamRow>> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        SELECT uuid, name, created_at, updated_at
        FROM teams
        ORDER BY name ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<Option<TeamRow>> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        SELECT uuid, name, created_at, updated_at
        FROM teams
        WHERE uuid = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Fetch a team and hold a row lock until the surrounding transaction ends.
/// Concurrent inserts referencing the team block on this lock.
pub async fn get_by_id_for_update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<TeamRow>> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        SELECT uuid, name, created_at, updated_at
        FROM teams
        WHERE uuid = $1
        FOR UPDATE
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn get_many<'e>(executor: impl PgExecutor<'e>, ids: &[Uuid]) -> SqlxResult<Vec<TeamRow>> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        SELECT uuid, name, created_at, updated_at
        FROM teams
        WHERE uuid = ANY($1::uuid[])
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, name: &str) -> SqlxResult<TeamRow> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        INSERT INTO teams (name)
        VALUES ($1)
        RETURNING uuid, name, created_at, updated_at
        "#,
    )
    .bind(name)
    .fetch_one(executor)
    .await
}

pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: UpdateTeam,
) -> SqlxResult<Option<TeamRow>> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        UPDATE teams
        SET name = COALESCE($2, name),
            updated_at = GREATEST(NOW(), created_at)
        WHERE uuid = $1
        RETURNING uuid, name, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(data.name)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let result = sqlx::query("DELETE FROM teams WHERE uuid = $1")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Case-insensitive name search for the admin list view.
pub async fn search<'e>(executor: impl PgExecutor<'e>, filter: TeamFilter) -> SqlxResult<Vec<TeamRow>> {
    let mut query: QueryBuilder<Postgres> =
        QueryBuilder::new("SELECT uuid, name, created_at, updated_at FROM teams WHERE 1=1");

    if let Some(search) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
        query.push(" AND LOWER(name) LIKE ");
        query.push_bind(contains_pattern(search));
        query.push(r" ESCAPE '\'");
    }

    query.push(" ORDER BY name ASC");

    query.build_query_as::<TeamRow>().fetch_all(executor).await
}
