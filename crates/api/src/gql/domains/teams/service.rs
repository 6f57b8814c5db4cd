use sqlx::PgPool;
use uuid::Uuid;

use infra::models::TeamRow;
use infra::repos::{matches, players, teams, UpdateTeam};

use crate::gql::common::validation::{required_text, TEAM_NAME_MAX_LEN};
use crate::gql::error::GqlError;

pub async fn get_team(pool: &PgPool, id: Uuid) -> Result<TeamRow, GqlError> {
    teams::get_by_id(pool, id)
        .await?
        .ok_or_else(|| GqlError::not_found("Team", id))
}

pub async fn create_team(pool: &PgPool, name: String) -> Result<TeamRow, GqlError> {
    let name = required_text("name", name, TEAM_NAME_MAX_LEN)?;
    let team = teams::create(pool, &name).await?;

    tracing::info!(team_uuid = %team.uuid, name = %team.name, "Team created");
    Ok(team)
}

pub async fn update_team(pool: &PgPool, id: Uuid, name: String) -> Result<TeamRow, GqlError> {
    let name = required_text("name", name, TEAM_NAME_MAX_LEN)?;
    let team = teams::update(pool, id, UpdateTeam { name: Some(name) })
        .await?
        .ok_or_else(|| GqlError::not_found("Team", id))?;

    tracing::info!(team_uuid = %team.uuid, "Team updated");
    Ok(team)
}

/// Delete a team together with its players.
///
/// Fails with `ProtectedReference` while any match names the team as home or
/// away side. The team row is locked for the duration of the transaction so a
/// match cannot be attached between the check and the delete.
pub async fn delete_team(pool: &PgPool, id: Uuid) -> Result<(), GqlError> {
    let mut tx = pool.begin().await?;

    teams::get_by_id_for_update(&mut *tx, id)
        .await?
        .ok_or_else(|| GqlError::not_found("Team", id))?;

    let referencing = matches::count_for_team(&mut *tx, id).await?;
    if referencing > 0 {
        return Err(protected(id, referencing));
    }

    let removed_players = players::delete_by_team(&mut *tx, id).await?;

    teams::delete(&mut *tx, id).await.map_err(|e| {
        let is_fk = e
            .as_database_error()
            .is_some_and(|db_err| db_err.is_foreign_key_violation());
        if is_fk {
            protected(id, 1)
        } else {
            GqlError::from(e)
        }
    })?;

    tx.commit().await?;

    tracing::info!(team_uuid = %id, removed_players, "Team deleted");
    Ok(())
}

fn protected(id: Uuid, referencing: i64) -> GqlError {
    GqlError::ProtectedReference(format!(
        "Team {id} is referenced by {referencing} match(es) and cannot be deleted"
    ))
}
