use sqlx::PgPool;
use uuid::Uuid;

use infra::models::PlayerRow;
use infra::repos::{players, teams, CreatePlayer, UpdatePlayer};

use crate::gql::common::validation::{
    non_negative, optional_non_negative, optional_text, required_text, PERSON_NAME_MAX_LEN,
};
use crate::gql::error::GqlError;

/// Arguments of `createPlayer`, as received from the resolver.
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: i32,
    pub team_id: Uuid,
}

/// Arguments of `updatePlayer`; `None` leaves the column unchanged.
#[derive(Default)]
pub struct PlayerChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub jersey_number: Option<i32>,
    pub team_id: Option<Uuid>,
}

impl NewPlayer {
    fn validate(self) -> Result<CreatePlayer, GqlError> {
        Ok(CreatePlayer {
            first_name: required_text("firstName", self.first_name, PERSON_NAME_MAX_LEN)?,
            last_name: required_text("lastName", self.last_name, PERSON_NAME_MAX_LEN)?,
            jersey_number: non_negative("jerseyNumber", self.jersey_number)?,
            team_id: self.team_id,
        })
    }
}

impl PlayerChanges {
    fn validate(self) -> Result<UpdatePlayer, GqlError> {
        Ok(UpdatePlayer {
            first_name: optional_text("firstName", self.first_name, PERSON_NAME_MAX_LEN)?,
            last_name: optional_text("lastName", self.last_name, PERSON_NAME_MAX_LEN)?,
            jersey_number: optional_non_negative("jerseyNumber", self.jersey_number)?,
            team_id: self.team_id,
        })
    }
}

pub async fn get_player(pool: &PgPool, id: Uuid) -> Result<PlayerRow, GqlError> {
    players::get_by_id(pool, id)
        .await?
        .ok_or_else(|| GqlError::not_found("Player", id))
}

pub async fn create_player(pool: &PgPool, input: NewPlayer) -> Result<PlayerRow, GqlError> {
    let data = input.validate()?;

    let mut tx = pool.begin().await?;

    teams::get_by_id(&mut *tx, data.team_id)
        .await?
        .ok_or_else(|| GqlError::not_found("Team", data.team_id))?;

    let player = players::create(&mut *tx, data).await?;
    tx.commit().await?;

    tracing::info!(player_uuid = %player.uuid, team_uuid = %player.team_id, "Player created");
    Ok(player)
}

pub async fn update_player(
    pool: &PgPool,
    id: Uuid,
    changes: PlayerChanges,
) -> Result<PlayerRow, GqlError> {
    let data = changes.validate()?;

    let mut tx = pool.begin().await?;

    if let Some(team_id) = data.team_id {
        teams::get_by_id(&mut *tx, team_id)
            .await?
            .ok_or_else(|| GqlError::not_found("Team", team_id))?;
    }

    let player = players::update(&mut *tx, id, data)
        .await?
        .ok_or_else(|| GqlError::not_found("Player", id))?;
    tx.commit().await?;

    tracing::info!(player_uuid = %player.uuid, "Player updated");
    Ok(player)
}

pub async fn delete_player(pool: &PgPool, id: Uuid) -> Result<(), GqlError> {
    if !players::delete(pool, id).await? {
        return Err(GqlError::not_found("Player", id));
    }

    tracing::info!(player_uuid = %id, "Player deleted");
    Ok(())
}
