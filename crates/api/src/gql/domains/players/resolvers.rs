use async_graphql::{Context, ErrorExtensions, Object, Result};
use uuid::Uuid;

use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::repos::players;

use super::service::{self, NewPlayer, PlayerChanges};
use super::types::Player;

#[derive(Default)]
pub struct PlayerQuery;

#[Object]
impl PlayerQuery {
    async fn players(&self, ctx: &Context<'_>) -> Result<Vec<Player>> {
        let state = ctx.data::<AppState>()?;
        let rows = players::list(&state.db)
            .await
            .map_err(|e| GqlError::from(e).extend())?;
        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn player(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "uuid")] id: Uuid,
    ) -> Result<Player> {
        let state = ctx.data::<AppState>()?;
        let row = service::get_player(&state.db, id)
            .await
            .map_err(|e| e.extend())?;
        Ok(row.into())
    }
}

#[derive(Default)]
pub struct PlayerMutation;

#[Object]
impl PlayerMutation {
    async fn create_player(
        &self,
        ctx: &Context<'_>,
        first_name: String,
        last_name: String,
        jersey_number: i32,
        team_id: Uuid,
    ) -> Result<Player> {
        let state = ctx.data::<AppState>()?;
        let input = NewPlayer {
            first_name,
            last_name,
            jersey_number,
            team_id,
        };
        let row = service::create_player(&state.db, input)
            .await
            .map_err(|e| e.extend())?;
        Ok(row.into())
    }

    /// Only the supplied fields change.
    async fn update_player(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "uuid")] id: Uuid,
        first_name: Option<String>,
        last_name: Option<String>,
        jersey_number: Option<i32>,
        team_id: Option<Uuid>,
    ) -> Result<Player> {
        let state = ctx.data::<AppState>()?;
        let changes = PlayerChanges {
            first_name,
            last_name,
            jersey_number,
            team_id,
        };
        let row = service::update_player(&state.db, id, changes)
            .await
            .map_err(|e| e.extend())?;
        Ok(row.into())
    }

    async fn delete_player(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "uuid")] id: Uuid,
    ) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        service::delete_player(&state.db, id)
            .await
            .map_err(|e| e.extend())?;
        Ok(true)
    }
}
