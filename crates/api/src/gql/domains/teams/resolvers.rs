use async_graphql::{Context, ErrorExtensions, Object, Result};
use uuid::Uuid;

use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::repos::teams;

use super::service;
use super::types::Team;

#[derive(Default)]
pub struct TeamQuery;

#[Object]
impl TeamQuery {
    async fn teams(&self, ctx: &Context<'_>) -> Result<Vec<Team>> {
        let state = ctx.data::<AppState>()?;
        let rows = teams::list(&state.db)
            .await
            .map_err(|e| GqlError::from(e).extend())?;
        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn team(&self, ctx: &Context<'_>, #[graphql(name = "uuid")] id: Uuid) -> Result<Team> {
        let state = ctx.data::<AppState>()?;
        let row = service::get_team(&state.db, id)
            .await
            .map_err(|e| e.extend())?;
        Ok(row.into())
    }
}

#[derive(Default)]
pub struct TeamMutation;

#[Object]
impl TeamMutation {
    async fn create_team(&self, ctx: &Context<'_>, name: String) -> Result<Team> {
        let state = ctx.data::<AppState>()?;
        let row = service::create_team(&state.db, name)
            .await
            .map_err(|e| e.extend())?;
        Ok(row.into())
    }

    async fn update_team(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "uuid")] id: Uuid,
        name: String,
    ) -> Result<Team> {
        let state = ctx.data::<AppState>()?;
        let row = service::update_team(&state.db, id, name)
            .await
            .map_err(|e| e.extend())?;
        Ok(row.into())
    }

    /// Delete a team and its players. Rejected while matches reference the team.
    async fn delete_team(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "uuid")] id: Uuid,
    ) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        service::delete_team(&state.db, id)
            .await
            .map_err(|e| e.extend())?;
        Ok(true)
    }
}
