use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, ErrorExtensions, Result, SimpleObject};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::gql::domains::matches::types::Match;
use crate::gql::domains::players::types::Player;
use crate::gql::error::GqlError;
use crate::gql::loaders::TeamLoader;
use crate::state::AppState;
use infra::repos::{matches, players};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Team {
    pub uuid: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<infra::models::TeamRow> for Team {
    fn from(row: infra::models::TeamRow) -> Self {
        Self {
            uuid: row.uuid,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[ComplexObject]
impl Team {
    async fn players(&self, ctx: &Context<'_>) -> Result<Vec<Player>> {
        let state = ctx.data::<AppState>()?;
        let rows = players::list_by_team(&state.db, self.uuid)
            .await
            .map_err(|e| GqlError::from(e).extend())?;
        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn home_matches(&self, ctx: &Context<'_>) -> Result<Vec<Match>> {
        let state = ctx.data::<AppState>()?;
        let rows = matches::list_by_home_team(&state.db, self.uuid)
            .await
            .map_err(|e| GqlError::from(e).extend())?;
        Ok(rows.into_iter().map(Match::from).collect())
    }

    async fn away_matches(&self, ctx: &Context<'_>) -> Result<Vec<Match>> {
        let state = ctx.data::<AppState>()?;
        let rows = matches::list_by_away_team(&state.db, self.uuid)
            .await
            .map_err(|e| GqlError::from(e).extend())?;
        Ok(rows.into_iter().map(Match::from).collect())
    }
}

/// Resolve a team relation through the request-scoped `TeamLoader`.
pub(crate) async fn load_team(ctx: &Context<'_>, team_id: Uuid) -> Result<Team> {
    let loader = ctx.data::<DataLoader<TeamLoader>>()?;

    match loader
        .load_one(team_id)
        .await
        .map_err(|e| GqlError::from(e).extend())?
    {
        Some(row) => Ok(row.into()),
        None => Err(GqlError::not_found("Team", team_id).extend()),
    }
}
