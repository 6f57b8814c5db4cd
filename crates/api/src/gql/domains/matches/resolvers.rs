use async_graphql::{Context, ErrorExtensions, Object, Result};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::repos::matches;

use super::service::{self, MatchChanges, NewMatch};
use super::types::Match;

#[derive(Default)]
pub struct MatchQuery;

#[Object]
impl MatchQuery {
    async fn matches(&self, ctx: &Context<'_>) -> Result<Vec<Match>> {
        let state = ctx.data::<AppState>()?;
        let rows = matches::list(&state.db)
            .await
            .map_err(|e| GqlError::from(e).extend())?;
        Ok(rows.into_iter().map(Match::from).collect())
    }

    #[graphql(name = "match")]
    async fn match_by_id(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "uuid")] id: Uuid,
    ) -> Result<Match> {
        let state = ctx.data::<AppState>()?;
        let row = service::get_match(&state.db, id)
            .await
            .map_err(|e| e.extend())?;
        Ok(row.into())
    }
}

#[derive(Default)]
pub struct MatchMutation;

#[Object]
impl MatchMutation {
    async fn create_match(
        &self,
        ctx: &Context<'_>,
        home_team_id: Uuid,
        away_team_id: Uuid,
        match_date: DateTime<Utc>,
        home_score: i32,
        away_score: i32,
    ) -> Result<Match> {
        let state = ctx.data::<AppState>()?;
        let input = NewMatch {
            home_team_id,
            away_team_id,
            match_date,
            home_score,
            away_score,
        };
        let row = service::create_match(&state.db, input)
            .await
            .map_err(|e| e.extend())?;
        Ok(row.into())
    }

    #[allow(clippy::too_many_arguments)]
    async fn update_match(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "uuid")] id: Uuid,
        home_team_id: Option<Uuid>,
        away_team_id: Option<Uuid>,
        match_date: Option<DateTime<Utc>>,
        home_score: Option<i32>,
        away_score: Option<i32>,
    ) -> Result<Match> {
        let state = ctx.data::<AppState>()?;
        let changes = MatchChanges {
            home_team_id,
            away_team_id,
            match_date,
            home_score,
            away_score,
        };
        let row = service::update_match(&state.db, id, changes)
            .await
            .map_err(|e| e.extend())?;
        Ok(row.into())
    }

    async fn delete_match(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "uuid")] id: Uuid,
    ) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        service::delete_match(&state.db, id)
            .await
            .map_err(|e| e.extend())?;
        Ok(true)
    }
}
