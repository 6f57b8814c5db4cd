use async_graphql::{ComplexObject, Context, Result, SimpleObject};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::gql::domains::teams::types::{load_team, Team};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Match {
    pub uuid: Uuid,
    #[graphql(skip)]
    pub home_team_id: Uuid,
    #[graphql(skip)]
    pub away_team_id: Uuid,
    pub match_date: DateTime<Utc>,
    pub home_score: i32,
    pub away_score: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<infra::models::MatchRow> for Match {
    fn from(row: infra::models::MatchRow) -> Self {
        Self {
            uuid: row.uuid,
            home_team_id: row.home_team_id,
            away_team_id: row.away_team_id,
            match_date: row.match_date,
            home_score: row.home_score,
            away_score: row.away_score,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[ComplexObject]
impl Match {
    async fn home_team(&self, ctx: &Context<'_>) -> Result<Team> {
        load_team(ctx, self.home_team_id).await
    }

    async fn away_team(&self, ctx: &Context<'_>) -> Result<Team> {
        load_team(ctx, self.away_team_id).await
    }
}
