use async_graphql::{ComplexObject, Context, Result, SimpleObject};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::gql::domains::teams::types::{load_team, Team};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Player {
    pub uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: i32,
    #[graphql(skip)]
    pub team_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<infra::models::PlayerRow> for Player {
    fn from(row: infra::models::PlayerRow) -> Self {
        Self {
            uuid: row.uuid,
            first_name: row.first_name,
            last_name: row.last_name,
            jersey_number: row.jersey_number,
            team_id: row.team_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[ComplexObject]
impl Player {
    async fn team(&self, ctx: &Context<'_>) -> Result<Team> {
        load_team(ctx, self.team_id).await
    }
}
