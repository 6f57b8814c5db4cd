use async_graphql::dataloader::Loader;
use infra::{db::Db, models::TeamRow, repos::teams};
use std::{collections::HashMap, future::Future, sync::Arc};
use uuid::Uuid;

// TeamLoader - batch load teams by ID for player/match relations
#[derive(Clone)]
pub struct TeamLoader {
    pool: Db,
}

impl TeamLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for TeamLoader {
    type Value = TeamRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = teams::get_many(&pool, &ids).await.map_err(Arc::new)?;

            Ok(rows.into_iter().map(|r| (r.uuid, r)).collect())
        }
    }
}
