use sqlx::PgPool;

use crate::config::GraphqlConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    graphql_config: GraphqlConfig,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        Self {
            db,
            graphql_config: GraphqlConfig::default(),
        }
    }

    pub fn with_graphql_config(mut self, config: GraphqlConfig) -> Self {
        self.graphql_config = config;
        self
    }

    pub fn graphql_config(&self) -> &GraphqlConfig {
        &self.graphql_config
    }
}
