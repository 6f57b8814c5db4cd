use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptyMutation, EmptySubscription, ObjectType, Schema, SchemaBuilder};

use super::loaders::TeamLoader;
use super::{MutationRoot, QueryRoot};
use crate::state::AppState;

pub type LeagueSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Query-only deployment: the same read surface, no mutations.
pub type ReadOnlySchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState) -> LeagueSchema {
    configure(
        Schema::build(
            QueryRoot::default(),
            MutationRoot::default(),
            EmptySubscription,
        ),
        state,
    )
    .finish()
}

pub fn build_read_only_schema(state: AppState) -> ReadOnlySchema {
    configure(
        Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription),
        state,
    )
    .finish()
}

/// SDL of the full schema, for client tooling.
pub fn export_sdl() -> String {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .finish()
    .sdl()
}

fn configure<M>(
    builder: SchemaBuilder<QueryRoot, M, EmptySubscription>,
    state: AppState,
) -> SchemaBuilder<QueryRoot, M, EmptySubscription>
where
    M: ObjectType + 'static,
{
    let team_loader = DataLoader::new(TeamLoader::new(state.db.clone()), tokio::spawn);
    let introspection_enabled = state.graphql_config().introspection;

    let builder = builder
        .data(state) // AppState is Clone; available in resolvers via ctx.data::<AppState>()
        .data(team_loader)
        .limit_depth(15)
        .limit_complexity(200);

    if introspection_enabled {
        builder
    } else {
        builder.disable_introspection()
    }
}
