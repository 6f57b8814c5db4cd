use async_graphql::MergedObject;

use crate::gql::domains::matches::MatchMutation;
use crate::gql::domains::players::PlayerMutation;
use crate::gql::domains::teams::TeamMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(MatchMutation, PlayerMutation, TeamMutation);
