// Each domain contains: mod.rs, resolvers.rs, service.rs, types.rs

pub mod matches;
pub mod players;
pub mod teams;
