pub mod app;
pub mod config;
pub mod error;
pub mod gql;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use state::AppState;
