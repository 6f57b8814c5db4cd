use anyhow::{Context, Result};
use std::env;

/// GraphQL schema switches. Defaults keep introspection off and mutations on.
#[derive(Clone, Debug, Default)]
pub struct GraphqlConfig {
    pub introspection: bool,
    pub read_only: bool,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub skip_migrations: bool,
    pub allowed_origins: Vec<String>,
    pub graphql: GraphqlConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid port number")?,
            skip_migrations: flag(env::var("SKIP_MIGRATIONS").ok()),
            allowed_origins: parse_origins(
                &env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            ),
            graphql: GraphqlConfig {
                introspection: flag(env::var("GQL_INTROSPECTION").ok()),
                read_only: flag(env::var("GRAPHQL_READ_ONLY").ok()),
            },
        })
    }
}

fn flag(value: Option<String>) -> bool {
    value
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_accepts_only_true() {
        assert!(flag(Some("true".into())));
        assert!(flag(Some(" TRUE ".into())));
        assert!(!flag(Some("1".into())));
        assert!(!flag(Some("false".into())));
        assert!(!flag(None));
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        let origins = parse_origins("http://a.test, http://b.test,,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }
}
