/// Shared connection pool handle used by repositories and loaders.
pub type Db = sqlx::PgPool;
