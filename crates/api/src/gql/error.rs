use std::sync::Arc;

use async_graphql::ErrorExtensions;
use uuid::Uuid;

/// Unified error type for GraphQL resolvers and domain services.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so `?` works directly, but that drops the error code. Resolvers call
/// `.map_err(|e| e.extend())` to keep `extensions.code` on the response:
///   - `Validation` → `VALIDATION_ERROR`
///   - `NotFound` → `NOT_FOUND`
///   - `UniqueViolation` → `UNIQUE_CONSTRAINT_VIOLATION`
///   - `ProtectedReference` → `PROTECTED_REFERENCE`
///   - `Sqlx` → `INTERNAL` (the detail is logged, clients get a sanitized message)
#[derive(Debug)]
pub enum GqlError {
    Validation(String),
    NotFound(String),
    UniqueViolation(String),
    ProtectedReference(String),
    Sqlx(Arc<sqlx::Error>),
}

impl GqlError {
    pub fn not_found(entity: &str, id: Uuid) -> Self {
        GqlError::NotFound(format!("{entity} not found: {id}"))
    }

    pub fn code(&self) -> &'static str {
        match self {
            GqlError::Validation(_) => "VALIDATION_ERROR",
            GqlError::NotFound(_) => "NOT_FOUND",
            GqlError::UniqueViolation(_) => "UNIQUE_CONSTRAINT_VIOLATION",
            GqlError::ProtectedReference(_) => "PROTECTED_REFERENCE",
            GqlError::Sqlx(_) => "INTERNAL",
        }
    }
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Sqlx(_) => write!(f, "Internal database error"),
            GqlError::Validation(msg)
            | GqlError::NotFound(msg)
            | GqlError::UniqueViolation(msg)
            | GqlError::ProtectedReference(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for GqlError {}

impl ErrorExtensions for GqlError {
    fn extend(&self) -> async_graphql::Error {
        if let GqlError::Sqlx(e) = self {
            tracing::error!("Database error: {e}");
        }
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| ext.set("code", code))
    }
}

/// Classify constraint failures the schema enforces; anything else stays opaque.
impl From<sqlx::Error> for GqlError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() {
                let msg = match db_err.constraint() {
                    Some("teams_name_key") => "A team with this name already exists".to_string(),
                    Some(name) => format!("Unique constraint violated: {name}"),
                    None => "Unique constraint violated".to_string(),
                };
                return GqlError::UniqueViolation(msg);
            }
            if db_err.is_check_violation() {
                let msg = match db_err.constraint() {
                    Some(name) => format!("Check constraint violated: {name}"),
                    None => "Check constraint violated".to_string(),
                };
                return GqlError::Validation(msg);
            }
            if db_err.is_foreign_key_violation() {
                return GqlError::NotFound("Referenced team does not exist".to_string());
            }
        }
        GqlError::Sqlx(Arc::new(e))
    }
}

/// Loader failures arrive shared; they are never constraint violations.
impl From<Arc<sqlx::Error>> for GqlError {
    fn from(e: Arc<sqlx::Error>) -> Self {
        GqlError::Sqlx(e)
    }
}
