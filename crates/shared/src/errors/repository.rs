use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Already exists: {0}")]
    AlreadyExists(String),
}

impl RepositoryError {
    /// Maps a unique-key violation to `AlreadyExists`, everything else to `Sqlx`.
    pub fn from_insert(err: SqlxError, conflict_message: impl FnOnce() -> String) -> Self {
        match &err {
            SqlxError::Database(db_err) if db_err.is_unique_violation() => {
                RepositoryError::AlreadyExists(conflict_message())
            }
            _ => RepositoryError::Sqlx(err),
        }
    }
}
