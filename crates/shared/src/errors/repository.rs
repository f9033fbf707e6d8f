use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Repository error: {0}")]
    Custom(String),
}

impl RepositoryError {
    /// Classify a sqlx error raised by an INSERT against the constraint
    /// that tripped it. Anything unrecognized stays a plain `Sqlx` error.
    pub fn from_insert_error(err: sqlx::Error, context: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            match db_err.kind() {
                sqlx::error::ErrorKind::UniqueViolation => {
                    return RepositoryError::AlreadyExists(context.to_string());
                }
                sqlx::error::ErrorKind::ForeignKeyViolation => {
                    return RepositoryError::ForeignKey(context.to_string());
                }
                _ => {}
            }
        }
        RepositoryError::Sqlx(err)
    }
}
