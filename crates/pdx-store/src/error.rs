use pdx_pg::PgErr;

/// Failures raised by a [`Store`](crate::Store).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database rejected or failed a statement.
    #[error("database error: {0}")]
    Postgres(#[from] PgErr),
    /// A uniqueness or ownership invariant would have been broken.
    #[error("integrity violation: {0}")]
    Integrity(String),
    /// The PostgreSQL store was requested without a connection URL.
    #[error("DB_URL must be set to use the postgres store")]
    Unconfigured,
}

impl StoreError {
    /// Unique-constraint violations surface as integrity errors so both
    /// store implementations report duplicates the same way.
    pub fn classify(e: PgErr) -> Self {
        match e.code() {
            Some(code) if *code == tokio_postgres::error::SqlState::UNIQUE_VIOLATION => {
                Self::Integrity(e.to_string())
            }
            _ => Self::Postgres(e),
        }
    }
}
