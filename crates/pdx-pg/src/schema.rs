/// Schema metadata for PostgreSQL tables.
///
/// Provides compile-time SQL generation for table creation and indexing.
/// All methods return `&'static str` to avoid runtime allocations and
/// enable compile-time string construction via `const_format::concatcp!`.
///
/// # Design
///
/// This trait contains no I/O operations; it purely describes table
/// structure. [`create`] applies it to a live connection.
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for secondary
    /// indices. Tables whose only lookups go through a `UNIQUE` or primary
    /// key constraint have none.
    fn indices() -> &'static str {
        ""
    }
}

/// Creates the table and its indices if they do not exist yet.
pub async fn create<S: Schema>(client: &tokio_postgres::Client) -> Result<(), crate::PgErr> {
    log::debug!("creating table ({})", S::name());
    client.batch_execute(S::creates()).await?;
    if !S::indices().is_empty() {
        client.batch_execute(S::indices()).await?;
    }
    Ok(())
}
