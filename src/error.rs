use thiserror::Error;

/// Everything that can end a report section early
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Unable to connect: {source}")]
    Connection { source: sqlx::Error },

    #[error("Unable to connect: gave up after {seconds}s")]
    ConnectTimeout { seconds: u64 },

    #[error("Query failed: {source}")]
    Query { source: sqlx::Error },

    #[error("Unexpected row shape: {source}")]
    Format { source: sqlx::Error },

    #[error("Query gave up after {seconds}s")]
    QueryTimeout { seconds: u64 },
}

impl ReportError {
    /// Sort a driver error raised while running a query into a query or a row shape problem
    pub fn from_query(source: sqlx::Error) -> Self {
        match source {
            sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_) => Self::Format { source },
            source => Self::Query { source },
        }
    }
}
