use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::PgConnectOptions;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, PgConnection, SqliteConnection};
use tokio::time;

use crate::error::ReportError;

pub const DEFAULT_DATABASE: &str = "news";

/// Where the report reads from
#[derive(Clone, Debug)]
pub enum DbTarget {
    Postgres(PgConnectOptions),
    Sqlite(SqliteConnectOptions),
}

impl DbTarget {
    /// Postgres database by name, host and credentials come from the libpq environment
    pub fn postgres_database(name: &str) -> Self {
        DbTarget::Postgres(PgConnectOptions::new().database(name))
    }

    pub fn postgres_url(url: &str) -> Result<Self, sqlx::Error> {
        Ok(DbTarget::Postgres(PgConnectOptions::from_str(url)?))
    }

    /// Existing Sqlite file, opened read-only
    pub fn sqlite(path: impl AsRef<Path>) -> Self {
        DbTarget::Sqlite(
            SqliteConnectOptions::new()
                .filename(path)
                .read_only(true)
                .create_if_missing(false),
        )
    }

    fn backend(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Sqlite(_) => "sqlite",
        }
    }
}

impl Default for DbTarget {
    fn default() -> Self {
        Self::postgres_database(DEFAULT_DATABASE)
    }
}

/// A single open connection, one per report section
pub enum ReportConnection {
    Postgres(PgConnection),
    Sqlite(SqliteConnection),
}

impl ReportConnection {
    pub async fn close(self) -> Result<(), sqlx::Error> {
        match self {
            Self::Postgres(p) => p.close().await,
            Self::Sqlite(s) => s.close().await,
        }
    }
}

pub async fn connect(target: &DbTarget, timeout: Duration) -> Result<ReportConnection, ReportError> {
    let connecting = async {
        match target {
            DbTarget::Postgres(options) => PgConnection::connect_with(options)
                .await
                .map(ReportConnection::Postgres),
            DbTarget::Sqlite(options) => SqliteConnection::connect_with(options)
                .await
                .map(ReportConnection::Sqlite),
        }
    };

    match time::timeout(timeout, connecting).await {
        Ok(Ok(connection)) => {
            tracing::debug!(backend = target.backend(), "connected");
            Ok(connection)
        }
        Ok(Err(source)) => Err(ReportError::Connection { source }),
        Err(_) => Err(ReportError::ConnectTimeout {
            seconds: timeout.as_secs(),
        }),
    }
}
