use std::time::Duration;

use chrono::NaiveDate;
use sqlx::FromRow;
use tokio::time;

use crate::connector::{self, DbTarget, ReportConnection};
use crate::error::ReportError;
use crate::format;
use crate::{postgres_queries, shared_queries, sqlite_queries};

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ArticleViews {
    pub title: String,
    pub views: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct AuthorViews {
    pub name: String,
    pub views: i64,
}

/// A day whose error count went over 1% of its requests
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ErrorDay {
    pub day: NaiveDate,
    pub errors: i64,
    pub requests: i64,
}

impl ErrorDay {
    /// Fraction of the day's requests that failed
    pub fn ratio(&self) -> f64 {
        if self.requests == 0 {
            return 0.0;
        }
        self.errors as f64 / self.requests as f64
    }
}

/// The three sections of the report, in print order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    TopArticles,
    TopAuthors,
    ErrorDays,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::TopArticles, Section::TopAuthors, Section::ErrorDays];

    pub fn title(self) -> &'static str {
        match self {
            Self::TopArticles => "Most Popular Articles of All Time:",
            Self::TopAuthors => "Most Popular Authors of All Time:",
            Self::ErrorDays => "More than 1% of requests led to an error on this/those day(s):",
        }
    }

    /// Connect, query, disconnect and render the section's data lines
    pub async fn run(
        self,
        target: &DbTarget,
        timeout: Duration,
    ) -> Result<Vec<String>, ReportError> {
        let lines = match self {
            Self::TopArticles => {
                let articles = top_articles(target, timeout).await?;
                articles
                    .iter()
                    .enumerate()
                    .map(|(i, a)| format::ranked_views(i + 1, &a.title, a.views))
                    .collect()
            }
            Self::TopAuthors => {
                let authors = top_authors(target, timeout).await?;
                authors
                    .iter()
                    .enumerate()
                    .map(|(i, a)| format::ranked_views(i + 1, &a.name, a.views))
                    .collect()
            }
            Self::ErrorDays => {
                let days = error_days(target, timeout).await?;
                if days.is_empty() {
                    vec![format::no_error_days()]
                } else {
                    days.iter()
                        .enumerate()
                        .map(|(i, d)| format::ranked_error_day(i + 1, d.day, d.ratio()))
                        .collect()
                }
            }
        };

        Ok(lines)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::TopArticles => "top articles report",
            Self::TopAuthors => "top authors report",
            Self::ErrorDays => "error days report",
        };
        f.write_str(name)
    }
}

pub async fn top_articles(
    target: &DbTarget,
    timeout: Duration,
) -> Result<Vec<ArticleViews>, ReportError> {
    fetch_all(
        target,
        timeout,
        shared_queries::SELECT_TOP_ARTICLES_QUERY,
        shared_queries::SELECT_TOP_ARTICLES_QUERY,
    )
    .await
}

pub async fn top_authors(
    target: &DbTarget,
    timeout: Duration,
) -> Result<Vec<AuthorViews>, ReportError> {
    fetch_all(
        target,
        timeout,
        shared_queries::SELECT_TOP_AUTHORS_QUERY,
        shared_queries::SELECT_TOP_AUTHORS_QUERY,
    )
    .await
}

pub async fn error_days(target: &DbTarget, timeout: Duration) -> Result<Vec<ErrorDay>, ReportError> {
    fetch_all(
        target,
        timeout,
        postgres_queries::SELECT_ERROR_DAYS,
        sqlite_queries::SELECT_ERROR_DAYS,
    )
    .await
}

/// Open a connection, read every row of the query for that backend, then close it
async fn fetch_all<T>(
    target: &DbTarget,
    timeout: Duration,
    pg_query: &'static str,
    sqlite_query: &'static str,
) -> Result<Vec<T>, ReportError>
where
    T: for<'r> FromRow<'r, sqlx::postgres::PgRow>
        + for<'r> FromRow<'r, sqlx::sqlite::SqliteRow>
        + Send
        + Unpin,
{
    let mut connection = connector::connect(target, timeout).await?;

    let fetched = time::timeout(timeout, async {
        match &mut connection {
            ReportConnection::Postgres(p) => {
                sqlx::query_as::<_, T>(pg_query).fetch_all(p).await
            }
            ReportConnection::Sqlite(s) => {
                sqlx::query_as::<_, T>(sqlite_query).fetch_all(s).await
            }
        }
    })
    .await;

    if let Err(e) = connection.close().await {
        tracing::warn!(error = %e, "failed to close connection");
    }

    match fetched {
        Ok(Ok(rows)) => {
            tracing::debug!(rows = rows.len(), "fetched");
            Ok(rows)
        }
        Ok(Err(e)) => Err(ReportError::from_query(e)),
        Err(_) => Err(ReportError::QueryTimeout {
            seconds: timeout.as_secs(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(errors: i64, requests: i64) -> ErrorDay {
        ErrorDay {
            day: NaiveDate::from_ymd_opt(2016, 7, 17).unwrap(),
            errors,
            requests,
        }
    }

    #[test]
    fn ratio_is_errors_over_requests() {
        assert!((day(233, 10_000).ratio() - 0.0233).abs() < 1e-12);
        assert_eq!(day(5, 0).ratio(), 0.0);
    }

    #[test]
    fn sections_run_in_fixed_order() {
        assert_eq!(
            Section::ALL,
            [Section::TopArticles, Section::TopAuthors, Section::ErrorDays]
        );
        assert_eq!(Section::TopAuthors.to_string(), "top authors report");
    }
}
