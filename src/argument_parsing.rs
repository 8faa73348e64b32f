use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::connector::{DEFAULT_DATABASE, DbTarget};

/// Print the most popular articles, authors and error-heavy days of the news database
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Postgres Db Connection String, takes precedence over --dbname
    #[arg(short, long, env, default_value = None)]
    pub pg: Option<String>,

    /// Postgres database name, the rest comes from PGHOST, PGUSER, ...
    #[arg(short, long, env, default_value = DEFAULT_DATABASE)]
    pub dbname: String,

    /// Sqlite Db file to read instead of Postgres
    #[arg(short, long, env, default_value = None)]
    pub sqlite: Option<PathBuf>,

    /// Connect and query timeout in seconds
    #[arg(short, long, env, default_value_t = 30)]
    pub timeout: u64,
}

impl Args {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn target(&self) -> Result<DbTarget, sqlx::Error> {
        if let Some(path) = &self.sqlite {
            return Ok(DbTarget::sqlite(path));
        }
        match self.pg.as_deref() {
            Some(url) if !url.is_empty() => DbTarget::postgres_url(url),
            _ => Ok(DbTarget::postgres_database(&self.dbname)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_news_database() {
        let args = Args::try_parse_from(["news-report"]).unwrap();
        assert_eq!(args.dbname, "news");
        assert_eq!(args.timeout(), Duration::from_secs(30));
        assert!(matches!(args.target().unwrap(), DbTarget::Postgres(_)));
    }

    #[test]
    fn sqlite_path_wins_over_postgres() {
        let args = Args::try_parse_from([
            "news-report",
            "--pg",
            "postgres://localhost/news",
            "--sqlite",
            "news.db",
        ])
        .unwrap();
        assert!(matches!(args.target().unwrap(), DbTarget::Sqlite(_)));
    }

    #[test]
    fn empty_pg_string_falls_back_to_dbname() {
        let args = Args::try_parse_from(["news-report", "--pg", "", "--dbname", "other"]).unwrap();
        assert!(matches!(args.target().unwrap(), DbTarget::Postgres(_)));
    }

    #[test]
    fn malformed_pg_url_is_rejected() {
        let args = Args::try_parse_from(["news-report", "--pg", "not a url"]).unwrap();
        assert!(args.target().is_err());
    }
}
