use std::io::{self, Write};
use std::time::Duration;

pub mod argument_parsing;
pub mod connector;
pub mod error;
pub mod format;
pub mod postgres_queries;
pub mod report;
pub mod shared_queries;
pub mod sqlite_queries;

pub use connector::DbTarget;
pub use error::ReportError;
pub use report::Section;

/// Outcome of a whole run, one entry per failed section
#[derive(Debug, Default)]
pub struct ReportSummary {
    pub failed: Vec<(Section, ReportError)>,
}

impl ReportSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Print every section in order. A failing section is reported on `err` and skipped,
/// the ones after it still run.
pub async fn run_report<W: Write, E: Write>(
    target: &DbTarget,
    timeout: Duration,
    out: &mut W,
    err: &mut E,
) -> io::Result<ReportSummary> {
    let mut summary = ReportSummary::default();

    for section in Section::ALL {
        writeln!(out, "{}", format::section_header(section.title()))?;

        match section.run(target, timeout).await {
            Ok(lines) => {
                for line in lines {
                    writeln!(out, "{line}")?;
                }
            }
            Err(e) => {
                tracing::error!(%section, error = %e, "section failed");
                writeln!(err, "Error in {section}: {e}")?;
                summary.failed.push((section, e));
            }
        }
        out.flush()?;
    }

    Ok(summary)
}
