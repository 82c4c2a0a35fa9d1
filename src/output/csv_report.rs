//! CSV report generation
//!
//! One row per link, grouped by container, with a fixed header:
//!
//! ```text
//! Container,Link,Is Topic,Is Broken
//! ```

use crate::model::LinkDictionary;
use crate::AuditError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column names of the report, in order
pub const REPORT_HEADER: [&str; 4] = ["Container", "Link", "Is Topic", "Is Broken"];

/// Writes the report to any writer and flushes it
///
/// Containers without links produce no rows. An empty container name is
/// replaced by `placeholder`.
///
/// # Returns
///
/// The number of rows written, not counting the header
pub fn write_report<W: Write>(
    dict: &LinkDictionary,
    placeholder: &str,
    writer: W,
) -> Result<usize, AuditError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(REPORT_HEADER)?;

    let mut rows = 0;
    for (name, links) in dict.iter() {
        if links.is_empty() {
            continue;
        }

        let container = if name.is_empty() { placeholder } else { name };
        for link in links {
            csv_writer.write_record([
                container,
                link.url.as_str(),
                bool_column(link.is_topic_url),
                bool_column(link.is_broken),
            ])?;
            rows += 1;
        }
    }

    csv_writer.flush()?;
    Ok(rows)
}

/// Creates (or truncates) the report file at `path` and writes the report
pub fn write_report_file(
    dict: &LinkDictionary,
    placeholder: &str,
    path: &Path,
) -> Result<usize, AuditError> {
    let file = File::create(path)?;
    let rows = write_report(dict, placeholder, file)?;
    tracing::info!("Wrote {} rows to {}", rows, path.display());
    Ok(rows)
}

fn bool_column(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
