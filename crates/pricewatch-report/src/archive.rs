//! Local report archive.

use chrono::{Days, NaiveDate};
use std::fmt::Write;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::DailyReport;
use crate::report::file_name_for;

/// How many days back the README index looks, today included.
pub const RECENT_DAYS: u64 = 7;

const INDEX_FILE_NAME: &str = "README.md";

/// Errors that can occur while reading or writing the archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Filesystem operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path involved.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
}

/// Renders the README that links to the given report dates.
///
/// `link_prefix` is prepended to each report file name, e.g. `./reports/`.
#[must_use]
pub fn render_index(dates: &[NaiveDate], link_prefix: &str) -> String {
    let mut md = String::from(
        "# Market Reports\n\nDaily crypto and US index reports, updated automatically.\n\n## Recent Reports\n\n",
    );
    for date in dates {
        let _ = writeln!(md, "- [{date}]({link_prefix}{})", file_name_for(*date));
    }
    md
}

/// A directory of `report-YYYY-MM-DD.md` files plus a `README.md` index.
#[derive(Debug, Clone)]
pub struct ReportArchive {
    dir: PathBuf,
}

impl ReportArchive {
    /// Creates an archive rooted at `dir`. The directory is created on save.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the archive directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path of the report for `date`.
    #[must_use]
    pub fn report_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(file_name_for(date))
    }

    /// Returns the path of the README index.
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.dir.join(INDEX_FILE_NAME)
    }

    /// Writes the report and rewrites the README index.
    ///
    /// Returns the path of the written report.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or either file cannot be written.
    pub fn save(&self, report: &DailyReport) -> Result<PathBuf, ArchiveError> {
        fs::create_dir_all(&self.dir).map_err(|e| io_error(&self.dir, e))?;

        let path = self.report_path(report.date());
        fs::write(&path, report.markdown()).map_err(|e| io_error(&path, e))?;

        let dates = self.recent_dates(report.date());
        let index = self.index_path();
        fs::write(&index, render_index(&dates, "./")).map_err(|e| io_error(&index, e))?;

        info!(path = %path.display(), indexed = dates.len(), "report archived");
        Ok(path)
    }

    /// Returns the dates within the last [`RECENT_DAYS`] days (ending at
    /// `today`) that have a report on disk, newest first.
    #[must_use]
    pub fn recent_dates(&self, today: NaiveDate) -> Vec<NaiveDate> {
        (0..RECENT_DAYS)
            .filter_map(|back| today.checked_sub_days(Days::new(back)))
            .filter(|date| self.report_path(*date).is_file())
            .collect()
    }
}

fn io_error(path: &Path, source: io::Error) -> ArchiveError {
    ArchiveError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MarketSnapshot;
    use chrono::{TimeZone, Utc};
    use pricewatch_types::Asset;
    use tempfile::TempDir;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
    }

    fn report_on(day: u32) -> DailyReport {
        DailyReport::new(MarketSnapshot {
            crypto: Err("offline".to_string()),
            index_asset: Asset::unlisted("^IXIC"),
            index: Err("offline".to_string()),
            taken_at: Utc.with_ymd_and_hms(2026, 10, day, 8, 0, 0).unwrap(),
        })
    }

    #[test]
    fn test_render_index() {
        let md = render_index(&[date(16), date(15)], "./reports/");
        assert!(md.starts_with("# Market Reports\n"));
        assert!(md.contains(
            "- [2026-10-16](./reports/report-2026-10-16.md)\n- [2026-10-15](./reports/report-2026-10-15.md)\n"
        ));
    }

    #[test]
    fn test_save_writes_report_and_index() {
        let temp_dir = TempDir::new().unwrap();
        let archive = ReportArchive::new(temp_dir.path().join("reports"));

        let path = archive.save(&report_on(16)).unwrap();
        assert!(path.ends_with("report-2026-10-16.md"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Daily Market Report - 2026-10-16"));
        assert!(content.contains("data unavailable: offline"));

        let index = fs::read_to_string(archive.index_path()).unwrap();
        assert!(index.contains("- [2026-10-16](./report-2026-10-16.md)"));
    }

    #[test]
    fn test_index_lists_existing_recent_reports_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        let archive = ReportArchive::new(temp_dir.path());

        // 10 days back falls outside the window
        archive.save(&report_on(6)).unwrap();
        archive.save(&report_on(12)).unwrap();
        archive.save(&report_on(14)).unwrap();
        archive.save(&report_on(16)).unwrap();

        assert_eq!(
            archive.recent_dates(date(16)),
            vec![date(16), date(14), date(12)]
        );

        let index = fs::read_to_string(archive.index_path()).unwrap();
        assert!(!index.contains("2026-10-06"));
        assert!(!index.contains("2026-10-15"));
        let newest = index.find("2026-10-16").unwrap();
        let oldest = index.find("2026-10-12").unwrap();
        assert!(newest < oldest);
    }

    #[test]
    fn test_window_includes_six_days_back() {
        let temp_dir = TempDir::new().unwrap();
        let archive = ReportArchive::new(temp_dir.path());

        archive.save(&report_on(9)).unwrap();
        archive.save(&report_on(10)).unwrap();

        assert_eq!(archive.recent_dates(date(16)), vec![date(10)]);
    }
}
