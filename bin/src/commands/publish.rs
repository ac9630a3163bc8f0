//! Publish command implementation.
//!
//! Builds the daily report, archives it locally and upserts it to GitHub,
//! along with the repository README and, optionally, a Pages `CNAME`.

use anyhow::{Context, Result};
use pricewatch_lib::prelude::*;
use std::path::PathBuf;

use super::report::build_report;

/// Repository the report is published to.
pub(crate) struct Target {
    pub(crate) owner: String,
    pub(crate) repo: String,
    pub(crate) token: String,
    pub(crate) cname: Option<String>,
}

/// Build, archive and publish the daily report.
pub(crate) async fn publish(
    target: Target,
    archive: PathBuf,
    assets: &[String],
    index: &str,
    quiet: bool,
) -> Result<()> {
    let http = HttpClient::with_defaults().context("Failed to create HTTP client")?;
    let mut publisher =
        GithubPublisher::new(http.clone(), target.token, target.owner, target.repo)
            .context("Invalid GitHub settings")?;
    if let Some(domain) = target.cname {
        publisher = publisher.with_cname(domain);
    }

    let report = build_report(&http, assets, index).await;
    if report.snapshot().is_empty() {
        anyhow::bail!("No market data available, not publishing");
    }

    let archive = ReportArchive::new(archive);
    let path = archive.save(&report).context("Failed to archive report")?;
    let recent = archive.recent_dates(report.date());

    let written = publisher
        .publish_report(&report, &recent)
        .await
        .with_context(|| format!("Failed to publish to {}", publisher.repository()))?;

    if !quiet {
        println!("Saved {}", path.display());
        for (file, outcome) in &written {
            println!("{outcome:<8} {}/{file}", publisher.repository());
        }
    }

    Ok(())
}
