//! GitHub contents API publishing.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::NaiveDate;
use pricewatch_fetch::HttpClient;
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::DailyReport;
use crate::archive::render_index;

/// Base URL of the public GitHub REST API.
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";

/// Repository directory that holds published reports.
const REPORTS_DIR: &str = "reports";

/// GitHub Pages custom domain file.
const CNAME_PATH: &str = "CNAME";

/// Errors that can occur while publishing.
#[derive(Error, Debug)]
pub enum PublishError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with an unexpected status.
    #[error("GitHub returned {status} for {path}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Repository path being written.
        path: String,
        /// Start of the response body.
        body: String,
    },

    /// Response body was not the expected JSON shape.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Required settings are missing.
    #[error("Publisher not configured: {0}")]
    NotConfigured(&'static str),
}

/// What an upsert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// The file did not exist and was created.
    Created,
    /// The file existed and was replaced.
    Updated,
}

impl std::fmt::Display for Upsert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Created => "created",
            Self::Updated => "updated",
        })
    }
}

#[derive(Debug, Deserialize)]
struct ContentsEntry {
    sha: String,
}

#[derive(Debug, Serialize)]
struct PutContents<'a> {
    message: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

impl<'a> PutContents<'a> {
    fn new(content: &str, message: &'a str, sha: Option<&'a str>) -> Self {
        Self {
            message,
            content: BASE64.encode(content.as_bytes()),
            sha,
        }
    }
}

/// Writes files into one repository through the contents API.
#[derive(Clone)]
pub struct GithubPublisher {
    http: HttpClient,
    token: String,
    owner: String,
    repo: String,
    api_base: String,
    cname: Option<String>,
}

impl std::fmt::Debug for GithubPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubPublisher")
            .field("token", &"<redacted>")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("api_base", &self.api_base)
            .field("cname", &self.cname)
            .finish_non_exhaustive()
    }
}

impl GithubPublisher {
    /// Creates a publisher for `owner/repo` against the public API.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::NotConfigured`] if any argument is blank.
    pub fn new(
        http: HttpClient,
        token: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Result<Self, PublishError> {
        let token = token.into();
        let owner = owner.into();
        let repo = repo.into();

        if token.trim().is_empty() {
            return Err(PublishError::NotConfigured("token is empty"));
        }
        if owner.trim().is_empty() || repo.trim().is_empty() {
            return Err(PublishError::NotConfigured("owner and repo are required"));
        }

        Ok(Self {
            http,
            token,
            owner,
            repo,
            api_base: GITHUB_API_BASE_URL.to_string(),
            cname: None,
        })
    }

    /// Sets a custom API base URL.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Sets the GitHub Pages custom domain written to `CNAME` on every
    /// publish. A blank domain clears it.
    #[must_use]
    pub fn with_cname(mut self, domain: impl Into<String>) -> Self {
        let domain = domain.into().trim().to_string();
        self.cname = (!domain.is_empty()).then_some(domain);
        self
    }

    /// Returns `owner/repo`.
    #[must_use]
    pub fn repository(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base.trim_end_matches('/'),
            self.owner,
            self.repo,
            path.trim_start_matches('/')
        )
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.http
            .inner()
            .request(method, url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
    }

    /// Returns the blob sha of `path`, or `None` if it does not exist.
    async fn existing_sha(&self, path: &str) -> Result<Option<String>, PublishError> {
        let response = self
            .request(reqwest::Method::GET, &self.contents_url(path))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(status_error(status, path, &body));
        }

        let entry: ContentsEntry = serde_json::from_str(&body)?;
        Ok(Some(entry.sha))
    }

    /// Creates or replaces a file with `content`, committing with `message`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup or the write fails.
    pub async fn upsert_file(
        &self,
        path: &str,
        content: &str,
        message: &str,
    ) -> Result<Upsert, PublishError> {
        let sha = self.existing_sha(path).await?;
        debug!(path, exists = sha.is_some(), "upserting file");

        let payload = PutContents::new(content, message, sha.as_deref());
        let response = self
            .request(reqwest::Method::PUT, &self.contents_url(path))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(status_error(status, path, &body));
        }

        let outcome = if sha.is_some() {
            Upsert::Updated
        } else {
            Upsert::Created
        };
        info!(repo = %self.repository(), path, %outcome, "file published");
        Ok(outcome)
    }

    /// Publishes the report under `reports/` and rewrites the repository
    /// README to link it and any other `recent` dates. When a custom domain
    /// is set, `CNAME` is upserted last.
    ///
    /// # Errors
    ///
    /// Returns the first failing upsert.
    pub async fn publish_report(
        &self,
        report: &DailyReport,
        recent: &[NaiveDate],
    ) -> Result<Vec<(String, Upsert)>, PublishError> {
        let date = report.date();
        let report_path = format!("{REPORTS_DIR}/{}", report.file_name());

        let report_outcome = self
            .upsert_file(&report_path, &report.markdown(), &format!("Add report {date}"))
            .await?;

        let mut dates = recent.to_vec();
        if !dates.contains(&date) {
            dates.push(date);
        }
        dates.sort_unstable_by(|a, b| b.cmp(a));

        let readme = render_index(&dates, &format!("./{REPORTS_DIR}/"));
        let readme_outcome = self
            .upsert_file("README.md", &readme, &format!("Update index for {date}"))
            .await?;

        let mut written = vec![
            (report_path, report_outcome),
            ("README.md".to_string(), readme_outcome),
        ];

        if let Some(domain) = &self.cname {
            let outcome = self
                .upsert_file(CNAME_PATH, &format!("{domain}\n"), "Update CNAME")
                .await?;
            written.push((CNAME_PATH.to_string(), outcome));
        }

        Ok(written)
    }
}

fn status_error(status: StatusCode, path: &str, body: &str) -> PublishError {
    PublishError::Status {
        status: status.as_u16(),
        path: path.to_string(),
        body: body.trim().chars().take(200).collect(),
    }
}
