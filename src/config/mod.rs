//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.mrtally.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `GITLAB_TOKEN`, `GITLAB_PROJECT_ID`,
//!    `GITLAB_START_DATE`, `GITLAB_END_DATE` and friends; the unprefixed
//!    `START_DATE` and `END_DATE` are read when the prefixed ones are unset
//! 4. **Command-line arguments** – `--token`/`-t`, `--project-id`/`-p`,
//!    `--start-date`/`-s`, `--end-date`/`-e`, `--output`/`-o`
//!
//! # Configuration File
//!
//! ```toml
//! token = "glpat-example"
//! api_url = "https://gitlab.example.com/api/v4"
//! project_id = "group/project"
//! start_date = "2023-01-01T00:00:00Z"
//! end_date = "2023-12-31T23:59:59Z"
//! output = "merge_requests.csv"
//! max_concurrency = 8
//! ```

use std::env;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Deserializer, Serialize};

use crate::gitlab::{ApiBase, CreatedWindow, PersonalAccessToken, ProjectId, ReportError};
use crate::report::{Concurrency, DEFAULT_CONCURRENCY, DEFAULT_OUTPUT_FILE};

/// Unprefixed start date variable read when `GITLAB_START_DATE` is unset.
pub const START_DATE_ENV: &str = "START_DATE";

/// Unprefixed end date variable read when `GITLAB_END_DATE` is unset.
pub const END_DATE_ENV: &str = "END_DATE";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use mrtally::MrTallyConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = MrTallyConfig::load().expect("failed to load configuration");
/// let settings = config.resolve().expect("required settings missing");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "GITLAB",
    discovery(
        dotfile_name = ".mrtally.toml",
        config_file_name = "mrtally.toml",
        app_name = "mrtally"
    )
)]
pub struct MrTallyConfig {
    /// Personal access token sent as `PRIVATE-TOKEN`.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `GITLAB_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    #[serde(default, deserialize_with = "lenient_string")]
    pub token: Option<String>,

    /// GitLab REST API base, defaulting to `https://gitlab.com/api/v4`.
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>`
    /// - Environment: `GITLAB_API_URL`
    /// - Config file: `api_url = "..."`
    #[ortho_config()]
    #[serde(default, deserialize_with = "lenient_string")]
    pub api_url: Option<String>,

    /// Numeric project id or `group/project` path.
    ///
    /// Can be provided via:
    /// - CLI: `--project-id <ID>` or `-p <ID>`
    /// - Environment: `GITLAB_PROJECT_ID`
    /// - Config file: `project_id = "..."` or `project_id = 42`
    #[ortho_config(cli_short = 'p')]
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_id: Option<String>,

    /// Lower bound for merge request creation, passed as `created_after`.
    ///
    /// Can be provided via:
    /// - CLI: `--start-date <DATE>` or `-s <DATE>`
    /// - Environment: `GITLAB_START_DATE` or `START_DATE`
    /// - Config file: `start_date = "..."`
    #[ortho_config(cli_short = 's')]
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_date: Option<String>,

    /// Upper bound for merge request creation, passed as `created_before`.
    ///
    /// Can be provided via:
    /// - CLI: `--end-date <DATE>` or `-e <DATE>`
    /// - Environment: `GITLAB_END_DATE` or `END_DATE`
    /// - Config file: `end_date = "..."`
    #[ortho_config(cli_short = 'e')]
    #[serde(default, deserialize_with = "lenient_string")]
    pub end_date: Option<String>,

    /// CSV destination, defaulting to `merge_requests.csv`.
    ///
    /// Can be provided via:
    /// - CLI: `--output <PATH>` or `-o <PATH>`
    /// - Environment: `GITLAB_OUTPUT`
    /// - Config file: `output = "..."`
    #[ortho_config(cli_short = 'o')]
    pub output: Option<Utf8PathBuf>,

    /// Merge requests whose comments are fetched at once; `0` removes the
    /// limit. Defaults to 8.
    ///
    /// Can be provided via:
    /// - CLI: `--max-concurrency <N>`
    /// - Environment: `GITLAB_MAX_CONCURRENCY`
    /// - Config file: `max_concurrency = 8`
    #[ortho_config()]
    pub max_concurrency: Option<usize>,
}

/// Validated settings for one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    /// REST API base.
    pub api_base: ApiBase,
    /// Project the merge requests belong to.
    pub project: ProjectId,
    /// Credential for every request.
    pub token: PersonalAccessToken,
    /// Creation date range.
    pub window: CreatedWindow,
    /// CSV destination.
    pub output: Utf8PathBuf,
    /// Fan-out policy for comment fetching.
    pub concurrency: Concurrency,
}

impl MrTallyConfig {
    /// Validates the merged configuration into [`ReportSettings`].
    ///
    /// Required values are checked in the order token, project id, start
    /// date, end date; blank values count as missing.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingSetting`] for the first required value
    /// that is absent, or [`ReportError::InvalidUrl`] when `api_url` is not an
    /// absolute URL.
    pub fn resolve(&self) -> Result<ReportSettings, ReportError> {
        let token = PersonalAccessToken::new(self.token.as_deref().unwrap_or_default())?;
        let project = ProjectId::new(required(
            self.project_id.clone(),
            ReportError::MISSING_PROJECT_ID,
        )?)?;
        let start_date = self.resolve_start_date()?;
        let end_date = self.resolve_end_date()?;
        let api_base = ApiBase::parse(self.api_url.as_deref().unwrap_or(ApiBase::DEFAULT))?;

        Ok(ReportSettings {
            api_base,
            project,
            token,
            window: CreatedWindow::new(start_date, end_date),
            output: self
                .output
                .clone()
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT_FILE)),
            concurrency: Concurrency::from_limit(
                self.max_concurrency.unwrap_or(DEFAULT_CONCURRENCY),
            ),
        })
    }

    /// Returns the start date, falling back to `START_DATE`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MISSING_START_DATE`] when no source provides a
    /// non-blank value.
    pub fn resolve_start_date(&self) -> Result<String, ReportError> {
        required(
            with_env_fallback(self.start_date.as_deref(), START_DATE_ENV),
            ReportError::MISSING_START_DATE,
        )
    }

    /// Returns the end date, falling back to `END_DATE`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MISSING_END_DATE`] when no source provides a
    /// non-blank value.
    pub fn resolve_end_date(&self) -> Result<String, ReportError> {
        required(
            with_env_fallback(self.end_date.as_deref(), END_DATE_ENV),
            ReportError::MISSING_END_DATE,
        )
    }
}

/// A blank configured value does not hide the fallback variable.
fn with_env_fallback(configured: Option<&str>, variable: &str) -> Option<String> {
    configured
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToOwned::to_owned)
        .or_else(|| env::var(variable).ok())
}

fn required(value: Option<String>, missing: ReportError) -> Result<String, ReportError> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
        .ok_or(missing)
}

/// Accepts any scalar as text. Environment values are parsed as typed
/// scalars, so `GITLAB_PROJECT_ID=42` or an all-digit token arrive as
/// numbers and `true` as a boolean.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Flag(bool),
    }

    Ok(
        Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
            Raw::Text(text) => text,
            Raw::Unsigned(number) => number.to_string(),
            Raw::Signed(number) => number.to_string(),
            Raw::Float(number) => number.to_string(),
            Raw::Flag(flag) => flag.to_string(),
        }),
    )
}
