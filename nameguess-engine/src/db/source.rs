//! Name data sources
//!
//! The database only ever sees a sequence of text lines plus the layout those
//! lines follow ([`SourceFormat`]). Where the lines come from is behind the
//! [`LineSource`] trait: local files, HTTP, or an in-memory list.
//!
//! # Layouts
//! - National year file `yobYYYY.txt`: `name,gender,count`
//! - State/territory file `XX.TXT`: `state,gender,year,name,count`

use crate::error::SourceError;
use async_trait::async_trait;
use nameguess_common::config::DataConfig;
use reqwest::{header, Client};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Timeout for one HTTP source fetch
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// User-Agent sent with HTTP source fetches
const USER_AGENT: &str = concat!("nameguess/", env!("CARGO_PKG_VERSION"));

/// State and territory codes fetched when no explicit list is configured
pub const US_STATE_CODES: &[&str] = &[
    "AK", "AL", "AR", "AZ", "CA", "CO", "CT", "DC", "DE", "FL", "GA", "HI", "IA", "ID", "IL",
    "IN", "KS", "KY", "LA", "MA", "MD", "ME", "MI", "MN", "MO", "MS", "MT", "NC", "ND", "NE",
    "NH", "NJ", "NM", "NV", "NY", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VA", "VT", "WA", "WI", "WV", "WY",
];

/// Line layout of a source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// `name,gender,count`; the year comes from the file name
    National { year: u16 },
    /// `state,gender,year,name,count`
    State,
}

/// A named sequence of raw data lines
#[async_trait]
pub trait LineSource: Send + Sync {
    /// Display name for logs and events (file name or URL)
    fn name(&self) -> &str;

    fn format(&self) -> SourceFormat;

    /// Read every line of the source
    async fn read_lines(&self) -> Result<Vec<String>, SourceError>;
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Source backed by a local file
#[derive(Debug, Clone)]
pub struct FileLineSource {
    path: PathBuf,
    name: String,
    format: SourceFormat,
}

impl FileLineSource {
    pub fn new(path: impl Into<PathBuf>, format: SourceFormat) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LineSource for FileLineSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn format(&self) -> SourceFormat {
        self.format
    }

    async fn read_lines(&self) -> Result<Vec<String>, SourceError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(split_lines(&text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(SourceError::NotFound(self.path.display().to_string()))
            }
            Err(error) => Err(SourceError::Io {
                source_name: self.name.clone(),
                error,
            }),
        }
    }
}

/// Source fetched over HTTP
#[derive(Debug, Clone)]
pub struct HttpLineSource {
    client: Client,
    url: String,
    format: SourceFormat,
}

impl HttpLineSource {
    /// Create a source with its own HTTP client
    pub fn new(url: impl Into<String>, format: SourceFormat) -> Result<Self, SourceError> {
        Ok(Self::with_client(build_http_client()?, url, format))
    }

    /// Create a source sharing an existing client (connection pool)
    pub fn with_client(client: Client, url: impl Into<String>, format: SourceFormat) -> Self {
        Self {
            client,
            url: url.into(),
            format,
        }
    }
}

/// HTTP client with the source fetch timeout and user agent
pub fn build_http_client() -> Result<Client, SourceError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        header::HeaderValue::from_static(USER_AGENT),
    );
    Ok(Client::builder()
        .timeout(HTTP_TIMEOUT)
        .default_headers(headers)
        .build()?)
}

#[async_trait]
impl LineSource for HttpLineSource {
    fn name(&self) -> &str {
        &self.url
    }

    fn format(&self) -> SourceFormat {
        self.format
    }

    async fn read_lines(&self) -> Result<Vec<String>, SourceError> {
        debug!(url = %self.url, "Fetching name source");
        let response = self.client.get(&self.url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(self.url.clone()));
        }
        let text = response.error_for_status()?.text().await?;
        Ok(split_lines(&text))
    }
}

/// In-memory source
#[derive(Debug, Clone)]
pub struct StaticLineSource {
    name: String,
    format: SourceFormat,
    lines: Vec<String>,
}

impl StaticLineSource {
    pub fn new<I, S>(name: impl Into<String>, format: SourceFormat, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            format,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl LineSource for StaticLineSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn format(&self) -> SourceFormat {
        self.format
    }

    async fn read_lines(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.lines.clone())
    }
}

/// Year of a national file name such as `yob1987.txt`
fn national_year(file_name: &str, prefix: &str) -> Option<u16> {
    let lower = file_name.to_lowercase();
    let year = lower
        .strip_prefix(&prefix.to_lowercase())?
        .strip_suffix(".txt")?;
    if year.len() != 4 {
        return None;
    }
    year.parse().ok()
}

/// True for state file names such as `CA.TXT`
fn is_state_file(file_name: &str) -> bool {
    match file_name.split_once('.') {
        Some((code, ext)) => {
            code.len() == 2
                && code.chars().all(|c| c.is_ascii_uppercase())
                && ext.eq_ignore_ascii_case("txt")
        }
        None => false,
    }
}

/// Find the data files under a root folder
///
/// National files are looked for directly in `root`; state files in
/// `root/<state_dir>` (only when `load_states` is set). Results are sorted by
/// file name so that loads are reproducible.
pub fn discover_sources(
    root: &Path,
    data: &DataConfig,
) -> Result<Vec<Box<dyn LineSource>>, SourceError> {
    if !root.is_dir() {
        return Err(SourceError::NotFound(root.display().to_string()));
    }

    let mut national: Vec<(u16, PathBuf)> = Vec::new();
    for entry in WalkDir::new(root).max_depth(1).follow_links(true) {
        match entry {
            Ok(entry) if entry.file_type().is_file() => {
                let file_name = entry.file_name().to_string_lossy();
                if let Some(year) = national_year(&file_name, &data.national_prefix) {
                    national.push((year, entry.path().to_path_buf()));
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Error accessing entry: {}", e),
        }
    }
    national.sort();

    let mut state: Vec<PathBuf> = Vec::new();
    let state_root = root.join(&data.state_dir);
    if data.load_states && state_root.is_dir() {
        for entry in WalkDir::new(&state_root).max_depth(1).follow_links(true) {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    if is_state_file(&entry.file_name().to_string_lossy()) {
                        state.push(entry.path().to_path_buf());
                    }
                }
                Ok(_) => {}
                Err(e) => warn!("Error accessing entry: {}", e),
            }
        }
        state.sort();
    }

    debug!(
        root = %root.display(),
        national = national.len(),
        state = state.len(),
        "Discovered name sources"
    );

    let mut sources: Vec<Box<dyn LineSource>> = Vec::with_capacity(national.len() + state.len());
    for (year, path) in national {
        sources.push(Box::new(FileLineSource::new(path, SourceFormat::National { year })));
    }
    for path in state {
        sources.push(Box::new(FileLineSource::new(path, SourceFormat::State)));
    }
    Ok(sources)
}

/// HTTP sources for the configured year range and states under `base_url`
pub fn remote_sources(
    base_url: &str,
    data: &DataConfig,
) -> Result<Vec<Box<dyn LineSource>>, SourceError> {
    let client = build_http_client()?;
    let base = base_url.trim_end_matches('/');

    let mut sources: Vec<Box<dyn LineSource>> = Vec::new();
    for year in data.first_year..=data.last_year {
        let url = format!("{}/{}{}.txt", base, data.national_prefix, year);
        sources.push(Box::new(HttpLineSource::with_client(
            client.clone(),
            url,
            SourceFormat::National { year },
        )));
    }

    if data.load_states {
        let states: Vec<String> = if data.states.is_empty() {
            US_STATE_CODES.iter().map(|s| s.to_string()).collect()
        } else {
            data.states.iter().map(|s| s.to_uppercase()).collect()
        };
        for code in states {
            let url = format!("{}/{}/{}.TXT", base, data.state_dir, code);
            sources.push(Box::new(HttpLineSource::with_client(
                client.clone(),
                url,
                SourceFormat::State,
            )));
        }
    }
    Ok(sources)
}

/// Sources for a data configuration: remote when `base_url` is set, else the
/// files under `root`
pub fn sources_for(
    root: &Path,
    data: &DataConfig,
) -> Result<Vec<Box<dyn LineSource>>, SourceError> {
    match &data.base_url {
        Some(url) => remote_sources(url, data),
        None => discover_sources(root, data),
    }
}
