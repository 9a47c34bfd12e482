//! Optional JSON report of display-name resolutions.
//!
//! Inspection UIs show cleaned names, but error reports still want the raw
//! candidate with its module suffix. When reporting is enabled, every
//! first-time resolution is recorded and the report can be flushed to a JSON
//! sidecar, either programmatically or through the `NAMEPLATE_NAME_REPORT`
//! environment variable.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use crate::component::ComponentId;

pub const NAME_REPORT_VERSION: &str = "0.1";

/// Serialized report of every first-time resolution.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NameReport {
    pub version: String,
    #[serde(default)]
    pub records: Vec<NameRecord>,
}

/// One resolved display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameRecord {
    pub component: ComponentId,
    /// Candidate before module-suffix cleanup; absent when nothing usable
    /// was found and the `Unknown` sentinel was used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    pub resolved: String,
    pub origin: NameOrigin,
}

/// Which source produced a resolved display name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum NameOrigin {
    DisplayName,
    ComputedDisplayName,
    TypeName,
    Unknown,
}

#[derive(Debug)]
pub enum ReportError {
    Io(std::io::Error),
    Decode(serde_json::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read name report: {err}"),
            Self::Decode(err) => write!(f, "failed to decode name report: {err}"),
        }
    }
}

impl std::error::Error for ReportError {}

#[derive(Default)]
struct ReportState {
    enabled: bool,
    output: Option<PathBuf>,
    report: NameReport,
}

impl ReportState {
    fn append(&mut self, record: NameRecord) {
        if !self.enabled {
            return;
        }
        self.report.records.push(record);
        if let Some(path) = self.output.clone() {
            let _ = write_report(&self.report, &path);
        }
    }
}

static REPORTER: Lazy<Mutex<ReportState>> = Lazy::new(|| {
    let mut state = ReportState::default();
    state.report.version = NAME_REPORT_VERSION.to_string();
    Mutex::new(state)
});
static ENV_REPORT_PATH: OnceLock<Option<PathBuf>> = OnceLock::new();

fn env_report_path() -> Option<PathBuf> {
    ENV_REPORT_PATH
        .get_or_init(|| std::env::var_os("NAMEPLATE_NAME_REPORT").map(PathBuf::from))
        .clone()
}

pub fn enable_reporting(output: Option<PathBuf>) {
    let mut guard = REPORTER.lock().expect("name report mutex poisoned");
    guard.enabled = true;
    guard.output = output;
}

pub fn disable_reporting() {
    let mut guard = REPORTER.lock().expect("name report mutex poisoned");
    guard.enabled = false;
    guard.output = None;
    guard.report = NameReport {
        version: NAME_REPORT_VERSION.to_string(),
        records: Vec::new(),
    };
}

pub fn maybe_enable_from_env() {
    if let Some(path) = env_report_path() {
        enable_reporting(Some(path));
    }
}

/// Record a first-time resolution. A no-op while reporting is disabled.
pub fn record_resolution(
    component: ComponentId,
    raw: Option<String>,
    resolved: &str,
    origin: NameOrigin,
) {
    let mut guard = REPORTER.lock().expect("name report mutex poisoned");
    guard.append(NameRecord {
        component,
        raw,
        resolved: resolved.to_string(),
        origin,
    });
}

pub fn snapshot() -> NameReport {
    REPORTER
        .lock()
        .expect("name report mutex poisoned")
        .report
        .clone()
}

pub fn flush() -> Result<Option<PathBuf>, ReportError> {
    let guard = REPORTER.lock().expect("name report mutex poisoned");
    let Some(path) = guard.output.clone() else {
        return Ok(None);
    };
    write_report(&guard.report, &path)?;
    Ok(Some(path))
}

pub fn load(path: &Path) -> Result<NameReport, ReportError> {
    let body = fs::read_to_string(path).map_err(ReportError::Io)?;
    serde_json::from_str(&body).map_err(ReportError::Decode)
}

fn write_report(report: &NameReport, path: &Path) -> Result<(), ReportError> {
    let encoded = serde_json::to_string_pretty(report).map_err(ReportError::Decode)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(ReportError::Io)?;
    }
    fs::write(path, encoded).map_err(ReportError::Io)
}
