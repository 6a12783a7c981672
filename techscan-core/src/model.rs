//! Wire-level domain model shared by the scanner and the HTTP layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request payload for scan operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    pub path: String,
}

/// Technology category assigned to a detected marker file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechKind {
    CSharpProject,
    NodeProject,
    Docker,
}

impl TechKind {
    /// Human-readable label used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            TechKind::CSharpProject => "CSharpProject",
            TechKind::NodeProject => "NodeProject",
            TechKind::Docker => "Docker",
        }
    }
}

/// One detection produced by a scan.
///
/// `evidence` is the full path of the file that triggered the detection.
/// `version` is reserved for content-based inspection and is always `None`
/// today; it is omitted from JSON when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedItem {
    pub kind: TechKind,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub evidence: String,
}

impl DetectedItem {
    pub fn new(
        kind: TechKind,
        name: impl Into<String>,
        evidence: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            version: None,
            evidence: evidence.into(),
        }
    }
}

/// Outcome of one complete directory walk.
///
/// Invariant: `files_scanned >= items.len()`; every item corresponds to
/// exactly one visited file. Item order follows filesystem enumeration
/// order, which is not guaranteed stable across platforms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub started_at: DateTime<Utc>,
    pub files_scanned: u64,
    pub items: Vec<DetectedItem>,
}

impl ScanResult {
    /// Result for a root that does not exist or is not a directory.
    pub fn empty() -> Self {
        Self {
            started_at: Utc::now(),
            files_scanned: 0,
            items: Vec::new(),
        }
    }
}
