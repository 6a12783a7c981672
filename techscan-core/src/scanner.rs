//! Recursive directory walking and marker-filename classification.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{Result, ScanError};
use crate::model::{DetectedItem, ScanResult, TechKind};

/// Capability interface for scanning a directory tree.
///
/// Handlers depend on this trait rather than a concrete scanner so that
/// tests can substitute a fake.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TechScanner: Send + Sync {
    /// Walk the tree under `path` and classify every marker file found.
    async fn scan(&self, path: &str) -> Result<ScanResult>;
}

/// Classify a single filename into a technology marker, if it is one.
///
/// Only the filename is inspected; contents are never read. The three rules
/// are mutually exclusive by construction (no filename satisfies two).
pub fn classify(file_name: &str, path: &Path) -> Option<DetectedItem> {
    let lower = file_name.to_lowercase();
    let evidence = path.to_string_lossy().into_owned();

    if lower.ends_with(".csproj") {
        // Name is the filename minus the extension, original casing kept.
        let name = &file_name[..file_name.len() - ".csproj".len()];
        return Some(DetectedItem::new(
            TechKind::CSharpProject,
            name,
            evidence,
        ));
    }
    if lower == "package.json" {
        return Some(DetectedItem::new(
            TechKind::NodeProject,
            "Node.js Project",
            evidence,
        ));
    }
    if lower == "dockerfile" {
        return Some(DetectedItem::new(TechKind::Docker, "Docker", evidence));
    }

    None
}

/// Walkdir-backed [`TechScanner`] implementation.
///
/// A root that does not exist, or exists but is not a directory, produces an
/// empty [`ScanResult`] rather than an error. Entries the walker cannot read
/// are logged and skipped; the scan completes with whatever was reachable.
#[derive(Debug, Clone)]
pub struct WalkingScanner {
    /// Whether to follow symbolic links during traversal
    follow_links: bool,
    /// Maximum depth for directory traversal (None = unlimited)
    max_depth: Option<usize>,
}

impl Default for WalkingScanner {
    fn default() -> Self {
        Self {
            follow_links: false,
            max_depth: None,
        }
    }
}

impl WalkingScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable following symbolic links
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set maximum directory depth for scanning
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Walk the tree rooted at `root` synchronously.
    ///
    /// This is the blocking half of [`TechScanner::scan`]; it runs on a
    /// worker thread so the request loop never blocks on filesystem I/O.
    pub fn walk(&self, root: &Path) -> ScanResult {
        let started_at = Utc::now();

        if !root.is_dir() {
            info!(
                root = %root.display(),
                "scan root is not an existing directory, returning empty result"
            );
            return ScanResult {
                started_at,
                files_scanned: 0,
                items: Vec::new(),
            };
        }

        info!(
            root = %root.display(),
            follow_links = self.follow_links,
            "starting technology scan"
        );

        let mut walker = WalkDir::new(root).follow_links(self.follow_links);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut files_scanned: u64 = 0;
        let mut items = Vec::new();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("error walking directory: {err}");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            files_scanned += 1;

            let Some(file_name) = entry.file_name().to_str() else {
                debug!(
                    path = %entry.path().display(),
                    "skipping file with non-UTF-8 name"
                );
                continue;
            };

            if let Some(item) = classify(file_name, entry.path()) {
                debug!(
                    kind = item.kind.as_str(),
                    evidence = %item.evidence,
                    "marker file detected"
                );
                items.push(item);
            }
        }

        info!(
            files_scanned,
            items = items.len(),
            "scan complete"
        );

        ScanResult {
            started_at,
            files_scanned,
            items,
        }
    }
}

#[async_trait]
impl TechScanner for WalkingScanner {
    async fn scan(&self, path: &str) -> Result<ScanResult> {
        if path.contains('\0') {
            return Err(ScanError::InvalidPath(
                "path contains a NUL byte".to_string(),
            ));
        }

        let scanner = self.clone();
        let root = PathBuf::from(path);
        tokio::task::spawn_blocking(move || scanner.walk(&root))
            .await
            .map_err(|err| {
                ScanError::Internal(format!("scan worker failed: {err}"))
            })
    }
}
