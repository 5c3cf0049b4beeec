//! Manifest checker.
//!
//! Missing files are collected across the whole manifest before reporting, so
//! one run surfaces every absent resource.
use crate::error::CheckError;
use crate::manifest::load_manifest;
use crate::paths::{escapes_root, ResourcePaths};
use serde::Serialize;
use std::path::PathBuf;

const MISSING_HEADER: &str = "Missing resource files:";
const ALL_PRESENT: &str = "All referenced resource files exist.";

/// Exit status when one or more referenced files are absent.
const EXIT_MISSING: u8 = 2;

/// Outcome of checking one manifest.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub manifest: PathBuf,
    pub checked: usize,
    pub skipped: usize,
    /// Filenames whose resolved path does not exist, in document order.
    pub missing: Vec<String>,
    /// Filenames that resolve outside the resource root.
    pub outside_root: Vec<String>,
}

impl CheckReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_complete() {
            0
        } else {
            EXIT_MISSING
        }
    }

    /// Human-readable report, one line per missing file.
    pub fn render_text(&self) -> String {
        if self.is_complete() {
            return format!("{ALL_PRESENT}\n");
        }
        let mut out = String::new();
        out.push_str(MISSING_HEADER);
        out.push('\n');
        for name in &self.missing {
            out.push_str(" - ");
            out.push_str(name);
            out.push('\n');
        }
        out
    }
}

/// Load the manifest and test every referenced file for existence.
pub fn check_resources(paths: &ResourcePaths) -> Result<CheckReport, CheckError> {
    let manifest_path = paths.manifest_path();
    let manifest = load_manifest(&manifest_path)?;

    let mut report = CheckReport {
        manifest: manifest_path,
        checked: 0,
        skipped: manifest.skipped,
        missing: Vec::new(),
        outside_root: Vec::new(),
    };
    for name in manifest.files {
        if escapes_root(&name) {
            tracing::warn!(
                file = %name,
                root = %paths.root().display(),
                "referenced file resolves outside the resource root"
            );
            report.outside_root.push(name.clone());
        }
        let path = paths.resolve(&name);
        report.checked += 1;
        if path.exists() {
            tracing::debug!(path = %path.display(), "present");
        } else {
            tracing::debug!(path = %path.display(), "missing");
            report.missing.push(name);
        }
    }

    tracing::info!(
        manifest = %report.manifest.display(),
        checked = report.checked,
        skipped = report.skipped,
        missing = report.missing.len(),
        "resource check finished"
    );
    Ok(report)
}
