//! Report output

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::version::checker::Finding;

/// Write all findings as a single JSON array, replacing any previous report
pub fn write_report(path: &Path, findings: &[Finding]) -> anyhow::Result<()> {
    let content = serde_json::to_string(findings).context("Failed to serialize report")?;
    let tmp_path = path.with_extension("json.tmp");

    fs::write(&tmp_path, content)
        .with_context(|| format!("Failed to write report to {:?}", tmp_path))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to move report into place at {:?}", path))?;

    Ok(())
}

/// Number of distinct package ids referenced by the findings
pub fn distinct_packages(findings: &[Finding]) -> usize {
    findings
        .iter()
        .map(|f| f.package_name.as_str())
        .collect::<HashSet<_>>()
        .len()
}
