use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Отчёты в каталоге для пакетной конвертации.
///
/// Только обычные файлы; временные файлы Excel ("~$...") пропускаются.
/// Порядок - по имени файла.
pub fn discover_reports(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to list directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list directory {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_lock_file = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with('~'))
            .unwrap_or(false);
        if is_lock_file {
            tracing::debug!("Skipping Excel lock file {}", path.display());
            continue;
        }
        files.push(path);
    }

    files.sort();
    tracing::info!("Found {} reports in {}", files.len(), dir.display());
    Ok(files)
}
