//! Persists rendered reports.

use super::{MarkdownError, ReportFile, ISSUES_DIR};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Replaces the previous report under `destination` with `files`.
///
/// The `issues/` directory is removed first so categories that disappeared
/// from the configuration leave no stale pages behind.
///
/// # Errors
///
/// Returns [`MarkdownError::IoError`] on the first file-system failure.
pub fn write_reports(destination: &Path, files: &[ReportFile]) -> Result<usize, MarkdownError> {
    let issues_dir = destination.join(ISSUES_DIR);
    if issues_dir.exists() {
        info!(path = %issues_dir.display(), "Removing old issues directory");
        fs::remove_dir_all(&issues_dir).map_err(|e| io_error(&issues_dir, e))?;
    }

    for file in files {
        let path = destination.join(&file.relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }

        fs::write(&path, &file.content).map_err(|e| io_error(&path, e))?;
        debug!(path = %path.display(), bytes = file.content.len(), "Wrote report");
    }

    info!(count = files.len(), destination = %destination.display(), "Reports written");
    Ok(files.len())
}

fn io_error(path: &Path, source: std::io::Error) -> MarkdownError {
    MarkdownError::IoError {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn file(path: &str, content: &str) -> ReportFile {
        ReportFile {
            relative_path: PathBuf::from(path),
            content: content.to_string(),
        }
    }

    #[test]
    fn writes_files_and_creates_directories() {
        let temp = TempDir::new().unwrap();
        let destination = temp.path().join("out");

        let written = write_reports(
            &destination,
            &[file("issues/a.md", "# a\n"), file("README.md", "# Issue List\n")],
        )
        .unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            fs::read_to_string(destination.join("issues/a.md")).unwrap(),
            "# a\n"
        );
        assert_eq!(
            fs::read_to_string(destination.join("README.md")).unwrap(),
            "# Issue List\n"
        );
    }

    #[test]
    fn removes_stale_category_pages() {
        let temp = TempDir::new().unwrap();
        let stale = temp.path().join("issues/old.md");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "old").unwrap();

        write_reports(temp.path(), &[file("README.md", "index")]).unwrap();

        assert!(!stale.exists());
        assert!(!temp.path().join("issues").exists());
        assert!(temp.path().join("README.md").exists());
    }

    #[test]
    fn reports_io_errors() {
        let temp = TempDir::new().unwrap();
        // A file where the destination directory should be
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let result = write_reports(&blocker, &[file("README.md", "index")]);

        assert!(matches!(result, Err(MarkdownError::IoError { .. })));
    }
}
