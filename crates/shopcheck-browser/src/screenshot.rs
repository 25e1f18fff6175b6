//! Screenshot capture using Chrome DevTools Protocol

use crate::browser::BrowserSession;
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use shopcheck_core::{CheckError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Capture a full-page PNG screenshot and write it to `path`
///
/// Parent directories are created as needed. At most one screenshot is
/// written per run outcome; the caller picks the success or failure path.
///
/// # Returns
/// Size of the written file in bytes
pub async fn capture_screenshot(session: &BrowserSession, path: &Path) -> Result<u64> {
    debug!("Capturing full page screenshot");

    let data = session
        .tab()
        .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
        .map_err(|e| CheckError::Screenshot(format!("CDP capture failed: {}", e)))?;

    let size = write_artifact(path, &data)?;

    info!("Screenshot saved to {} ({} bytes)", path.display(), size);
    Ok(size)
}

/// Write screenshot bytes to disk, creating parent directories
fn write_artifact(path: &Path, data: &[u8]) -> Result<u64> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, data)?;
    Ok(data.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_artifact_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/state.png");

        let size = write_artifact(&path, b"not-a-real-png").unwrap();

        assert_eq!(size, 14);
        assert_eq!(std::fs::read(&path).unwrap(), b"not-a-real-png");
    }

    #[test]
    fn test_write_artifact_bare_filename() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.png");

        write_artifact(&path, b"png").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_artifact_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.png");

        write_artifact(&path, b"first").unwrap();
        write_artifact(&path, b"second").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }
}
