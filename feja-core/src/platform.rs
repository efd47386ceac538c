//! Permission probe and the "open settings" deep link.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{FejaError, Result};

/// Probe read access to the media root. Granted is `Ok(())`; a denied probe
/// is the explicit `PermissionDenied` variant the permission gate blocks on.
pub fn request_access(path: &Path) -> Result<()> {
    match std::fs::read_dir(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            Err(FejaError::PermissionDenied(path.to_path_buf()))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(FejaError::PathInaccessible(path.to_path_buf()))
        }
        Err(e) => Err(FejaError::Io(e)),
    }
}

/// Fire-and-forget jump to the platform's file/storage settings. No return
/// value is observed; failures are invisible by design of the deep link.
pub fn open_storage_settings(path: &Path) {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(path).spawn().ok();
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        std::process::Command::new("xdg-open").arg(path).spawn().ok();
    }

    #[cfg(windows)]
    {
        std::process::Command::new("explorer").arg(path).spawn().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_readable_dir_grants() {
        let temp = TempDir::new().unwrap();
        assert!(request_access(temp.path()).is_ok());
    }

    #[test]
    fn test_missing_dir_is_inaccessible() {
        let temp = TempDir::new().unwrap();
        let err = request_access(&temp.path().join("gone")).unwrap_err();
        assert!(matches!(err, FejaError::PathInaccessible(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_dir_denies() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let locked = temp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let result = request_access(&locked);

        // Restore so TempDir can clean up
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // Root bypasses permission bits, so only assert when the probe failed
        if let Err(err) = result {
            assert!(matches!(err, FejaError::PermissionDenied(_)));
        }
    }
}
