//! Summaries derived from a media query and from filesystem probes.
//!
//! Everything here is recomputed per screen visit and thrown away on
//! navigation; nothing is cached or persisted.

use std::path::Path;
use std::time::{Duration, SystemTime};

use crate::error::{FejaError, Result};
use crate::media::{MediaAsset, MediaKind, MediaQuery};

/// Photos at or below this size count as thumbnails
pub const THUMBNAIL_MAX_BYTES: u64 = 100 * 1024;
/// Assets at or above this size are "large"
pub const LARGE_FILE_MIN_BYTES: u64 = 100 * 1024 * 1024;
/// Assets older than this are "old"
pub const OLD_FILE_AGE: Duration = Duration::from_secs(30 * 24 * 60 * 60);
/// How many assets the visible-caches card lists
pub const VISIBLE_CACHE_CEILING: usize = 1000;

fn is_thumbnail(asset: &MediaAsset) -> bool {
    asset.kind == MediaKind::Photo && asset.byte_size > 0 && asset.byte_size < THUMBNAIL_MAX_BYTES
}

fn is_large_old(asset: &MediaAsset, now: SystemTime) -> bool {
    if asset.byte_size <= LARGE_FILE_MIN_BYTES {
        return false;
    }
    match asset.created {
        Some(created) => match now.duration_since(created) {
            Ok(age) => age > OLD_FILE_AGE,
            Err(_) => false,
        },
        None => false,
    }
}

/// Categorized view of one media query
#[derive(Debug, Clone, Default)]
pub struct MediaSummary {
    /// Total matches reported by the query
    pub total_count: u64,
    /// Assets shown on the visible-caches card, capped at the ceiling
    pub media_files: Vec<MediaAsset>,
    /// Small photos
    pub thumbnails: Vec<MediaAsset>,
    /// Large assets older than a month
    pub large_old: Vec<MediaAsset>,
}

impl MediaSummary {
    /// Derive category lists from a query. A query with `total_count == 0`
    /// yields empty lists, not an error.
    pub fn derive(query: &MediaQuery, now: SystemTime) -> Self {
        let mut media_files = query.assets.clone();
        media_files.truncate(VISIBLE_CACHE_CEILING);

        let thumbnails = query
            .assets
            .iter()
            .filter(|a| is_thumbnail(a))
            .cloned()
            .collect();
        let large_old = query
            .assets
            .iter()
            .filter(|a| is_large_old(a, now))
            .cloned()
            .collect();

        Self {
            total_count: query.total_count,
            media_files,
            thumbnails,
            large_old,
        }
    }

    pub fn thumbnail_bytes(&self) -> u64 {
        self.thumbnails.iter().map(|a| a.byte_size).sum()
    }

    pub fn large_old_bytes(&self) -> u64 {
        self.large_old.iter().map(|a| a.byte_size).sum()
    }
}

/// An empty folder found in app storage. The size is simulated; empty
/// directories still occupy one filesystem block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyFolder {
    pub name: String,
}

impl EmptyFolder {
    pub const DISPLAY_SIZE: &'static str = "4.1 kB";
}

/// Find empty child directories of `app_dir`.
///
/// A probe failure on one child is skipped; the remaining children are still
/// probed. Only the top-level listing failing is an error.
pub fn probe_empty_folders(app_dir: &Path) -> Result<Vec<EmptyFolder>> {
    let entries =
        std::fs::read_dir(app_dir).map_err(|_| FejaError::PathInaccessible(app_dir.to_path_buf()))?;

    let mut empties = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        match std::fs::read_dir(&path) {
            Ok(mut children) => {
                if children.next().is_none() {
                    empties.push(EmptyFolder {
                        name: entry.file_name().to_string_lossy().to_string(),
                    });
                }
            }
            Err(_) => continue,
        }
    }

    empties.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(empties)
}

/// List entry names of a directory. Missing or unreadable paths fail with
/// `PathInaccessible`; callers decide how to degrade.
pub fn list_directory(path: &Path) -> Result<Vec<String>> {
    let entries =
        std::fs::read_dir(path).map_err(|_| FejaError::PathInaccessible(path.to_path_buf()))?;

    let mut names: Vec<String> = entries
        .flatten()
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    Ok(names)
}

/// Filesystem-probe half of the results screen
#[derive(Debug, Clone, Default)]
pub struct CleanReport {
    pub empty_folders: Vec<EmptyFolder>,
    pub downloads: Vec<String>,
}

impl CleanReport {
    /// Build the report, degrading each probe independently: an inaccessible
    /// app dir yields no empty folders, an inaccessible downloads dir yields
    /// an empty downloads list, and neither failure affects the other.
    pub fn build(app_dir: &Path, downloads_dir: &Path) -> Self {
        Self {
            empty_folders: probe_empty_folders(app_dir).unwrap_or_default(),
            downloads: list_directory(downloads_dir).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn asset(id: u64, kind: MediaKind, byte_size: u64, age: Duration) -> MediaAsset {
        MediaAsset {
            id,
            filename: format!("asset-{id}"),
            byte_size,
            created: SystemTime::now().checked_sub(age),
            kind,
            path: PathBuf::from(format!("/media/asset-{id}")),
        }
    }

    #[test]
    fn test_derive_empty_query_is_all_zero() {
        let summary = MediaSummary::derive(&MediaQuery::default(), SystemTime::now());
        assert_eq!(summary.total_count, 0);
        assert!(summary.media_files.is_empty());
        assert!(summary.thumbnails.is_empty());
        assert!(summary.large_old.is_empty());
        assert_eq!(summary.thumbnail_bytes(), 0);
    }

    #[test]
    fn test_derive_categories() {
        let day = Duration::from_secs(24 * 60 * 60);
        let query = MediaQuery {
            assets: vec![
                // Thumbnail: small photo
                asset(0, MediaKind::Photo, 10 * 1024, day),
                // Not a thumbnail: small video
                asset(1, MediaKind::Video, 10 * 1024, day),
                // Not a thumbnail: photo right at the limit
                asset(2, MediaKind::Photo, THUMBNAIL_MAX_BYTES, day),
                // Large but recent
                asset(3, MediaKind::Video, 200 * 1024 * 1024, day),
                // Large and old
                asset(4, MediaKind::Video, 300 * 1024 * 1024, day * 45),
                // Old but small
                asset(5, MediaKind::Photo, 50 * 1024, day * 45),
            ],
            total_count: 6,
            errors: 0,
        };

        let summary = MediaSummary::derive(&query, SystemTime::now());
        assert_eq!(summary.total_count, 6);
        let thumb_ids: Vec<u64> = summary.thumbnails.iter().map(|a| a.id).collect();
        assert_eq!(thumb_ids, vec![0, 5]);
        let large_ids: Vec<u64> = summary.large_old.iter().map(|a| a.id).collect();
        assert_eq!(large_ids, vec![4]);
        assert_eq!(summary.large_old_bytes(), 300 * 1024 * 1024);
    }

    #[test]
    fn test_probe_empty_folders() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("empty_a")).unwrap();
        fs::create_dir(temp.path().join("empty_b")).unwrap();
        fs::create_dir(temp.path().join("full")).unwrap();
        fs::write(temp.path().join("full/file.txt"), b"x").unwrap();
        fs::write(temp.path().join("loose.txt"), b"x").unwrap();

        let empties = probe_empty_folders(temp.path()).unwrap();
        let names: Vec<&str> = empties.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["empty_a", "empty_b"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_probe_skips_failing_child() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("empty")).unwrap();
        // A dangling symlink fails the child probe but must not abort the rest
        std::os::unix::fs::symlink(temp.path().join("gone"), temp.path().join("broken")).unwrap();

        let empties = probe_empty_folders(temp.path()).unwrap();
        let names: Vec<&str> = empties.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["empty"]);
    }

    #[test]
    fn test_probe_missing_root_fails() {
        let temp = TempDir::new().unwrap();
        let err = probe_empty_folders(&temp.path().join("gone")).unwrap_err();
        assert!(matches!(err, FejaError::PathInaccessible(_)));
    }

    #[test]
    fn test_report_degrades_each_probe_independently() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("empty")).unwrap();

        // Downloads dir missing: empty list, empty-folder probe still runs
        let report = CleanReport::build(temp.path(), &temp.path().join("no-downloads"));
        assert_eq!(report.empty_folders.len(), 1);
        assert!(report.downloads.is_empty());

        // App dir missing: downloads still listed
        fs::create_dir(temp.path().join("dl")).unwrap();
        fs::write(temp.path().join("dl/setup.bin"), b"x").unwrap();
        let report = CleanReport::build(&temp.path().join("no-app"), &temp.path().join("dl"));
        assert!(report.empty_folders.is_empty());
        assert_eq!(report.downloads, vec!["setup.bin".to_string()]);
    }
}
