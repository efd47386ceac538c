//! Media asset enumeration.
//!
//! The platform "media library" capability, rendered for a filesystem: walk
//! the media root, keep photo and video files, and report them in creation
//! order together with the total match count. The query honours a
//! result-count ceiling so callers can ask for "everything" without holding
//! every asset in memory forever.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crossbeam_channel::Receiver;
use jwalk::WalkDir;

use crate::error::{FejaError, Result};

/// Kind of media asset, decided by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video,
}

const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "heic", "heif", "bmp"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "mkv", "avi", "webm", "3gp", "m4v"];

impl MediaKind {
    /// Classify a path by extension; non-media files yield None
    pub fn of(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if PHOTO_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Photo)
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Video)
        } else {
            None
        }
    }
}

/// One photo/video record from the media library
#[derive(Debug, Clone)]
pub struct MediaAsset {
    pub id: u64,
    pub filename: String,
    pub byte_size: u64,
    pub created: Option<SystemTime>,
    pub kind: MediaKind,
    pub path: PathBuf,
}

/// Result of a media enumeration
#[derive(Debug, Clone, Default)]
pub struct MediaQuery {
    /// Assets up to the requested ceiling, newest first
    pub assets: Vec<MediaAsset>,
    /// Total number of matches, independent of the ceiling
    pub total_count: u64,
    /// Entries that could not be read
    pub errors: u64,
}

/// Enumerate media assets under `root`, keeping at most `limit` records.
pub fn enumerate_media(root: &Path, limit: usize) -> Result<MediaQuery> {
    if !root.is_dir() {
        return Err(FejaError::QueryFailed(format!(
            "media root is not a directory: {}",
            root.display()
        )));
    }

    let mut query = MediaQuery::default();
    let mut next_id = 0u64;

    for entry_result in WalkDir::new(root).skip_hidden(false).sort(false) {
        let entry = match entry_result {
            Ok(e) => e,
            Err(_) => {
                query.errors += 1;
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(kind) = MediaKind::of(&path) else {
            continue;
        };

        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(_) => {
                query.errors += 1;
                continue;
            }
        };

        query.total_count += 1;

        let filename = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        query.assets.push(MediaAsset {
            id: next_id,
            filename,
            byte_size: metadata.len(),
            created: metadata.created().or_else(|_| metadata.modified()).ok(),
            kind,
            path,
        });
        next_id += 1;
    }

    // Newest first, like the platform media library
    query
        .assets
        .sort_by(|a, b| b.created.cmp(&a.created).then(a.id.cmp(&b.id)));
    query.assets.truncate(limit);

    Ok(query)
}

/// One-shot channel delivering a finished media query
pub type QueryReceiver = Receiver<Result<MediaQuery>>;

/// Media enumeration on a background thread.
///
/// The scanning screen fires this once, at the end of the third phase, and
/// polls the receiver from its event loop. Exactly one message is delivered;
/// a failure is an explicit `Err` for the caller to consume, never a panic.
pub struct MediaScanner {
    root: PathBuf,
    limit: usize,
}

impl MediaScanner {
    pub fn new(root: PathBuf, limit: usize) -> Self {
        Self { root, limit }
    }

    pub fn query(self) -> QueryReceiver {
        let (tx, rx) = crossbeam_channel::bounded(1);
        std::thread::spawn(move || {
            let _ = tx.send(enumerate_media(&self.root, self.limit));
        });
        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_classify_by_extension() {
        assert_eq!(MediaKind::of(Path::new("a/b/photo.JPG")), Some(MediaKind::Photo));
        assert_eq!(MediaKind::of(Path::new("clip.mp4")), Some(MediaKind::Video));
        assert_eq!(MediaKind::of(Path::new("notes.txt")), None);
        assert_eq!(MediaKind::of(Path::new("no_extension")), None);
    }

    #[test]
    fn test_enumerate_counts_and_ceiling() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.jpg"), vec![0u8; 10]).unwrap();
        fs::write(temp.path().join("b.png"), vec![0u8; 20]).unwrap();
        fs::write(temp.path().join("c.mp4"), vec![0u8; 30]).unwrap();
        fs::write(temp.path().join("skip.txt"), b"x").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested/d.gif"), vec![0u8; 5]).unwrap();

        let query = enumerate_media(temp.path(), 2).unwrap();
        assert_eq!(query.total_count, 4);
        assert_eq!(query.assets.len(), 2);
        assert_eq!(query.errors, 0);
    }

    #[test]
    fn test_enumerate_empty_root() {
        let temp = TempDir::new().unwrap();
        let query = enumerate_media(temp.path(), 1000).unwrap();
        assert_eq!(query.total_count, 0);
        assert!(query.assets.is_empty());
    }

    #[test]
    fn test_missing_root_is_query_failure() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("nope");
        let err = enumerate_media(&gone, 10).unwrap_err();
        assert!(matches!(err, FejaError::QueryFailed(_)));
    }

    #[test]
    fn test_background_query_delivers_once() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.jpg"), b"img").unwrap();

        let rx = MediaScanner::new(temp.path().to_path_buf(), 100).query();
        let result = rx.recv().unwrap();
        assert_eq!(result.unwrap().total_count, 1);
        // Channel is one-shot
        assert!(rx.recv().is_err());
    }
}
