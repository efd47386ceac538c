//! Disk capacity stats and the dashboard space breakdown.

use std::path::Path;

use sysinfo::Disks;

use crate::error::{FejaError, Result};
use crate::summary::MediaSummary;

/// Free/total capacity of the disk backing a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageStats {
    pub free_bytes: u64,
    pub total_bytes: u64,
}

impl StorageStats {
    /// Occupied bytes. Some filesystems report more available space than
    /// their total (reserved blocks, overprovisioning), so this saturates
    /// rather than underflow.
    pub fn used_bytes(&self) -> u64 {
        self.total_bytes.saturating_sub(self.free_bytes)
    }

    pub fn used_percent(&self) -> f64 {
        if self.total_bytes == 0 {
            return 0.0;
        }
        (self.used_bytes() as f64 / self.total_bytes as f64) * 100.0
    }
}

/// Query free/total space for the disk holding `path`.
///
/// Picks the mounted disk whose mount point is the longest prefix of the
/// path; no match is a query failure, which callers render as `--`.
pub fn storage_stats(path: &Path) -> Result<StorageStats> {
    let disks = Disks::new_with_refreshed_list();
    stats_from_disks(&disks, path)
}

fn stats_from_disks(disks: &Disks, path: &Path) -> Result<StorageStats> {
    let best = disks
        .list()
        .iter()
        .filter(|d| path.starts_with(d.mount_point()))
        .max_by_key(|d| d.mount_point().as_os_str().len())
        .ok_or_else(|| {
            FejaError::QueryFailed(format!("no mounted disk covers {}", path.display()))
        })?;

    Ok(StorageStats {
        free_bytes: best.available_space(),
        total_bytes: best.total_space(),
    })
}

/// Bytes attributed to each dashboard legend segment.
///
/// Before a scan has run nothing is measured, so the legend uses the
/// placeholder multipliers the product ships with: 50 KiB of unneeded data
/// and 2 MiB worth of reviewable data per media file, plus 3% of capacity
/// assumed hidden. Once a summary exists, unneeded and review come from the
/// bytes actually found; hidden stays an estimate because that category is
/// locked and never measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpaceBreakdown {
    pub unneeded_bytes: u64,
    pub hidden_bytes: u64,
    pub review_bytes: u64,
}

const UNNEEDED_PER_FILE: u64 = 50 * 1024;
const REVIEW_PER_FILE: u64 = 2 * 1024 * 1024;
const HIDDEN_CAPACITY_PERCENT: u64 = 3;

impl SpaceBreakdown {
    pub fn estimate(media_count: u64, total_bytes: u64) -> Self {
        Self {
            unneeded_bytes: media_count * UNNEEDED_PER_FILE,
            hidden_bytes: total_bytes * HIDDEN_CAPACITY_PERCENT / 100,
            review_bytes: media_count * REVIEW_PER_FILE,
        }
    }

    pub fn from_summary(summary: &MediaSummary, total_bytes: u64) -> Self {
        Self {
            unneeded_bytes: summary.thumbnail_bytes(),
            hidden_bytes: total_bytes * HIDDEN_CAPACITY_PERCENT / 100,
            review_bytes: summary.large_old_bytes(),
        }
    }
}
