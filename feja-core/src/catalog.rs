//! The fixed catalog of cleaning categories and the in-memory toggle set.

use std::collections::BTreeMap;

/// One entry in the cleaning catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub key: &'static str,
    pub label: &'static str,
    pub desc: &'static str,
    /// Premium gate: shown with a lock, never toggleable
    pub locked: bool,
}

/// Safe-to-delete categories
pub const UNNEEDED_CATEGORIES: &[Category] = &[
    Category {
        key: "hidden",
        label: "Hidden caches",
        desc: "Temporary files that are deep in your app settings and more difficult to remove.",
        locked: true,
    },
    Category {
        key: "visible",
        label: "Visible caches",
        desc: "Temporary files that can be recreated.",
        locked: false,
    },
    Category {
        key: "browser",
        label: "Browser data",
        desc: "Saved data collected by your browsers when you browse or search online.",
        locked: true,
    },
    Category {
        key: "residual",
        label: "Residual files",
        desc: "Leftover files after you uninstall apps from your device.",
        locked: false,
    },
    Category {
        key: "apks",
        label: "Installed packages",
        desc: "Leftover installation files after new apps are installed.",
        locked: false,
    },
    Category {
        key: "ad",
        label: "Ad caches",
        desc: "Temporary files that make ads work.",
        locked: false,
    },
    Category {
        key: "thumbs",
        label: "Thumbnails",
        desc: "Small preview versions of your photos.",
        locked: false,
    },
    Category {
        key: "empty",
        label: "Empty folders",
        desc: "Folders with nothing inside.",
        locked: false,
    },
];

/// Categories the user should look at before deleting
pub const REVIEW_CATEGORIES: &[Category] = &[
    Category {
        key: "trash",
        label: "Trash",
        desc: "Files that you already moved to the Trash folder.",
        locked: false,
    },
    Category {
        key: "appdata",
        label: "App data",
        desc: "Content that's created or downloaded while you use your apps.",
        locked: false,
    },
    Category {
        key: "downloads",
        label: "Downloads",
        desc: "Files that you downloaded from the internet.",
        locked: false,
    },
    Category {
        key: "screenshots",
        label: "Screenshots",
        desc: "Photos that show what's visible on your display when they're taken.",
        locked: false,
    },
    Category {
        key: "badphotos",
        label: "Bad photos",
        desc: "Photos from your camera detected as blurry, dark, or low quality.",
        locked: false,
    },
    Category {
        key: "largeold",
        label: "Large old files",
        desc: "Files that are at least 100 MB and were created at least one month ago.",
        locked: false,
    },
    Category {
        key: "temp",
        label: "Temporary files",
        desc: "Log files, junk imported from other systems, and other temporary data.",
        locked: false,
    },
];

/// Find a category by key across both sections
pub fn find_category(key: &str) -> Option<&'static Category> {
    UNNEEDED_CATEGORIES
        .iter()
        .chain(REVIEW_CATEGORIES.iter())
        .find(|c| c.key == key)
}

/// In-memory category toggles, default-seeded, never persisted.
#[derive(Debug, Clone)]
pub struct ToggleSet {
    map: BTreeMap<&'static str, bool>,
}

impl Default for ToggleSet {
    fn default() -> Self {
        let mut map = BTreeMap::new();
        for category in UNNEEDED_CATEGORIES.iter().chain(REVIEW_CATEGORIES.iter()) {
            if !category.locked {
                // Shipped defaults: conservative review categories start off
                let on = !matches!(category.key, "screenshots" | "badphotos" | "temp");
                map.insert(category.key, on);
            }
        }
        Self { map }
    }
}

impl ToggleSet {
    pub fn is_on(&self, key: &str) -> bool {
        self.map.get(key).copied().unwrap_or(false)
    }

    /// Flip a toggle. Locked and unknown keys are inert; returns the new
    /// value when something changed.
    pub fn toggle(&mut self, key: &str) -> Option<bool> {
        let category = find_category(key)?;
        if category.locked {
            return None;
        }
        let value = self.map.entry(category.key).or_insert(false);
        *value = !*value;
        Some(*value)
    }

    /// Number of toggles currently on
    pub fn enabled_count(&self) -> usize {
        self.map.values().filter(|v| **v).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seeds() {
        let toggles = ToggleSet::default();
        assert!(toggles.is_on("visible"));
        assert!(toggles.is_on("thumbs"));
        assert!(toggles.is_on("largeold"));
        assert!(!toggles.is_on("screenshots"));
        assert!(!toggles.is_on("badphotos"));
        assert!(!toggles.is_on("temp"));
        // Locked categories have no toggle at all
        assert!(!toggles.is_on("hidden"));
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let mut toggles = ToggleSet::default();
        for key in ["visible", "screenshots", "empty", "temp"] {
            let before = toggles.is_on(key);
            assert_eq!(toggles.toggle(key), Some(!before));
            assert_eq!(toggles.toggle(key), Some(before));
            assert_eq!(toggles.is_on(key), before);
        }
    }

    #[test]
    fn test_locked_and_unknown_keys_inert() {
        let mut toggles = ToggleSet::default();
        assert_eq!(toggles.toggle("hidden"), None);
        assert_eq!(toggles.toggle("browser"), None);
        assert_eq!(toggles.toggle("does-not-exist"), None);
        assert!(!toggles.is_on("hidden"));
    }

    #[test]
    fn test_enabled_count_tracks_toggles() {
        let mut toggles = ToggleSet::default();
        let initial = toggles.enabled_count();
        toggles.toggle("visible");
        assert_eq!(toggles.enabled_count(), initial - 1);
        toggles.toggle("screenshots");
        assert_eq!(toggles.enabled_count(), initial);
    }

    #[test]
    fn test_catalog_lookup() {
        assert!(find_category("hidden").unwrap().locked);
        assert!(!find_category("downloads").unwrap().locked);
        assert!(find_category("nope").is_none());
    }
}
