//! Pre-computed rows for the results and settings screens.

use std::collections::HashSet;

use feja_core::{
    Category, CleanReport, EmptyFolder, MediaAsset, MediaSummary, REVIEW_CATEGORIES,
    UNNEEDED_CATEGORIES, find_category, format_size,
};

/// One line inside an expanded card
#[derive(Debug, Clone)]
pub struct CardItem {
    pub name: String,
    pub size_label: String,
}

/// One card on the results screen
#[derive(Debug, Clone)]
pub struct ResultCard {
    pub key: &'static str,
    pub label: &'static str,
    pub desc: String,
    pub locked: bool,
    /// None for locked or checkbox-less cards
    pub checkbox: Option<bool>,
    pub items: Vec<CardItem>,
    pub expanded: bool,
}

/// Cards in the "unneeded files" section; the rest are "files to review"
pub const UNNEEDED_SECTION_LEN: usize = 5;

fn label_of(key: &'static str) -> &'static str {
    find_category(key).map(|c| c.label).unwrap_or(key)
}

fn locked_card(key: &'static str, desc: &str) -> ResultCard {
    ResultCard {
        key,
        label: label_of(key),
        desc: desc.to_string(),
        locked: true,
        checkbox: None,
        items: Vec::new(),
        expanded: false,
    }
}

fn media_items(assets: &[MediaAsset]) -> Vec<CardItem> {
    assets
        .iter()
        .map(|a| CardItem {
            name: a.filename.clone(),
            size_label: format_size(a.byte_size),
        })
        .collect()
}

fn folder_items(folders: &[EmptyFolder]) -> Vec<CardItem> {
    folders
        .iter()
        .map(|f| CardItem {
            name: f.name.clone(),
            size_label: EmptyFolder::DISPLAY_SIZE.to_string(),
        })
        .collect()
}

/// Build the results-screen cards in display order.
pub fn build(
    summary: Option<&MediaSummary>,
    report: Option<&CleanReport>,
    selected: &HashSet<&'static str>,
    expanded: &HashSet<&'static str>,
) -> Vec<ResultCard> {
    let media_files: &[MediaAsset] = summary.map(|s| s.media_files.as_slice()).unwrap_or(&[]);
    let thumbnails: &[MediaAsset] = summary.map(|s| s.thumbnails.as_slice()).unwrap_or(&[]);
    let large_old: &[MediaAsset] = summary.map(|s| s.large_old.as_slice()).unwrap_or(&[]);
    let empty_folders: &[EmptyFolder] = report.map(|r| r.empty_folders.as_slice()).unwrap_or(&[]);
    let downloads: &[String] = report.map(|r| r.downloads.as_slice()).unwrap_or(&[]);

    let mut cards = vec![
        locked_card("hidden", "Advanced cleaning requires additional permissions."),
        locked_card("browser", "Advanced cleaning requires additional permissions."),
        ResultCard {
            key: "visible",
            label: label_of("visible"),
            desc: format!("{} media files", media_files.len()),
            locked: false,
            checkbox: Some(selected.contains("visible")),
            items: media_items(media_files),
            expanded: false,
        },
        ResultCard {
            key: "thumbs",
            label: label_of("thumbs"),
            desc: format!("{} found", thumbnails.len()),
            locked: false,
            checkbox: None,
            items: media_items(thumbnails),
            expanded: false,
        },
        ResultCard {
            key: "empty",
            label: label_of("empty"),
            desc: format!("{} found in app storage", empty_folders.len()),
            locked: false,
            checkbox: Some(selected.contains("empty")),
            items: folder_items(empty_folders),
            expanded: false,
        },
        locked_card("trash", "Advanced cleaning required to access system trash."),
        locked_card("appdata", "Advanced cleaning required to access app data."),
        ResultCard {
            key: "largeold",
            label: label_of("largeold"),
            desc: format!("{} found", large_old.len()),
            locked: false,
            checkbox: None,
            items: media_items(large_old),
            expanded: false,
        },
        ResultCard {
            key: "downloads",
            label: label_of("downloads"),
            desc: format!("{} found", downloads.len()),
            locked: false,
            checkbox: None,
            items: downloads
                .iter()
                .map(|name| CardItem {
                    name: name.clone(),
                    size_label: "unknown".to_string(),
                })
                .collect(),
            expanded: false,
        },
    ];

    for card in &mut cards {
        card.expanded = !card.locked && expanded.contains(card.key);
    }

    cards
}

/// Rows of the quick-clean settings screen, both sections in order
pub fn settings_rows() -> Vec<&'static Category> {
    UNNEEDED_CATEGORIES
        .iter()
        .chain(REVIEW_CATEGORIES.iter())
        .collect()
}

/// One entry of the general settings menu
#[derive(Debug, Clone, Copy)]
pub struct MenuRow {
    pub key: &'static str,
    pub label: &'static str,
    pub desc: &'static str,
    /// Rows for features this build does not carry are shown but inert
    pub available: bool,
}

/// Entries of the general settings menu, in display order
pub const MENU_ROWS: &[MenuRow] = &[
    MenuRow {
        key: "quickclean",
        label: "Quick clean settings",
        desc: "Choose which categories a quick clean covers.",
        available: true,
    },
    MenuRow {
        key: "notifications",
        label: "Notifications",
        desc: "Alerts when storage runs low.",
        available: false,
    },
    MenuRow {
        key: "realtime",
        label: "Real-time detection",
        desc: "Watch for junk as it appears.",
        available: false,
    },
    MenuRow {
        key: "terms",
        label: "Terms of service",
        desc: "The legal fine print.",
        available: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_without_any_data_render_zero_counts() {
        let cards = build(None, None, &HashSet::new(), &HashSet::new());
        assert_eq!(cards.len(), 9);
        let visible = cards.iter().find(|c| c.key == "visible").unwrap();
        assert_eq!(visible.desc, "0 media files");
        assert!(visible.items.is_empty());
        let thumbs = cards.iter().find(|c| c.key == "thumbs").unwrap();
        assert_eq!(thumbs.desc, "0 found");
    }

    #[test]
    fn test_locked_cards_never_expand() {
        let mut expanded = HashSet::new();
        expanded.insert("hidden");
        let cards = build(None, None, &HashSet::new(), &expanded);
        assert!(!cards.iter().find(|c| c.key == "hidden").unwrap().expanded);
    }

    #[test]
    fn test_section_split_matches_layout() {
        let cards = build(None, None, &HashSet::new(), &HashSet::new());
        // Unneeded section ends right before "trash"
        assert_eq!(cards[UNNEEDED_SECTION_LEN].key, "trash");
    }

    #[test]
    fn test_menu_leads_with_quick_clean() {
        assert_eq!(MENU_ROWS[0].key, "quickclean");
        assert!(MENU_ROWS[0].available);
        // The rest of the menu is informational only
        assert!(MENU_ROWS[1..].iter().all(|r| !r.available));
    }

    #[test]
    fn test_settings_rows_cover_catalog() {
        let rows = settings_rows();
        assert_eq!(
            rows.len(),
            UNNEEDED_CATEGORIES.len() + REVIEW_CATEGORIES.len()
        );
        assert!(rows.iter().any(|c| c.key == "hidden" && c.locked));
    }
}
