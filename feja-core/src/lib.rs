pub mod catalog;
pub mod error;
pub mod flow;
pub mod media;
pub mod platform;
pub mod scan;
pub mod size;
pub mod stats;
pub mod summary;

pub use catalog::{Category, REVIEW_CATEGORIES, ToggleSet, UNNEEDED_CATEGORIES, find_category};
pub use error::{FejaError, Result};
pub use flow::{FlowEvent, FlowState, FlowStep, step};
pub use media::{MediaAsset, MediaKind, MediaQuery, MediaScanner, QueryReceiver, enumerate_media};
pub use platform::{open_storage_settings, request_access};
pub use scan::{MEDIA_QUERY_PHASE, SCAN_PHASES, ScanPhase, ScanStepper, StepEvent, TICK};
pub use size::{format_count, format_gb, format_size};
pub use stats::{SpaceBreakdown, StorageStats, storage_stats};
pub use summary::{CleanReport, EmptyFolder, MediaSummary, list_directory, probe_empty_folders};
