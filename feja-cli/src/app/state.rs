use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime};

use feja_core::{
    CleanReport, FlowEvent, FlowState, MEDIA_QUERY_PHASE, MediaScanner, MediaSummary,
    QueryReceiver, ScanStepper, SpaceBreakdown, StepEvent, StorageStats, ToggleSet, storage_stats,
};

use super::cards::{self, ResultCard};

/// Ceiling passed to the phase-2 media query ("everything")
const MEDIA_QUERY_CEILING: usize = 1_000_000;
/// How long the cosmetic cleaning overlay stays up
const CLEANING_DURATION: Duration = Duration::from_millis(2000);

/// Which screen is on display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Welcome / get-started
    Welcome,
    /// Permission gate with the two-step checklist
    Access,
    /// Scan stepper animation
    Scanning,
    /// "All set" summary after the scan
    ScanComplete,
    /// Quick Clean results review
    Results,
    /// General settings menu
    Menu,
    /// Quick Clean settings (toggle catalog)
    Settings,
    /// Advanced issues (premium upsell)
    Issues,
    /// Storage dashboard
    Dashboard,
}

/// Modal overlay drawn on top of the current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Blocking permission-denied alert
    PermissionAlert,
    /// "Clear temporary app files?" confirmation
    ConfirmClean,
    /// Cosmetic cleaning spinner
    Cleaning,
}

/// Per-list selection state
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewState {
    pub selected_index: usize,
    pub scroll_offset: usize,
}

/// Application state
pub struct AppState {
    /// Current screen
    pub screen: Screen,
    /// Onboarding flow position (reducer-driven)
    pub flow: FlowState,
    /// Active modal overlay
    pub overlay: Option<Overlay>,
    /// Media root being probed/enumerated
    pub media_root: PathBuf,
    /// App-storage dir probed for empty folders
    pub app_dir: PathBuf,
    /// Downloads dir listed on the results screen
    pub downloads_dir: PathBuf,
    /// Scan stepper (Some while the scanning screen is mounted)
    pub stepper: Option<ScanStepper>,
    /// Receiver for the one-shot phase-2 media query
    media_rx: Option<QueryReceiver>,
    /// Derived media summary (None until the query lands)
    pub summary: Option<MediaSummary>,
    /// Filesystem probes for the results screen
    pub report: Option<CleanReport>,
    /// Free/total disk stats, refetched per screen visit
    pub storage: Option<StorageStats>,
    /// Quick-clean category toggles
    pub toggles: ToggleSet,
    /// Results-card checkboxes that are ticked
    pub selected_cards: HashSet<&'static str>,
    /// Results cards currently expanded
    pub expanded_cards: HashSet<&'static str>,
    /// Results list selection
    pub results_state: ViewState,
    /// General settings menu selection
    pub menu_state: ViewState,
    /// Settings list selection
    pub settings_state: ViewState,
    /// Screen the quick-clean settings were opened from
    settings_return: Screen,
    /// When the cleaning overlay went up
    cleaning_started: Option<Instant>,
    /// Spinner frame for the cleaning overlay
    pub spinner_frame: usize,
    /// Non-blocking status line (e.g. a failed media query)
    pub status_message: Option<String>,
    /// Visible list height, set by the UI each frame
    pub visible_height: usize,
    /// Whether app should quit
    pub should_quit: bool,
}

impl AppState {
    pub fn new(media_root: PathBuf, app_dir: PathBuf, downloads_dir: PathBuf) -> Self {
        Self {
            screen: Screen::Welcome,
            flow: FlowState::Welcome,
            overlay: None,
            media_root,
            app_dir,
            downloads_dir,
            stepper: None,
            media_rx: None,
            summary: None,
            report: None,
            storage: None,
            toggles: ToggleSet::default(),
            selected_cards: HashSet::from(["visible", "empty"]),
            expanded_cards: HashSet::new(),
            results_state: ViewState::default(),
            menu_state: ViewState::default(),
            settings_state: ViewState::default(),
            settings_return: Screen::Results,
            cleaning_started: None,
            spinner_frame: 0,
            status_message: None,
            visible_height: 20,
            should_quit: false,
        }
    }

    fn apply_flow(&mut self, event: FlowEvent) {
        let step = feja_core::step(self.flow, event);
        self.flow = step.state;
        if step.alert {
            self.overlay = Some(Overlay::PermissionAlert);
        }
    }

    /// Jump straight to the dashboard, bypassing onboarding
    pub fn skip_intro(&mut self) {
        self.flow = FlowState::ResultsReview;
        self.screen = Screen::Dashboard;
        self.refresh_storage();
    }

    /// Welcome screen: get started
    pub fn start(&mut self) {
        if self.screen != Screen::Welcome {
            return;
        }
        self.apply_flow(FlowEvent::Start);
        self.screen = Screen::Access;
        self.refresh_storage();
    }

    /// Permission gate: probe access and advance (or alert) accordingly
    pub fn request_access(&mut self) {
        if self.flow != FlowState::AwaitingPermission {
            return;
        }
        match feja_core::request_access(&self.media_root) {
            Ok(()) => self.apply_flow(FlowEvent::AccessGranted),
            Err(e) => {
                self.status_message = Some(e.to_string());
                self.apply_flow(FlowEvent::AccessDenied);
            }
        }
    }

    /// Fire the platform deep link toward storage settings
    pub fn open_settings_panel(&self) {
        feja_core::open_storage_settings(&self.media_root);
    }

    pub fn dismiss_alert(&mut self) {
        if self.overlay == Some(Overlay::PermissionAlert) {
            self.overlay = None;
        }
    }

    /// Start the scan. Only legal once permission has been granted.
    pub fn begin_scan(&mut self) {
        if self.flow != FlowState::PermissionGranted {
            return;
        }
        self.apply_flow(FlowEvent::BeginScan);
        self.screen = Screen::Scanning;
        // Remount resets the stepper to 0 and drops any stale summary
        self.stepper = Some(ScanStepper::new());
        self.summary = None;
        self.media_rx = None;
    }

    /// Feed elapsed time into the stepper and react to its events
    pub fn advance_scan(&mut self, elapsed: Duration) {
        if self.screen != Screen::Scanning {
            return;
        }
        let Some(stepper) = &mut self.stepper else {
            return;
        };

        let mut finished = false;
        for event in stepper.advance(elapsed) {
            match event {
                StepEvent::PhaseFinished(MEDIA_QUERY_PHASE) => {
                    // The only phase with a real side effect
                    let scanner =
                        MediaScanner::new(self.media_root.clone(), MEDIA_QUERY_CEILING);
                    self.media_rx = Some(scanner.query());
                }
                StepEvent::Completed => finished = true,
                _ => {}
            }
        }

        if finished {
            self.apply_flow(FlowEvent::ScanFinished);
            self.screen = Screen::ScanComplete;
            self.refresh_storage();
        }
    }

    /// Check whether the background media query has landed
    pub fn poll_media_query(&mut self) {
        if let Some(rx) = &self.media_rx
            && let Ok(result) = rx.try_recv()
        {
            match result {
                Ok(query) => {
                    self.summary = Some(MediaSummary::derive(&query, SystemTime::now()));
                }
                Err(e) => {
                    // Summary stays unset; cards render zero counts
                    self.status_message = Some(format!("Media query failed: {}", e));
                }
            }
            self.media_rx = None;
        }
    }

    /// Scan-complete screen: move on to the results review
    pub fn see_results(&mut self) {
        if self.flow != FlowState::ScanComplete {
            return;
        }
        self.apply_flow(FlowEvent::SeeResults);
        self.screen = Screen::Results;
        self.report = Some(CleanReport::build(&self.app_dir, &self.downloads_dir));
        self.results_state = ViewState::default();
    }

    /// Cards for the results screen, in display order
    pub fn result_cards(&self) -> Vec<ResultCard> {
        cards::build(
            self.summary.as_ref(),
            self.report.as_ref(),
            &self.selected_cards,
            &self.expanded_cards,
        )
    }

    /// Space breakdown for the dashboard legend
    pub fn space_breakdown(&self) -> SpaceBreakdown {
        let total = self.storage.map(|s| s.total_bytes).unwrap_or(0);
        match &self.summary {
            Some(summary) => SpaceBreakdown::from_summary(summary, total),
            None => SpaceBreakdown::estimate(0, total),
        }
    }

    pub fn media_count(&self) -> u64 {
        self.summary.as_ref().map(|s| s.total_count).unwrap_or(0)
    }

    fn refresh_storage(&mut self) {
        // A failed query leaves None and the UI shows placeholders
        self.storage = storage_stats(&self.media_root).ok();
    }

    fn current_item_count(&self) -> usize {
        match self.screen {
            Screen::Results => self.result_cards().len(),
            Screen::Menu => cards::MENU_ROWS.len(),
            Screen::Settings => cards::settings_rows().len(),
            _ => 0,
        }
    }

    fn active_selection_mut(&mut self) -> Option<&mut ViewState> {
        match self.screen {
            Screen::Results => Some(&mut self.results_state),
            Screen::Menu => Some(&mut self.menu_state),
            Screen::Settings => Some(&mut self.settings_state),
            _ => None,
        }
    }

    fn ensure_visible(view: &mut ViewState, visible_height: usize) {
        if view.selected_index < view.scroll_offset {
            view.scroll_offset = view.selected_index;
        } else if view.selected_index >= view.scroll_offset + visible_height {
            view.scroll_offset = view.selected_index - visible_height + 1;
        }
    }

    pub fn move_up(&mut self) {
        let vh = self.visible_height;
        if let Some(view) = self.active_selection_mut() {
            view.selected_index = view.selected_index.saturating_sub(1);
            Self::ensure_visible(view, vh);
        }
    }

    pub fn move_down(&mut self) {
        let count = self.current_item_count();
        let vh = self.visible_height;
        if let Some(view) = self.active_selection_mut() {
            if view.selected_index < count.saturating_sub(1) {
                view.selected_index += 1;
            }
            Self::ensure_visible(view, vh);
        }
    }

    /// Space/Enter: tick a results checkbox, flip a settings toggle, or open
    /// the selected menu entry
    pub fn toggle_selected(&mut self) {
        match self.screen {
            Screen::Menu => {
                if let Some(row) = cards::MENU_ROWS.get(self.menu_state.selected_index)
                    && row.available
                {
                    self.open_settings();
                }
            }
            Screen::Results => {
                let cards = self.result_cards();
                if let Some(card) = cards.get(self.results_state.selected_index)
                    && card.checkbox.is_some()
                {
                    if !self.selected_cards.remove(card.key) {
                        self.selected_cards.insert(card.key);
                    }
                }
            }
            Screen::Settings => {
                let rows = cards::settings_rows();
                if let Some(category) = rows.get(self.settings_state.selected_index) {
                    self.toggles.toggle(category.key);
                }
            }
            _ => {}
        }
    }

    /// Enter on a results card: expand or collapse its item list
    pub fn toggle_expanded(&mut self) {
        if self.screen != Screen::Results {
            return;
        }
        let cards = self.result_cards();
        if let Some(card) = cards.get(self.results_state.selected_index)
            && !card.locked
        {
            if !self.expanded_cards.remove(card.key) {
                self.expanded_cards.insert(card.key);
            }
        }
    }

    pub fn open_settings(&mut self) {
        if matches!(
            self.screen,
            Screen::Results | Screen::Dashboard | Screen::Menu
        ) {
            self.settings_return = self.screen;
            self.screen = Screen::Settings;
            self.settings_state = ViewState::default();
        }
    }

    /// Dashboard: open the general settings menu
    pub fn open_menu(&mut self) {
        if self.screen == Screen::Dashboard {
            self.screen = Screen::Menu;
            self.menu_state = ViewState::default();
        }
    }

    pub fn go_back(&mut self) {
        match self.screen {
            Screen::Access => self.screen = Screen::Welcome,
            Screen::Results => self.screen = Screen::ScanComplete,
            Screen::Menu => self.screen = Screen::Dashboard,
            Screen::Settings => self.screen = self.settings_return,
            _ => {}
        }
    }

    pub fn finish_cleaning(&mut self) {
        if self.screen == Screen::Results && self.overlay.is_none() {
            self.overlay = Some(Overlay::ConfirmClean);
        }
    }

    pub fn confirm_clean(&mut self) {
        if self.overlay == Some(Overlay::ConfirmClean) {
            self.overlay = Some(Overlay::Cleaning);
            self.cleaning_started = Some(Instant::now());
        }
    }

    pub fn cancel_clean(&mut self) {
        if self.overlay == Some(Overlay::ConfirmClean) {
            self.overlay = None;
        }
    }

    /// Advance animations; ends the cleaning overlay after its fixed delay
    pub fn tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % 10;
        if self.overlay == Some(Overlay::Cleaning)
            && let Some(started) = self.cleaning_started
            && started.elapsed() >= CLEANING_DURATION
        {
            self.overlay = None;
            self.cleaning_started = None;
            self.screen = Screen::Issues;
        }
    }

    /// Advanced-issues screen: both resolve and skip land on the dashboard
    pub fn close_issues(&mut self) {
        if self.screen == Screen::Issues {
            self.screen = Screen::Dashboard;
            self.refresh_storage();
        }
    }

    /// Dashboard quick-clean: back into the results review
    pub fn quick_clean(&mut self) {
        if self.screen == Screen::Dashboard {
            self.screen = Screen::Results;
            self.report = Some(CleanReport::build(&self.app_dir, &self.downloads_dir));
            self.results_state = ViewState::default();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn state_in(temp: &TempDir) -> AppState {
        AppState::new(
            temp.path().to_path_buf(),
            temp.path().join("app"),
            temp.path().join("downloads"),
        )
    }

    #[test]
    fn test_onboarding_reaches_results() {
        let temp = TempDir::new().unwrap();
        let mut state = state_in(&temp);

        state.start();
        assert_eq!(state.screen, Screen::Access);
        assert_eq!(state.flow, FlowState::AwaitingPermission);

        state.request_access();
        assert_eq!(state.flow, FlowState::PermissionGranted);

        state.begin_scan();
        assert_eq!(state.screen, Screen::Scanning);

        // Run the whole stepper in one gulp
        state.advance_scan(Duration::from_secs(60));
        assert_eq!(state.screen, Screen::ScanComplete);
        assert_eq!(state.flow, FlowState::ScanComplete);

        state.see_results();
        assert_eq!(state.screen, Screen::Results);
        assert_eq!(state.flow, FlowState::ResultsReview);
        assert!(state.report.is_some());
    }

    #[test]
    fn test_denied_access_blocks_scan() {
        let temp = TempDir::new().unwrap();
        let mut state = AppState::new(
            temp.path().join("missing"),
            temp.path().join("app"),
            temp.path().join("downloads"),
        );

        state.start();
        state.request_access();
        assert_eq!(state.flow, FlowState::AwaitingPermission);
        assert_eq!(state.overlay, Some(Overlay::PermissionAlert));

        // The scan must not start while blocked
        state.begin_scan();
        assert_eq!(state.screen, Screen::Access);
        assert_ne!(state.flow, FlowState::Scanning);

        state.dismiss_alert();
        assert_eq!(state.overlay, None);
    }

    #[test]
    fn test_media_query_fires_once_per_scan() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("pic.jpg"), b"img").unwrap();
        let mut state = state_in(&temp);

        state.start();
        state.request_access();
        state.begin_scan();

        // Phase 2 ends at 6400ms (three phases and two settles); before that, no query
        state.advance_scan(Duration::from_millis(6000));
        assert!(state.media_rx.is_none());

        state.advance_scan(Duration::from_millis(1000));
        assert!(state.media_rx.is_some());

        // Wait for the background thread, then poll it in
        std::thread::sleep(Duration::from_millis(200));
        state.poll_media_query();
        assert_eq!(state.media_count(), 1);
    }

    #[test]
    fn test_card_checkbox_round_trip() {
        let temp = TempDir::new().unwrap();
        let mut state = state_in(&temp);
        state.screen = Screen::Results;
        state.report = Some(CleanReport::default());

        let cards = state.result_cards();
        let idx = cards.iter().position(|c| c.key == "visible").unwrap();
        state.results_state.selected_index = idx;

        assert!(state.selected_cards.contains("visible"));
        state.toggle_selected();
        assert!(!state.selected_cards.contains("visible"));
        state.toggle_selected();
        assert!(state.selected_cards.contains("visible"));
    }

    #[test]
    fn test_locked_card_ignores_toggle_and_expand() {
        let temp = TempDir::new().unwrap();
        let mut state = state_in(&temp);
        state.screen = Screen::Results;
        state.report = Some(CleanReport::default());

        let cards = state.result_cards();
        let idx = cards.iter().position(|c| c.key == "hidden").unwrap();
        state.results_state.selected_index = idx;

        let before = state.selected_cards.clone();
        state.toggle_selected();
        assert_eq!(state.selected_cards, before);

        state.toggle_expanded();
        assert!(state.expanded_cards.is_empty());
    }

    #[test]
    fn test_cleaning_flow_lands_on_issues_then_dashboard() {
        let temp = TempDir::new().unwrap();
        let mut state = state_in(&temp);
        state.screen = Screen::Results;

        state.finish_cleaning();
        assert_eq!(state.overlay, Some(Overlay::ConfirmClean));

        state.confirm_clean();
        assert_eq!(state.overlay, Some(Overlay::Cleaning));

        // Before the delay the overlay stays up
        state.tick();
        assert_eq!(state.overlay, Some(Overlay::Cleaning));

        std::thread::sleep(CLEANING_DURATION + Duration::from_millis(50));
        state.tick();
        assert_eq!(state.overlay, None);
        assert_eq!(state.screen, Screen::Issues);

        state.close_issues();
        assert_eq!(state.screen, Screen::Dashboard);
    }

    #[test]
    fn test_menu_routes_to_quick_clean_settings() {
        let temp = TempDir::new().unwrap();
        let mut state = state_in(&temp);
        state.skip_intro();

        state.open_menu();
        assert_eq!(state.screen, Screen::Menu);

        // First row opens the toggle list; back returns through the menu
        state.toggle_selected();
        assert_eq!(state.screen, Screen::Settings);
        state.go_back();
        assert_eq!(state.screen, Screen::Menu);
        state.go_back();
        assert_eq!(state.screen, Screen::Dashboard);
    }

    #[test]
    fn test_unavailable_menu_rows_inert() {
        let temp = TempDir::new().unwrap();
        let mut state = state_in(&temp);
        state.skip_intro();
        state.open_menu();

        state.move_down();
        state.toggle_selected();
        assert_eq!(state.screen, Screen::Menu);
    }

    #[test]
    fn test_settings_returns_where_opened() {
        let temp = TempDir::new().unwrap();
        let mut state = state_in(&temp);
        state.screen = Screen::Results;

        state.open_settings();
        assert_eq!(state.screen, Screen::Settings);
        state.go_back();
        assert_eq!(state.screen, Screen::Results);
    }

    #[test]
    fn test_skip_intro_opens_dashboard() {
        let temp = TempDir::new().unwrap();
        let mut state = state_in(&temp);
        state.skip_intro();
        assert_eq!(state.screen, Screen::Dashboard);

        state.quick_clean();
        assert_eq!(state.screen, Screen::Results);
        assert!(state.report.is_some());
    }

    #[test]
    fn test_settings_toggle_round_trip() {
        let temp = TempDir::new().unwrap();
        let mut state = state_in(&temp);
        state.screen = Screen::Settings;

        let rows = cards::settings_rows();
        let idx = rows.iter().position(|c| c.key == "screenshots").unwrap();
        state.settings_state.selected_index = idx;

        assert!(!state.toggles.is_on("screenshots"));
        state.toggle_selected();
        assert!(state.toggles.is_on("screenshots"));
        state.toggle_selected();
        assert!(!state.toggles.is_on("screenshots"));
    }
}
