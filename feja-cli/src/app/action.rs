/// User actions that can be performed in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the welcome screen for the permission gate
    Start,
    /// Ask the platform for storage/media access
    RequestAccess,
    /// Fire the "open settings" deep link
    OpenSettingsPanel,
    /// Dismiss the blocking permission alert
    DismissAlert,
    /// Start the scan stepper
    BeginScan,
    /// Leave the scan-complete screen for the results review
    SeeResults,
    /// Move selection up
    MoveUp,
    /// Move selection down
    MoveDown,
    /// Toggle the selected card's checkbox, or the selected setting
    Toggle,
    /// Expand/collapse the selected results card
    ToggleExpand,
    /// Open the quick-clean settings screen
    OpenSettings,
    /// Open the general settings menu
    OpenMenu,
    /// Go back to the previous screen
    GoBack,
    /// Show the finish-cleaning confirmation dialog
    FinishCleaning,
    /// Confirm the clean (starts the cleaning overlay)
    ConfirmClean,
    /// Cancel the finish-cleaning dialog
    CancelClean,
    /// Leave the advanced-issues screen for the dashboard
    CloseIssues,
    /// Jump from the dashboard back into the results review
    QuickClean,
    /// Quit the application
    Quit,
    /// No action (for tick events)
    Tick,
}
