use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use feja_core::FlowState;

use crate::app::{Action, AppState, Overlay, Screen};

/// Map key events to actions based on the current screen and overlay
pub fn handle_key(key: KeyEvent, state: &AppState) -> Action {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    // An overlay captures all input while it is up
    if let Some(overlay) = state.overlay {
        return handle_key_overlay(key, overlay);
    }

    match state.screen {
        Screen::Welcome => handle_key_welcome(key),
        Screen::Access => handle_key_access(key, state.flow),
        Screen::Scanning => handle_key_scanning(key),
        Screen::ScanComplete => handle_key_complete(key),
        Screen::Results => handle_key_results(key),
        Screen::Menu => handle_key_menu(key),
        Screen::Settings => handle_key_settings(key),
        Screen::Issues => handle_key_issues(key),
        Screen::Dashboard => handle_key_dashboard(key),
    }
}

fn handle_key_overlay(key: KeyEvent, overlay: Overlay) -> Action {
    match overlay {
        Overlay::PermissionAlert => match key.code {
            KeyCode::Enter | KeyCode::Esc => Action::DismissAlert,
            KeyCode::Char('o') => Action::OpenSettingsPanel,
            _ => Action::Tick,
        },
        Overlay::ConfirmClean => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Action::ConfirmClean,
            KeyCode::Char('n') | KeyCode::Esc => Action::CancelClean,
            _ => Action::Tick,
        },
        // No interruption while cleaning
        Overlay::Cleaning => Action::Tick,
    }
}

fn handle_key_welcome(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::Start,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::Tick,
    }
}

fn handle_key_access(key: KeyEvent, flow: FlowState) -> Action {
    match key.code {
        // The same key advances both checklist steps
        KeyCode::Enter | KeyCode::Char('a') => {
            if flow == FlowState::PermissionGranted {
                Action::BeginScan
            } else {
                Action::RequestAccess
            }
        }
        KeyCode::Char('o') => Action::OpenSettingsPanel,
        KeyCode::Esc | KeyCode::Backspace => Action::GoBack,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::Tick,
    }
}

fn handle_key_scanning(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        _ => Action::Tick,
    }
}

fn handle_key_complete(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::SeeResults,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::Tick,
    }
}

fn handle_key_results(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::Char(' ') => Action::Toggle,
        KeyCode::Enter => Action::ToggleExpand,
        KeyCode::Char('s') => Action::OpenSettings,
        KeyCode::Char('f') => Action::FinishCleaning,
        KeyCode::Esc | KeyCode::Backspace => Action::GoBack,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::Tick,
    }
}

fn handle_key_menu(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::Char(' ') | KeyCode::Enter => Action::Toggle,
        KeyCode::Esc | KeyCode::Backspace => Action::GoBack,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::Tick,
    }
}

fn handle_key_settings(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::Char(' ') | KeyCode::Enter => Action::Toggle,
        KeyCode::Esc | KeyCode::Backspace => Action::GoBack,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::Tick,
    }
}

fn handle_key_issues(key: KeyEvent) -> Action {
    match key.code {
        // Resolve and skip both land on the dashboard
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('s') => Action::CloseIssues,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::Tick,
    }
}

fn handle_key_dashboard(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') | KeyCode::Enter => Action::QuickClean,
        KeyCode::Char('s') => Action::OpenSettings,
        KeyCode::Char('m') => Action::OpenMenu,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::Tick,
    }
}
