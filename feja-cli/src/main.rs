mod app;
mod tui;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, style::Style, widgets::Widget};

use app::{Action, AppState, Overlay, Screen};
use tui::{AppEvent, EventHandler, handle_key};
use ui::{
    AccessView, AppLayout, CleaningView, CompleteView, ConfirmCleanView, DashboardView, Footer,
    Header, IssuesView, MenuView, PermissionAlertView, ResultsView, ScanningView, SettingsView,
    Theme, WelcomeView,
};

/// FEJA - Interactive Terminal Device Cleaner
#[derive(Parser, Debug)]
#[command(name = "feja")]
#[command(about = "An interactive terminal cleaner for unneeded files and old media")]
#[command(version)]
struct Args {
    /// Media root to scan (defaults to the home directory)
    path: Option<PathBuf>,

    /// App-storage directory probed for empty folders
    #[arg(long)]
    app_dir: Option<PathBuf>,

    /// Downloads directory listed on the results screen
    #[arg(long)]
    downloads_dir: Option<PathBuf>,

    /// Skip the onboarding flow and open the dashboard directly
    #[arg(long)]
    skip_intro: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    // Resolve the scan root
    let path = args
        .path
        .clone()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let path = path.canonicalize().unwrap_or(path);

    // Validate path
    if !path.exists() {
        eprintln!("Error: Path does not exist: {}", path.display());
        std::process::exit(1);
    }
    if !path.is_dir() {
        eprintln!("Error: Path is not a directory: {}", path.display());
        std::process::exit(1);
    }

    let app_dir = args
        .app_dir
        .clone()
        .or_else(|| dirs::data_dir().map(|d| d.join("feja")))
        .unwrap_or_else(|| path.clone());
    let downloads_dir = args
        .downloads_dir
        .clone()
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| path.join("Downloads"));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run app
    let result = run_app(&mut terminal, path, app_dir, downloads_dir, args.skip_intro);

    // Restore terminal
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    path: PathBuf,
    app_dir: PathBuf,
    downloads_dir: PathBuf,
    skip_intro: bool,
) -> Result<()> {
    let theme = Theme::default();
    let mut state = AppState::new(path, app_dir, downloads_dir);
    if skip_intro {
        state.skip_intro();
    }
    let event_handler = EventHandler::new(feja_core::TICK);

    let mut last_frame = Instant::now();

    loop {
        // Advance the scan by wall-clock time and pick up the media query
        let elapsed = last_frame.elapsed();
        last_frame = Instant::now();
        state.advance_scan(elapsed);
        state.poll_media_query();

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();
            let layout = AppLayout::new(area);

            // Background
            frame
                .buffer_mut()
                .set_style(area, Style::default().bg(theme.bg));

            // Results cards take two rows each; used for scroll clamping
            state.visible_height = (layout.body.height as usize / 2).max(1);

            // Header
            Header::new(&state, &theme).render(layout.header, frame.buffer_mut());

            // Main content
            match state.screen {
                Screen::Welcome => {
                    WelcomeView::new(&theme).render(layout.body, frame.buffer_mut());
                }
                Screen::Access => {
                    AccessView::new(&state, &theme).render(layout.body, frame.buffer_mut());
                }
                Screen::Scanning => {
                    if let Some(stepper) = &state.stepper {
                        ScanningView::new(stepper, &theme)
                            .render(layout.body, frame.buffer_mut());
                    }
                }
                Screen::ScanComplete => {
                    CompleteView::new(&state, &theme).render(layout.body, frame.buffer_mut());
                }
                Screen::Results => {
                    ResultsView::new(&state, &theme).render(layout.body, frame.buffer_mut());
                }
                Screen::Menu => {
                    MenuView::new(&state, &theme).render(layout.body, frame.buffer_mut());
                }
                Screen::Settings => {
                    SettingsView::new(&state, &theme).render(layout.body, frame.buffer_mut());
                }
                Screen::Issues => {
                    IssuesView::new(&state, &theme).render(layout.body, frame.buffer_mut());
                }
                Screen::Dashboard => {
                    DashboardView::new(&state, &theme).render(layout.body, frame.buffer_mut());
                }
            }

            // Modal overlay on top of the current screen
            match state.overlay {
                Some(Overlay::PermissionAlert) => {
                    PermissionAlertView::new(&theme).render(area, frame.buffer_mut());
                }
                Some(Overlay::ConfirmClean) => {
                    ConfirmCleanView::new(state.selected_cards.len(), &theme)
                        .render(area, frame.buffer_mut());
                }
                Some(Overlay::Cleaning) => {
                    CleaningView::new(state.spinner_frame, &theme)
                        .render(area, frame.buffer_mut());
                }
                None => {}
            }

            // Footer
            Footer::new(&state, &theme).render(layout.footer, frame.buffer_mut());
        })?;

        // Handle events
        match event_handler.next()? {
            AppEvent::Key(key) => {
                let action = handle_key(key, &state);
                handle_action(&mut state, action);
            }
            AppEvent::Resize(_, _) => {
                // Terminal will redraw on next loop
            }
            AppEvent::Tick => {
                state.tick();
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_action(state: &mut AppState, action: Action) {
    match action {
        Action::Start => state.start(),
        Action::RequestAccess => state.request_access(),
        Action::OpenSettingsPanel => state.open_settings_panel(),
        Action::DismissAlert => state.dismiss_alert(),
        Action::BeginScan => state.begin_scan(),
        Action::SeeResults => state.see_results(),
        Action::MoveUp => state.move_up(),
        Action::MoveDown => state.move_down(),
        Action::Toggle => state.toggle_selected(),
        Action::ToggleExpand => state.toggle_expanded(),
        Action::OpenSettings => state.open_settings(),
        Action::OpenMenu => state.open_menu(),
        Action::GoBack => state.go_back(),
        Action::FinishCleaning => state.finish_cleaning(),
        Action::ConfirmClean => state.confirm_clean(),
        Action::CancelClean => state.cancel_clean(),
        Action::CloseIssues => state.close_issues(),
        Action::QuickClean => state.quick_clean(),
        Action::Quit => state.quit(),
        Action::Tick => {}
    }
}
