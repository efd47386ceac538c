mod access;
mod alert;
pub mod bar_chart;
mod cleaning;
mod complete;
mod confirm;
mod dashboard;
mod footer;
mod header;
mod issues;
mod layout;
mod menu;
mod results;
mod scanning;
mod settings;
mod theme;
mod welcome;

pub use access::AccessView;
pub use alert::PermissionAlertView;
pub use cleaning::CleaningView;
pub use complete::CompleteView;
pub use confirm::ConfirmCleanView;
pub use dashboard::DashboardView;
pub use footer::Footer;
pub use header::Header;
pub use issues::IssuesView;
pub use layout::AppLayout;
pub use menu::MenuView;
pub use results::ResultsView;
pub use scanning::ScanningView;
pub use settings::SettingsView;
pub use theme::Theme;
pub use welcome::WelcomeView;
