mod action;
pub mod cards;
mod state;

pub use action::Action;
pub use state::{AppState, Overlay, Screen, ViewState};
