//! Tipboard TUI - interactive terminal board for advisory tips

pub mod app;
pub mod event;
pub mod logging;
pub mod tui;
pub mod views;

pub use app::App;
pub use tui::Tui;
