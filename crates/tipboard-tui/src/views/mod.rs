//! TUI view components

pub mod board;
pub mod detail;

pub use board::{ChipItem, TableView};
pub use detail::TipDetailView;
