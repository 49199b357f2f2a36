//! Tipboard - searchable, sortable board of advisory tips
//!
//! Loads a static JSON document of tips once, keeps it in memory, and
//! answers search, filter and sort requests against it. Rendering surfaces
//! (HTML, terminal) plug in through [`board::BoardView`].

pub mod board;
pub mod chips;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod layout;
pub mod loader;
pub mod render;
pub mod sort;
pub mod testing;
pub mod tip;

pub use board::{BoardView, TipBoard};
pub use error::{LoadError, TipboardError};
pub use tip::{Tip, TipField};
