pub mod board_args;
pub mod config;
pub mod export;
pub mod list;
pub mod render;

pub use board_args::{BoardArgs, SortArgs};
pub use config::ConfigCommand;
pub use export::ExportCommand;
pub use list::ListCommand;
pub use render::RenderCommand;
