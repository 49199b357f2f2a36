pub mod commands;
pub mod error;
pub mod output;

pub use commands::{ConfigCommand, ExportCommand, ListCommand, RenderCommand};
pub use error::{CliError, CliResult};
pub use output::{HeadlessView, OutputFormat, truncate_string};
