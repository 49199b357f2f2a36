use std::path::PathBuf;

use clap::Parser;
use tipboard::TipBoard;
use tipboard::config::ExportConfig;

use crate::commands::SortArgs;
use crate::error::CliResult;
use crate::output::{HeadlessView, OutputFormat};

#[derive(Parser)]
pub struct ExportCommand {
    #[clap(long, short, help = "Directory to write the export file into")]
    pub dir: Option<PathBuf>,

    #[clap(flatten)]
    pub sort: SortArgs,
}

impl ExportCommand {
    pub async fn execute(
        &self,
        mut board: TipBoard<HeadlessView>,
        export: &ExportConfig,
        format: OutputFormat,
    ) -> CliResult<()> {
        self.sort.apply(&mut board)?;

        let dir = self.dir.as_deref().unwrap_or(export.dir.as_path());
        let path = board.export_to_dir(dir).await?;

        match format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "path": path.display().to_string(),
                    "exported": board.tips().len(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => {
                println!("Exported {} tips to {}", board.tips().len(), path.display());
            }
        }

        Ok(())
    }
}
