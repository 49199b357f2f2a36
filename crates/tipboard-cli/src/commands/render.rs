use std::path::PathBuf;

use clap::Parser;
use tipboard::TipBoard;
use tipboard::render::HtmlView;

use crate::commands::BoardArgs;
use crate::error::CliResult;
use crate::output::OutputFormat;

#[derive(Parser)]
pub struct RenderCommand {
    #[clap(flatten)]
    pub board: BoardArgs,

    #[clap(long, short, help = "Write the HTML table to this file instead of stdout")]
    pub output: Option<PathBuf>,
}

impl RenderCommand {
    pub async fn execute(
        &self,
        mut board: TipBoard<HtmlView>,
        format: OutputFormat,
    ) -> CliResult<()> {
        self.board.apply(&mut board)?;

        let html = board.view().document();
        let visible = board.view().visible_rows();

        match &self.output {
            Some(path) => {
                tokio::fs::write(path, html.as_bytes()).await?;
                tracing::info!(path = %path.display(), visible, "wrote HTML table");
                match format {
                    OutputFormat::Json => {
                        let output = serde_json::json!({
                            "path": path.display().to_string(),
                            "rows": board.tips().len(),
                            "visible": visible,
                        });
                        println!("{}", serde_json::to_string_pretty(&output)?);
                    }
                    OutputFormat::Table => {
                        println!(
                            "Rendered {} rows ({} visible) to {}",
                            board.tips().len(),
                            visible,
                            path.display()
                        );
                    }
                }
            }
            None => match format {
                OutputFormat::Json => {
                    let output = serde_json::json!({
                        "thead": board.view().header(),
                        "tbody": board.view().body(),
                        "chips": board.view().chips(),
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Table => print!("{html}"),
            },
        }

        Ok(())
    }
}
