use std::io::Write;

use clap::Parser;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use tipboard::{BoardView, Tip, TipBoard};

use crate::commands::BoardArgs;
use crate::error::CliResult;
use crate::output::{HeadlessView, OutputFormat, truncate_string};

#[derive(Parser)]
pub struct ListCommand {
    #[clap(flatten)]
    pub board: BoardArgs,

    #[clap(long, short, help = "Maximum number of tips to display")]
    pub limit: Option<usize>,
}

impl ListCommand {
    pub async fn execute(
        &self,
        mut board: TipBoard<HeadlessView>,
        format: OutputFormat,
    ) -> CliResult<()> {
        self.board.apply(&mut board)?;
        self.write_to(&board, format, &mut std::io::stdout().lock())
    }

    /// Visible tips in board order, capped by `--limit`
    pub fn select<'a, V: BoardView>(&self, board: &'a TipBoard<V>) -> Vec<&'a Tip> {
        let limit = self.limit.unwrap_or(usize::MAX);
        board.visible_tips().map(|(_, t)| t).take(limit).collect()
    }

    /// Print the selected rows of an already filtered board
    pub fn write_to<V: BoardView, W: Write>(
        &self,
        board: &TipBoard<V>,
        format: OutputFormat,
        out: &mut W,
    ) -> CliResult<()> {
        let total = board.tips().len();
        let visible = self.select(board);
        tracing::debug!(shown = visible.len(), total, "listing tips");

        match format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&visible)?)?;
            }
            OutputFormat::Table => {
                if visible.is_empty() {
                    writeln!(out, "No tips found.")?;
                    return Ok(());
                }

                let layout = board.layout();
                let mut table = Table::new();
                table
                    .load_preset(UTF8_FULL_CONDENSED)
                    .set_content_arrangement(ContentArrangement::Dynamic)
                    .set_header(layout.columns().iter().map(|c| c.label));

                for tip in &visible {
                    table.add_row(
                        layout
                            .columns()
                            .iter()
                            .map(|c| truncate_string(c.value(tip), 50)),
                    );
                }

                writeln!(out, "{table}")?;
                writeln!(out, "\nShowing {} of {} tips", visible.len(), total)?;
            }
        }

        Ok(())
    }
}
