use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use tipboard::config::Config;
use tipboard::export::EXPORT_FILE_NAME;

use crate::error::CliResult;
use crate::output::OutputFormat;

#[derive(Parser)]
pub struct ConfigCommand {
    #[clap(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    #[clap(about = "Show the effective configuration")]
    Show,

    #[clap(about = "Print a default config file")]
    Init,
}

impl ConfigCommand {
    pub async fn execute(&self, config: &Config, format: OutputFormat) -> CliResult<()> {
        match &self.command {
            ConfigSubcommand::Show => Self::show(config, format),
            ConfigSubcommand::Init => Self::init(),
        }
    }

    fn show(config: &Config, format: OutputFormat) -> CliResult<()> {
        match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(config)?);
            }
            OutputFormat::Table => {
                let categories = if config.board.categories.is_empty() {
                    "(from data)".to_string()
                } else {
                    config.board.categories.join(", ")
                };

                let mut table = Table::new();
                table
                    .load_preset(UTF8_FULL_CONDENSED)
                    .set_content_arrangement(ContentArrangement::Dynamic)
                    .set_header(["Setting", "Value"]);

                table.add_row(["source.base_url", config.source.base_url.as_str()]);
                table.add_row(["source.path", config.source.path.as_str()]);
                table.add_row(["source (resolved)", config.source.location().as_str()]);
                table.add_row(["board.show_risk", &config.board.show_risk.to_string()]);
                table.add_row(["board.categories", categories.as_str()]);
                table.add_row(["export.dir", &config.export.dir.display().to_string()]);
                table.add_row(["export file (fixed)", EXPORT_FILE_NAME]);

                println!("{table}");
            }
        }
        Ok(())
    }

    fn init() -> CliResult<()> {
        let text = toml::to_string_pretty(&Config::default())
            .map_err(|e| format!("Failed to serialize config: {e}"))?;
        print!("{text}");
        Ok(())
    }
}
