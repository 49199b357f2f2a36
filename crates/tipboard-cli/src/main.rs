use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tipboard::config::Config;
use tipboard::loader::{load_or_empty, source_for};
use tipboard::render::HtmlView;
use tipboard::{Tip, TipBoard};
use tipboard_cli::commands::{ConfigCommand, ExportCommand, ListCommand, RenderCommand};
use tipboard_cli::error::CliResult;
use tipboard_cli::output::{HeadlessView, OutputFormat};

#[derive(Parser)]
#[command(name = "tipboard-cli")]
#[command(about = "Tipboard CLI - search, sort, render and export advisory tips")]
#[command(version)]
pub struct Cli {
    #[clap(long, short, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[clap(long, short = 'c', global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    #[clap(
        long,
        global = true,
        help = "Tip data location (URL or file), overrides the configured source"
    )]
    pub source: Option<String>,

    #[clap(long, global = true, help = "Use the layout with a risk column")]
    pub show_risk: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "List tips matching a query and filters")]
    List(ListCommand),

    #[clap(about = "Render the tip table as HTML")]
    Render(RenderCommand),

    #[clap(about = "Export all tips as JSON")]
    Export(ExportCommand),

    #[clap(about = "Configuration commands")]
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,tipboard=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn load_tips(config: &Config, source: Option<&str>) -> CliResult<Vec<Tip>> {
    let location = source
        .map(str::to_string)
        .unwrap_or_else(|| config.source.location());
    let source = source_for(&location)?;
    Ok(load_or_empty(source.as_ref()).await)
}

async fn run() -> CliResult<()> {
    init_logging();

    let cli = Cli::parse();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.show_risk {
        config.board.show_risk = true;
    }

    match &cli.command {
        Command::Config(cmd) => cmd.execute(&config, format).await,
        Command::List(cmd) => {
            let tips = load_tips(&config, cli.source.as_deref()).await?;
            let mut board = TipBoard::from_config(&config.board, HeadlessView);
            board.load(tips);
            cmd.execute(board, format).await
        }
        Command::Render(cmd) => {
            let tips = load_tips(&config, cli.source.as_deref()).await?;
            let mut board = TipBoard::from_config(&config.board, HtmlView::new());
            board.load(tips);
            cmd.execute(board, format).await
        }
        Command::Export(cmd) => {
            let tips = load_tips(&config, cli.source.as_deref()).await?;
            let mut board = TipBoard::from_config(&config.board, HeadlessView);
            board.load(tips);
            cmd.execute(board, &config.export, format).await
        }
    }
}
