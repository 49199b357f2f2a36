use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tipboard::TipBoard;
use tipboard::config::Config;
use tipboard::loader::{load_or_empty, source_for};
use tipboard_tui::event::{Event, next_event};
use tipboard_tui::views::TableView;
use tipboard_tui::{App, Tui, logging};

const TICK: Duration = Duration::from_millis(250);

#[derive(Parser, Debug)]
#[command(name = "tipboard-tui")]
#[command(about = "Interactive terminal board for browsing advisory tips")]
#[command(version)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tip data location (URL or file), overrides the configured source
    #[arg(short, long)]
    source: Option<String>,

    /// Use the layout with a risk column
    #[arg(long)]
    show_risk: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _logging = logging::init();

    let mut config = Config::load(args.config.as_deref())?;
    if args.show_risk {
        config.board.show_risk = true;
    }

    let location = args.source.unwrap_or_else(|| config.source.location());
    let source = source_for(&location)?;
    let tips = load_or_empty(source.as_ref()).await;

    let mut board = TipBoard::from_config(&config.board, TableView::new());
    board.load(tips);

    let mut app = App::new(board, source.describe(), config.export);
    let mut tui = Tui::new()?;
    tui.enter()?;

    let result = run(&mut tui, &mut app).await;

    tui.exit()?;
    result
}

async fn run(tui: &mut Tui, app: &mut App) -> anyhow::Result<()> {
    while !app.should_quit {
        tui.terminal().draw(|frame| app.render(frame))?;

        match next_event(TICK)? {
            Event::Key(key) => {
                if let Some(action) = app.handle_key(key) {
                    app.perform(action).await;
                }
            }
            Event::Resize(..) | Event::Tick => {}
        }
    }
    Ok(())
}
