use clap::Args;
use tipboard::{BoardView, TipBoard, TipField};

use crate::error::CliResult;

#[derive(Args, Debug, Clone, Default)]
pub struct SortArgs {
    #[clap(
        long,
        short,
        help = "Sort by column (topic, category, risk, description, actions, resources)"
    )]
    pub sort: Option<String>,

    #[clap(long, requires = "sort", help = "Sort descending instead of ascending")]
    pub desc: bool,
}

impl SortArgs {
    /// Sort the board the way header clicks would: once for ascending,
    /// twice for descending
    pub fn apply<V: BoardView>(&self, board: &mut TipBoard<V>) -> CliResult<()> {
        let Some(ref name) = self.sort else {
            return Ok(());
        };

        let field = TipField::parse(name).ok_or_else(|| {
            format!(
                "Unknown column: {name}. \
                 Use topic, category, risk, description, actions, or resources."
            )
        })?;

        if !board.sort_by_field(field) {
            return Err(format!(
                "Column '{}' is not part of this layout (risk needs --show-risk)",
                field.as_str()
            )
            .into());
        }
        if self.desc {
            board.sort_by_field(field);
        }
        Ok(())
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct BoardArgs {
    #[clap(long, short, help = "Free-text search across every field")]
    pub query: Option<String>,

    #[clap(long, help = "Only tips in this category (case-insensitive)")]
    pub category: Option<String>,

    #[clap(long, help = "Only tips with this risk level (needs --show-risk)")]
    pub risk: Option<String>,

    #[clap(flatten)]
    pub sort: SortArgs,
}

impl BoardArgs {
    /// Apply sort, then query and filters, to a loaded board
    pub fn apply<V: BoardView>(&self, board: &mut TipBoard<V>) -> CliResult<()> {
        self.sort.apply(board)?;

        if let Some(ref query) = self.query {
            board.set_query(query.clone());
        }
        if let Some(ref category) = self.category {
            board.set_category(Some(category.clone()));
        }
        if let Some(ref risk) = self.risk {
            if !board.layout().has_risk() {
                return Err("--risk needs the risk layout (--show-risk or board.show_risk)".into());
            }
            board.set_risk(Some(risk.clone()));
        }
        Ok(())
    }
}
