use crate::services::query::StatusFilter;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the JSON file holding the game records
    #[arg(long, env = "GAMEFUND_GAMES_FILE", default_value = "data/games.json")]
    pub games_file: PathBuf,

    /// Directory the rendered page and summary are written to
    #[arg(long, default_value = "public")]
    pub output_dir: PathBuf,

    /// Optional JSON file with page title, currency symbol and top count
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write index.html and summary.json for the given search state
    Render(QueryArgs),
    /// Print aggregate statistics
    Stats {
        /// Print the summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the names of matching games
    Search(QueryArgs),
    /// Read search text and filter commands from stdin, re-rendering on each change
    Browse,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Case-insensitive text matched against name and description
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Funding status filter
    #[arg(short, long, value_enum, default_value_t = StatusFilter::All)]
    pub status: StatusFilter,
}
