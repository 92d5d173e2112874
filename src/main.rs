use clap::Parser;
use gamefund::config::cli::Args;
use gamefund::config::parse_log_level;
use gamefund::error::Result;
use gamefund::infrastructure::FileSystemStore;
use gamefund::services::game_service::GameService;
use gamefund::Config;
use tracing::{info, warn, Level};

fn main() -> Result<()> {
    let args = Args::parse();

    let level = parse_log_level(&args.log_level);
    tracing_subscriber::fmt()
        .with_max_level(level.unwrap_or(Level::INFO))
        .with_writer(std::io::stderr)
        .init();
    if level.is_none() {
        warn!("Unknown log level {:?}, using info", args.log_level);
    }

    let store = FileSystemStore::new(args.games_file.clone(), args.output_dir.clone());
    let config = Config::new(args)?;

    let service = GameService::new(config, Box::new(store));
    service.run()?;

    info!("Done");
    Ok(())
}
