use crate::config::cli::{Command, QueryArgs};
use crate::config::Config;
use crate::domain::{Catalog, Storage};
use crate::error::Result;
use crate::services::controller::{Controller, ControllerEvent};
use crate::services::query::{QueryState, StatusFilter};
use crate::services::render::{format_count, format_number};
use crate::services::statistics::{describe, Statistics};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Ties the loaded catalog to the CLI commands.
pub struct GameService {
    config: Config,
    store: Box<dyn Storage>,
}

impl GameService {
    pub fn new(config: Config, store: Box<dyn Storage>) -> Self {
        Self { config, store }
    }

    pub fn run(&self) -> Result<()> {
        let catalog = self.store.load_games()?;
        info!("Loaded {} games", catalog.len());

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match &self.config.args.command {
            Command::Render(query) => self.render(&catalog, query),
            Command::Stats { json } => self.stats(&catalog, *json, &mut out),
            Command::Search(query) => self.search(&catalog, query, &mut out),
            Command::Browse => self.browse(&catalog, std::io::stdin().lock(), &mut out),
        }
    }

    pub fn render(&self, catalog: &Catalog, query: &QueryArgs) -> Result<()> {
        let controller = Controller::new(catalog, self.config.render.clone())
            .with_state(QueryState::new(&query.query, query.status));
        let view = controller.refresh();
        info!(
            "Rendering {} of {} games (status={})",
            view.visible.len(),
            catalog.len(),
            query.status
        );
        self.store.save_page(&view.html)?;

        let stats = controller.stats();
        let summary = stats.summary(describe(stats, &self.config.render.currency_symbol));
        self.store.save_summary(&summary)?;
        Ok(())
    }

    pub fn stats(&self, catalog: &Catalog, json: bool, out: &mut impl Write) -> Result<()> {
        let settings = &self.config.render;
        let stats = Statistics::compute(catalog.games(), settings.top_count);
        let description = describe(&stats, &settings.currency_symbol);

        if json {
            let summary = stats.summary(description);
            writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
            return Ok(());
        }

        writeln!(out, "Games:         {}", format_count(stats.game_count as u64))?;
        writeln!(out, "Backers:       {}", format_count(stats.total_backers))?;
        writeln!(
            out,
            "Pledged:       {}{}",
            settings.currency_symbol,
            format_number(stats.total_pledged)
        )?;
        writeln!(out, "Funded:        {}", stats.funded_count())?;
        writeln!(out, "Unfunded:      {}", stats.unfunded_count)?;
        for (rank, game) in stats.top.iter().enumerate() {
            writeln!(out, "Top #{}:        {}", rank + 1, game.name)?;
        }
        writeln!(out, "{}", description)?;
        Ok(())
    }

    pub fn search(&self, catalog: &Catalog, query: &QueryArgs, out: &mut impl Write) -> Result<()> {
        let state = QueryState::new(&query.query, query.status);
        let matches = state.apply(catalog.games());
        if matches.is_empty() {
            writeln!(out, "{}", crate::services::render::NO_RESULTS)?;
        }
        for game in matches {
            writeln!(out, "{} ({:.1}%)", game.name, game.funding_percentage())?;
        }
        Ok(())
    }

    /// Line-driven controller: `:all`, `:funded`, `:unfunded` switch the
    /// filter, `:q` quits, anything else is typed into the search box and
    /// committed. The page is rewritten after every change.
    pub fn browse(
        &self,
        catalog: &Catalog,
        input: impl BufRead,
        out: &mut impl Write,
    ) -> Result<()> {
        let mut controller = Controller::new(catalog, self.config.render.clone());
        self.store.save_page(&controller.refresh().html)?;

        for line in input.lines() {
            let line = line?;
            let events = match parse_browse_line(&line) {
                BrowseLine::Quit => break,
                BrowseLine::Events(events) => events,
                BrowseLine::Unknown(cmd) => {
                    warn!("Unknown browse command {:?}", cmd);
                    writeln!(out, "unknown command {cmd} (try :all, :funded, :unfunded, :q)")?;
                    continue;
                }
            };

            for event in events {
                if let Some(view) = controller.handle(event) {
                    self.store.save_page(&view.html)?;
                    let state = controller.state();
                    writeln!(
                        out,
                        "[{}] {:?}: {} match(es)",
                        state.status,
                        state.query,
                        view.visible.len()
                    )?;
                    for game in &view.visible {
                        writeln!(out, "  {}", game.name)?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
enum BrowseLine<'a> {
    Events(Vec<ControllerEvent>),
    Unknown(&'a str),
    Quit,
}

fn parse_browse_line(line: &str) -> BrowseLine<'_> {
    match line.strip_prefix(':') {
        Some("q") | Some("quit") => BrowseLine::Quit,
        Some(cmd) => match cmd.parse::<StatusFilter>() {
            Ok(status) => BrowseLine::Events(vec![ControllerEvent::Filter(status)]),
            Err(_) => BrowseLine::Unknown(cmd),
        },
        None => BrowseLine::Events(vec![
            ControllerEvent::Input(line.to_string()),
            ControllerEvent::Commit,
        ]),
    }
}
