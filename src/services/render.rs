//! HTML rendering for the crowdfunding page.
//!
//! Everything here is a pure function of its inputs; writing the result to
//! disk is left to [`crate::domain::Storage`].

use crate::config::RenderSettings;
use crate::domain::{Game, FULLY_FUNDED};
use crate::services::query::{QueryState, StatusFilter};
use crate::services::statistics::{describe, Statistics};
use std::fmt::Write;

const RED: &str = "#d91c1c";
const YELLOW: &str = "#ffef0a";
const DARK_GREEN: &str = "#42ad00";
const BRIGHT_GREEN: &str = "#00ff15";

pub const NO_RESULTS: &str = "No games found";
pub const MISSING_TOP_GAME: &str = "Not enough games yet";

/// Display data for a single game card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView<'a> {
    pub game: &'a Game,
    pub percentage: f64,
}

impl<'a> CardView<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self {
            game,
            percentage: game.funding_percentage(),
        }
    }

    /// Progress fill width, capped so the bar never overflows.
    pub fn bar_width(&self) -> f64 {
        self.percentage.min(FULLY_FUNDED)
    }

    pub fn bar_color(&self) -> &'static str {
        bar_color(self.percentage, self.fully_funded())
    }

    /// Same rule as the funded filter: pledged has reached the goal.
    pub fn fully_funded(&self) -> bool {
        self.game.is_funded()
    }
}

pub fn bar_color(percentage: f64, funded: bool) -> &'static str {
    if funded {
        BRIGHT_GREEN
    } else if percentage <= 30.0 {
        RED
    } else if percentage <= 60.0 {
        YELLOW
    } else {
        DARK_GREEN
    }
}

/// en-US grouping with up to three fraction digits, trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    let abs = value.abs();
    let mut whole = abs.trunc();
    let mut frac = ((abs - whole) * 1000.0).round();
    if frac >= 1000.0 {
        whole += 1.0;
        frac = 0.0;
    }

    let mut out = String::new();
    if value < 0.0 && (whole > 0.0 || frac > 0.0) {
        out.push('-');
    }
    out.push_str(&group_digits(&format!("{whole:.0}")));
    if frac > 0.0 {
        let digits = format!("{:03}", frac as u32);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

pub fn format_count(value: u64) -> String {
    group_digits(&value.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn render_card(card: &CardView<'_>) -> String {
    let game = card.game;
    let class = if card.fully_funded() {
        "game-card funded"
    } else {
        "game-card"
    };
    format!(
        r#"<div class="{class}">
  <div class="game-info">
    <img class="game-img" src="{image}" alt="{name}" />
    <h3>{name}</h3>
    <p>{description}</p>
    <p class="backers">Backers: {backers}</p>
  </div>
  <div class="progress-status">
    <div class="progress-bar">
      <div class="progress-fill" style="width: {width:.1}%; background-color: {color}"></div>
    </div>
    <div class="progress-label">{percentage:.1}%</div>
  </div>
</div>
"#,
        image = escape_html(&game.image),
        name = escape_html(&game.name),
        description = escape_html(&game.description),
        backers = format_count(game.backers),
        width = card.bar_width(),
        color = card.bar_color(),
        percentage = card.percentage,
    )
}

/// Card markup for `games`, or the empty-result placeholder.
pub fn render_cards(games: &[&Game]) -> String {
    if games.is_empty() {
        return format!(r#"<p class="no-results">{NO_RESULTS}</p>"#);
    }
    games
        .iter()
        .map(|game| render_card(&CardView::new(game)))
        .collect()
}

fn filter_label(filter: StatusFilter) -> &'static str {
    match filter {
        StatusFilter::All => "Show All Games",
        StatusFilter::Funded => "Show Funded Only",
        StatusFilter::Unfunded => "Show Unfunded Only",
    }
}

pub fn render_filters(active: StatusFilter) -> String {
    let mut out = String::new();
    for filter in StatusFilter::ALL {
        let class = if filter == active {
            "filter-btn active"
        } else {
            "filter-btn"
        };
        let _ = writeln!(
            out,
            r#"<button id="{id}-btn" class="{class}" type="button">{label}</button>"#,
            id = filter.as_str(),
            label = filter_label(filter),
        );
    }
    out
}

fn top_slot(rank: usize) -> (String, String) {
    match rank {
        0 => ("first-game".to_string(), "Top Funded Game".to_string()),
        1 => ("second-game".to_string(), "Runner Up".to_string()),
        n => (format!("top-game-{}", n + 1), format!("Rank {}", n + 1)),
    }
}

pub fn render_top_games(top: &[&Game], slots: usize) -> String {
    let mut out = String::new();
    for rank in 0..slots {
        let (id, heading) = top_slot(rank);
        let body = match top.get(rank) {
            Some(game) => format!("<p>{}</p>", escape_html(&game.name)),
            None => format!(r#"<p class="placeholder">{MISSING_TOP_GAME}</p>"#),
        };
        let _ = writeln!(
            out,
            r#"<div id="{id}" class="top-game"><h2>{heading}</h2>{body}</div>"#
        );
    }
    out
}

/// Full page for the given catalog statistics and visible subset.
pub fn render_page(
    settings: &RenderSettings,
    stats: &Statistics<'_>,
    state: &QueryState,
    visible: &[&Game],
) -> String {
    let title = escape_html(&settings.title);
    let currency = escape_html(&settings.currency_symbol);
    format!(
        r####"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <meta content="width=device-width, initial-scale=1.0" name="viewport"/>
  <title>{title}</title>
  <style>
    .stats-container {{ display: flex; gap: 1rem; }}
    .games-container {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1rem; }}
    .game-img {{ width: 100%; }}
    .progress-bar {{ background-color: #ddd; width: 100%; height: 5px; border-radius: 5px; }}
    .progress-fill {{ height: 5px; border-radius: 5px; }}
    .filter-btn.active {{ font-weight: bold; }}
  </style>
</head>
<body>
  <header><h1>{title}</h1></header>
  <section class="stats-container">
    <div class="stats-card"><h2>Individual Contributions</h2><p id="num-contributions">{backers}</p></div>
    <div class="stats-card"><h2>Total Raised</h2><p id="total-raised">{currency}{pledged}</p></div>
    <div class="stats-card"><h2>Games Available</h2><p id="num-games">{count}</p></div>
  </section>
  <section id="description-container"><p>{description}</p></section>
  <section class="top-games">
{top}  </section>
  <section class="controls">
    <input id="search" type="text" placeholder="Search games..." value="{query}"/>
{filters}  </section>
  <section id="games-container" class="games-container">
{cards}
  </section>
</body>
</html>
"####,
        backers = format_count(stats.total_backers),
        pledged = format_number(stats.total_pledged),
        count = format_count(stats.game_count as u64),
        description = escape_html(&describe(stats, &settings.currency_symbol)),
        top = render_top_games(&stats.top, settings.top_count),
        query = escape_html(&state.query),
        filters = render_filters(state.status),
        cards = render_cards(visible),
    )
}
