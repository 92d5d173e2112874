use crate::domain::game::Game;
use chrono::Local;
use serde::{Deserialize, Serialize};

/// Snapshot of the catalog statistics written next to the rendered page.
#[derive(Debug, Serialize, Deserialize)]
pub struct Summary {
    #[serde(flatten)]
    pub totals: Totals,
    pub top_games: Vec<TopGame>,
    pub description: String,
    pub generated_at: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub total_backers: u64,
    pub total_pledged: f64,
    pub game_count: usize,
    pub funded_count: usize,
    pub unfunded_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopGame {
    pub name: String,
    pub pledged: f64,
    pub funding_percentage: f64,
}

impl From<&Game> for TopGame {
    fn from(game: &Game) -> Self {
        Self {
            name: game.name.clone(),
            pledged: game.pledged,
            funding_percentage: game.funding_percentage(),
        }
    }
}

impl Summary {
    pub fn new(totals: Totals, top_games: Vec<TopGame>, description: String) -> Self {
        Self {
            totals,
            top_games,
            description,
            generated_at: Local::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
