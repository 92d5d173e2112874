use crate::domain::Game;
use crate::error::{GameError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Funded,
    Unfunded,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [Self::All, Self::Funded, Self::Unfunded];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Funded => "funded",
            Self::Unfunded => "unfunded",
        }
    }

    pub fn admits(&self, game: &Game) -> bool {
        match self {
            Self::All => true,
            Self::Funded => game.is_funded(),
            Self::Unfunded => !game.is_funded(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "funded" => Ok(Self::Funded),
            "unfunded" => Ok(Self::Unfunded),
            _ => Err(GameError::InvalidFilter(s.to_string())),
        }
    }
}

/// Current search text and funding filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub query: String,
    pub status: StatusFilter,
}

impl QueryState {
    pub fn new(query: &str, status: StatusFilter) -> Self {
        Self {
            query: query.to_lowercase(),
            status,
        }
    }

    pub fn apply<'a>(&self, games: &'a [Game]) -> Vec<&'a Game> {
        apply(games, &self.query, self.status)
    }
}

/// Games passing `status` whose name or description contains `query`,
/// ignoring case. Input order is preserved.
pub fn apply<'a>(games: &'a [Game], query: &str, status: StatusFilter) -> Vec<&'a Game> {
    let needle = query.to_lowercase();
    games
        .iter()
        .filter(|game| status.admits(game))
        .filter(|game| game.matches(&needle))
        .collect()
}
