use crate::domain::{Game, Summary, TopGame, Totals};

pub const DEFAULT_TOP_COUNT: usize = 2;

/// Aggregate numbers over a set of games.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics<'a> {
    pub total_backers: u64,
    pub total_pledged: f64,
    pub game_count: usize,
    pub unfunded_count: usize,
    /// Highest pledged first, at most `top_count` entries.
    pub top: Vec<&'a Game>,
}

impl<'a> Statistics<'a> {
    pub fn compute(games: &'a [Game], top_count: usize) -> Self {
        Self {
            total_backers: games.iter().map(|game| game.backers).sum(),
            total_pledged: games.iter().map(|game| game.pledged).sum(),
            game_count: games.len(),
            unfunded_count: games.iter().filter(|game| !game.is_funded()).count(),
            top: top_by_pledged(games, top_count),
        }
    }

    pub fn funded_count(&self) -> usize {
        self.game_count - self.unfunded_count
    }

    pub fn totals(&self) -> Totals {
        Totals {
            total_backers: self.total_backers,
            total_pledged: self.total_pledged,
            game_count: self.game_count,
            funded_count: self.funded_count(),
            unfunded_count: self.unfunded_count,
        }
    }

    pub fn summary(&self, description: String) -> Summary {
        let top_games = self.top.iter().map(|game| TopGame::from(*game)).collect();
        Summary::new(self.totals(), top_games, description)
    }
}

/// The `n` games with the largest pledged amount, leaving `games` untouched.
/// Equal amounts keep their encounter order.
pub fn top_by_pledged(games: &[Game], n: usize) -> Vec<&Game> {
    let mut ranked: Vec<&Game> = games.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.pledged.total_cmp(&a.pledged));
    ranked.truncate(n);
    ranked
}

/// The sentence shown under the page header.
pub fn describe(stats: &Statistics<'_>, currency_symbol: &str) -> String {
    let remain = if stats.unfunded_count == 1 {
        "game remains"
    } else {
        "games remain"
    };
    format!(
        "A total of {}{} has been raised for {} games. Currently, {} {} unfunded. \
         We need your help to fund these amazing games!",
        currency_symbol,
        crate::services::render::format_number(stats.total_pledged),
        stats.game_count,
        stats.unfunded_count,
        remain,
    )
}
