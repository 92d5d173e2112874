use crate::domain::game::Game;
use crate::error::{GameError, Result};
use tracing::debug;

/// The games for one session, in source order. Never mutated after load.
#[derive(Debug, Clone)]
pub struct Catalog {
    games: Vec<Game>,
}

impl Catalog {
    pub fn new(games: Vec<Game>) -> Result<Self> {
        for game in &games {
            validate(game)?;
        }
        debug!("Catalog built with {} games", games.len());
        Ok(Self { games })
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let games: Vec<Game> = serde_json::from_str(content)?;
        Self::new(games)
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

fn validate(game: &Game) -> Result<()> {
    let invalid = |reason: &str| GameError::InvalidGame {
        name: game.name.clone(),
        reason: reason.to_string(),
    };

    if !game.goal.is_finite() || game.goal <= 0.0 {
        return Err(invalid("goal must be a positive number"));
    }
    if !game.pledged.is_finite() || game.pledged < 0.0 {
        return Err(invalid("pledged must be a non-negative number"));
    }
    Ok(())
}
