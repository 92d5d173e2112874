use serde::{Deserialize, Serialize};

/// Percentage at which a campaign counts as fully funded.
pub const FULLY_FUNDED: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub name: String,
    pub description: String,
    #[serde(alias = "img")]
    pub image: String,
    pub backers: u64,
    pub goal: f64,
    pub pledged: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundingStatus {
    Funded,
    Unfunded,
}

impl Game {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        backers: u64,
        goal: f64,
        pledged: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image: image.into(),
            backers,
            goal,
            pledged,
        }
    }

    /// Pledged over goal as a percentage rounded to one decimal place.
    ///
    /// Not clamped: a campaign at twice its goal reports `200.0`. The
    /// catalog rejects non-positive goals at load time; a hand-built game
    /// with such a goal reports [`FULLY_FUNDED`] rather than a non-finite
    /// value.
    pub fn funding_percentage(&self) -> f64 {
        if self.goal <= 0.0 {
            return FULLY_FUNDED;
        }
        (self.pledged / self.goal * 1000.0).round() / 10.0
    }

    pub fn status(&self) -> FundingStatus {
        if self.pledged >= self.goal {
            FundingStatus::Funded
        } else {
            FundingStatus::Unfunded
        }
    }

    pub fn is_funded(&self) -> bool {
        self.status() == FundingStatus::Funded
    }

    /// Case-insensitive substring match against name and description.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(goal: f64, pledged: f64) -> Game {
        Game::new("Alpha", "A roguelike", "alpha.png", 10, goal, pledged)
    }

    #[test]
    fn percentage_rounds_to_one_decimal() {
        assert_eq!(game(100.0, 50.0).funding_percentage(), 50.0);
        assert_eq!(game(3.0, 1.0).funding_percentage(), 33.3);
        assert_eq!(game(3.0, 2.0).funding_percentage(), 66.7);
    }

    #[test]
    fn percentage_is_not_capped() {
        assert_eq!(game(100.0, 150.0).funding_percentage(), 150.0);
    }

    #[test]
    fn zero_goal_reports_fully_funded() {
        let g = game(0.0, 0.0);
        assert_eq!(g.funding_percentage(), FULLY_FUNDED);
        assert!(g.is_funded());
    }

    #[test]
    fn status_boundary_is_inclusive() {
        assert_eq!(game(100.0, 100.0).status(), FundingStatus::Funded);
        assert_eq!(game(100.0, 99.99).status(), FundingStatus::Unfunded);
    }

    #[test]
    fn matches_name_or_description() {
        let g = Game::new("Fairy Frenzy", "Collect WANDS fast", "", 1, 1.0, 0.0);
        assert!(g.matches("fairy"));
        assert!(g.matches("wands"));
        assert!(g.matches(""));
        assert!(!g.matches("dragon"));
    }

    #[test]
    fn accepts_img_alias() {
        let json = r#"{"name":"A","description":"d","img":"a.png","backers":1,"goal":10,"pledged":5}"#;
        let g: Game = serde_json::from_str(json).unwrap();
        assert_eq!(g.image, "a.png");
        assert_eq!(g.goal, 10.0);
    }
}
