use crate::config::cli::Args;
use crate::error::{GameError, Result};
use crate::services::statistics::DEFAULT_TOP_COUNT;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, Level};

pub mod cli;

/// Page presentation settings, loaded from the optional `--config` file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub title: String,
    pub currency_symbol: String,
    pub top_count: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            title: "Sea Monster Crowdfunding".to_string(),
            currency_symbol: "$".to_string(),
            top_count: DEFAULT_TOP_COUNT,
        }
    }
}

impl RenderSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let settings: RenderSettings = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        if settings.top_count == 0 {
            return Err(GameError::Other(format!(
                "{}: top_count must be at least 1",
                path.display()
            )));
        }
        Ok(settings)
    }
}

/// Parses a `--log-level` value; `None` when it names no tracing level.
pub fn parse_log_level(raw: &str) -> Option<Level> {
    raw.trim().parse::<Level>().ok()
}

pub struct Config {
    pub args: Args,
    pub render: RenderSettings,
}

impl Config {
    pub fn new(args: Args) -> Result<Self> {
        let render = match &args.config {
            Some(path) => {
                info!("Loading render settings from {:?}", path);
                RenderSettings::load(path)?
            }
            None => RenderSettings::default(),
        };

        Ok(Self { args, render })
    }
}
