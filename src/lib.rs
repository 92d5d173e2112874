//! Crowdfunding page generator: loads a catalog of game campaigns,
//! computes funding statistics, filters by search text and funding status,
//! and renders the result as a static HTML page.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod services;

pub use config::{Config, RenderSettings};
pub use domain::{Catalog, FundingStatus, Game, Storage, Summary};
pub use error::{GameError, Result};
pub use services::controller::{Controller, ControllerEvent, View};
pub use services::query::{apply, QueryState, StatusFilter};
pub use services::statistics::Statistics;
