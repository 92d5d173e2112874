mod catalog;
mod game;
pub(crate) mod storage;
mod summary;

pub use catalog::Catalog;
pub use game::{FundingStatus, Game, FULLY_FUNDED};
pub use storage::Storage;
pub use summary::{Summary, TopGame, Totals};
