use super::{Catalog, Summary};
use crate::error::Result;

pub trait Storage {
    fn load_games(&self) -> Result<Catalog>;
    fn save_page(&self, html: &str) -> Result<()>;
    fn save_summary(&self, summary: &Summary) -> Result<()>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const PAGE: &'static str = "index.html";
    pub const SUMMARY: &'static str = "summary.json";
}
