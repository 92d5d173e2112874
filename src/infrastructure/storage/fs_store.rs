use crate::domain::storage::{Storage, StorageKeys};
use crate::domain::{Catalog, Summary};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Clone)]
pub struct FileSystemStore {
    games_file: PathBuf,
    output_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(games_file: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            games_file: games_file.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn output_path(&self, key: &str) -> PathBuf {
        self.output_dir.join(key)
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    fn write_output(&self, key: &str, content: &str) -> Result<()> {
        self.ensure_dir(&self.output_dir)?;
        let path = self.output_path(key);
        fs::write(&path, content)?;
        info!("Wrote {:?}", path);
        Ok(())
    }
}

impl Storage for FileSystemStore {
    fn load_games(&self) -> Result<Catalog> {
        info!("Reading games from {:?}", self.games_file);
        let content = fs::read_to_string(&self.games_file)?;
        Catalog::from_json(&content)
    }

    fn save_page(&self, html: &str) -> Result<()> {
        self.write_output(StorageKeys::PAGE, html)
    }

    fn save_summary(&self, summary: &Summary) -> Result<()> {
        let content = serde_json::to_string_pretty(summary)?;
        self.write_output(StorageKeys::SUMMARY, &content)
    }
}
