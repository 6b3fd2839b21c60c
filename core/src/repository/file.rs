use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::model::config::ShopConfig;
use crate::repository::traits::ConfigRepository;

const CONFIG_FILE_NAME: &str = "config.json";
const DATA_DIR_NAME: &str = ".barberbook";

/// Resolves (and creates) the data directory, `~/.barberbook` by default.
pub fn data_dir(base_dir: Option<PathBuf>) -> Result<PathBuf> {
    let path = match base_dir {
        Some(dir) => dir,
        None => {
            let home_dir = dirs::home_dir()
                .ok_or_else(|| anyhow!("Could not determine home directory"))?;
            home_dir.join(DATA_DIR_NAME)
        }
    };
    fs::create_dir_all(&path)
        .with_context(|| format!("Could not create data directory {}", path.display()))?;
    Ok(path)
}

#[derive(Clone)]
pub struct FileConfigRepository {
    file_path: PathBuf,
}

impl FileConfigRepository {
    /// Opens the config file, writing the built-in defaults on first run.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = data_dir(base_dir)?;
        path.push(CONFIG_FILE_NAME);

        let repo = FileConfigRepository { file_path: path };
        if !repo.file_path.exists() {
            tracing::info!(path = %repo.file_path.display(), "writing default shop config");
            repo.save(&ShopConfig::default())?;
        }
        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl ConfigRepository for FileConfigRepository {
    fn load(&self) -> Result<ShopConfig> {
        let file = File::open(&self.file_path)
            .with_context(|| format!("Could not open {}", self.file_path.display()))?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)
            .with_context(|| format!("Invalid config in {}", self.file_path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &ShopConfig) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, config)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::locale::Locale;

    #[test]
    fn test_first_run_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileConfigRepository::new(Some(dir.path().to_path_buf())).unwrap();

        assert!(repo.path().exists());
        assert_eq!(repo.load().unwrap(), ShopConfig::default());
    }

    #[test]
    fn test_existing_config_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{"shop_name": "Test Cuts", "locale": "en", "start_month": "2024-07"}"#,
        )
        .unwrap();

        let repo = FileConfigRepository::new(Some(dir.path().to_path_buf())).unwrap();
        let cfg = repo.load().unwrap();
        assert_eq!(cfg.shop_name, "Test Cuts");
        assert_eq!(cfg.locale, Locale::En);
        assert_eq!(cfg.start_month.as_deref(), Some("2024-07"));
    }

    #[test]
    fn test_broken_config_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();

        let repo = FileConfigRepository::new(Some(dir.path().to_path_buf())).unwrap();
        let err = repo.load().unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }
}
