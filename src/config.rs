use crate::error::{CarouselOcrError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_LANG: &str = "por";

const LANG_ENV: &str = "CAROUSEL_OCR_LANG";
const TESSERACT_ENV: &str = "TESSERACT_CMD";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tesseract language code
    pub lang: String,
    /// Tesseract executable (name on PATH or full path)
    pub tesseract_cmd: String,
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub download_timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.into(),
            tesseract_cmd: "tesseract".into(),
            host: "0.0.0.0".into(),
            port: 8000,
            max_upload_bytes: 20 * 1024 * 1024,
            download_timeout_seconds: 60,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/124.0 Safari/537.36"
                .into(),
        }
    }
}

impl Config {
    /// Load from the config file (defaults when absent), then apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let config = Self::load_from(&Self::config_path()?)?;
        Ok(config.with_env_overrides())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CarouselOcrError::Config("diretório home não encontrado".into()))?;
        Ok(home.join(".config").join("carousel-ocr").join("config.json"))
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(lang) = std::env::var(LANG_ENV) {
            if !lang.trim().is_empty() {
                self.lang = lang;
            }
        }
        if let Ok(cmd) = std::env::var(TESSERACT_ENV) {
            if !cmd.trim().is_empty() {
                self.tesseract_cmd = cmd;
            }
        }
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
