use std::{
    env::{self, VarError},
    fs::{self, File},
    io::{BufReader, ErrorKind},
    path::{Path, PathBuf},
    time::Duration,
};

use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};

use crate::{debounce::SEARCH_DEBOUNCE, error::Error, history::ForwardHistory};

const APP_NAME: &str = "Songstagram";
const CONFIG_FILENAME: &str = "config.json";
const DEBOUNCE_ENV_VAR: &str = "SONGSTAGRAM_DEBOUNCE_MS";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search_debounce_ms: u64,
    pub forward_history: ForwardHistory,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_debounce_ms: SEARCH_DEBOUNCE.as_millis() as u64,
            forward_history: ForwardHistory::default(),
        }
    }
}

impl Config {
    fn app_dirs() -> Option<AppDirs> {
        const USE_XDG_ON_MACOS: bool = false;

        AppDirs::new(Some(APP_NAME), USE_XDG_ON_MACOS)
    }

    pub fn config_dir() -> Option<PathBuf> {
        Self::app_dirs().map(|dirs| dirs.config_dir)
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILENAME))
    }

    /// Loads the config from the platform config dir. On first run the
    /// defaults are written there so they can be edited.
    pub fn load() -> Result<Config, Error> {
        let path = Self::config_path().ok_or(Error::ConfigDirUnavailable)?;
        Self::load_or_init(&path)
    }

    pub fn load_or_init(path: &Path) -> Result<Config, Error> {
        if let Some(config) = Self::load_from(path)? {
            return Ok(config);
        }
        let config = Config::default();
        log::info!("writing default config: {:?}", path);
        if let Err(err) = config.save_to(path) {
            log::warn!("failed to write default config: {}", err);
        }
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Option<Config>, Error> {
        match File::open(path) {
            Ok(file) => {
                log::info!("loading config: {:?}", path);
                Ok(Some(serde_json::from_reader(BufReader::new(file))?))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Error> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Debounce window for the search box, `SONGSTAGRAM_DEBOUNCE_MS` wins over
    /// the stored value.
    pub fn search_debounce(&self) -> Duration {
        let millis = match env::var(DEBOUNCE_ENV_VAR) {
            Ok(value) => value.trim().parse().unwrap_or_else(|_| {
                log::warn!("ignoring invalid {}: {:?}", DEBOUNCE_ENV_VAR, value);
                self.search_debounce_ms
            }),
            Err(VarError::NotPresent) => self.search_debounce_ms,
            Err(VarError::NotUnicode(_)) => {
                log::error!("{} is not a valid unicode", DEBOUNCE_ENV_VAR);
                self.search_debounce_ms
            }
        };
        Duration::from_millis(millis)
    }
}
