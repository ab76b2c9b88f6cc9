use crate::autojump::DEFAULT_PROGRAM;
use crate::recent::DEFAULT_MAX_RECENT_FILES;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "AJO_HOME";
pub const LOCAL_CONFIG: &str = ".ajo.toml";

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    pub update_autojump_database: Option<bool>,
    pub exclude_filepath_filters: Option<Vec<String>>,
    pub max_recent_files: Option<usize>,
    pub autojump_bin: Option<String>,
    pub session_file: Option<PathBuf>,
    pub editor: Option<String>,
    pub no_color: Option<bool>,
}

impl Config {
    pub fn merge(&mut self, other: Config) {
        if other.update_autojump_database.is_some() {
            self.update_autojump_database = other.update_autojump_database;
        }
        if other.exclude_filepath_filters.is_some() {
            self.exclude_filepath_filters = other.exclude_filepath_filters;
        }
        if other.max_recent_files.is_some() {
            self.max_recent_files = other.max_recent_files;
        }
        if other.autojump_bin.is_some() {
            self.autojump_bin = other.autojump_bin;
        }
        if other.session_file.is_some() {
            self.session_file = other.session_file;
        }
        if other.editor.is_some() {
            self.editor = other.editor;
        }
        if other.no_color.is_some() {
            self.no_color = other.no_color;
        }
    }

    pub fn resolve(self) -> Settings {
        Settings {
            update_autojump_database: self.update_autojump_database.unwrap_or(true),
            exclude_filepath_filters: self.exclude_filepath_filters.unwrap_or_default(),
            max_recent_files: self.max_recent_files.unwrap_or(DEFAULT_MAX_RECENT_FILES),
            autojump_bin: self
                .autojump_bin
                .unwrap_or_else(|| DEFAULT_PROGRAM.to_string()),
            session_file: self.session_file,
            editor: self.editor,
            no_color: self.no_color.unwrap_or(false),
        }
    }
}

/// Effective options for one invocation, with defaults filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub update_autojump_database: bool,
    pub exclude_filepath_filters: Vec<String>,
    pub max_recent_files: usize,
    pub autojump_bin: String,
    pub session_file: Option<PathBuf>,
    pub editor: Option<String>,
    pub no_color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Config::default().resolve()
    }
}

/// `$AJO_HOME`, or `~/.ajo`.
pub fn state_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    dirs::home_dir().map(|home| home.join(".ajo"))
}

fn read_config(path: &Path) -> Option<Config> {
    let content = fs::read_to_string(path).ok()?;
    match toml::from_str::<Config>(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("skipping malformed config {}: {}", path.display(), e);
            None
        }
    }
}

pub fn load_config() -> Config {
    let mut config = Config::default();

    // 1. Global config: $AJO_HOME/config.toml
    if let Some(dir) = state_dir() {
        if let Some(global_config) = read_config(&dir.join("config.toml")) {
            config.merge(global_config);
        }
    }

    // 2. Local config: ./.ajo.toml
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(local_config) = read_config(&cwd.join(LOCAL_CONFIG)) {
            config.merge(local_config);
        }
    }

    config
}
