//! Folder → file selection flows.
//!
//! `run_jump` walks `Idle → SelectingFolder → SelectingFile → Done`, and
//! `run_recent` goes straight from `Idle` to `SelectingFile`. Cancelling or
//! failing at any step lands back in `Idle`.

use crate::autojump::RankSource;
use crate::config::Settings;
use crate::filter::{list_files, ExclusionFilter};
use crate::history::{merge, session_history_or_empty};
use crate::opener::Opener;
use crate::picker::Picker;
use crate::recent::{RecentFiles, RecentStore, StoreError};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    SelectingFolder,
    SelectingFile { folder: Option<PathBuf> },
    Done(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    Opened(PathBuf),
    Cancelled,
}

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error(
        "autojump is not installed. Download and install it from https://github.com/joelthelion/autojump"
    )]
    ToolUnavailable,
    #[error("no entries found in the autojump database. Use `cd` to visit a directory first")]
    NoRankedDirectories,
    #[error("no recent files")]
    NoRecentFiles,
    #[error("folder {} does not exist", .0.display())]
    StaleFolder(PathBuf),
    #[error("file {} does not exist", .0.display())]
    StaleFile(PathBuf),
    #[error("{} is an empty folder", .0.display())]
    EmptyFolder(PathBuf),
    #[error("could not open {}: {}", .path.display(), .source)]
    Open { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Records `path` as just opened: front of the recent list (persisted) and,
/// when enabled, a visit to its folder in the rank source.
pub fn record_file(
    settings: &Settings,
    source: &dyn RankSource,
    store: &RecentStore,
    recent: &mut RecentFiles,
    path: &Path,
) -> Result<(), StoreError> {
    recent.record(path);
    store.save(recent)?;

    if settings.update_autojump_database {
        if let Some(parent) = path.parent() {
            source.record_visit(parent);
        }
    }

    Ok(())
}

pub struct SelectionFlow<'a> {
    settings: &'a Settings,
    source: &'a dyn RankSource,
    store: &'a RecentStore,
    picker: &'a mut dyn Picker,
    opener: &'a mut dyn Opener,
    recent: RecentFiles,
    state: FlowState,
}

impl<'a> SelectionFlow<'a> {
    pub fn new(
        settings: &'a Settings,
        source: &'a dyn RankSource,
        store: &'a RecentStore,
        picker: &'a mut dyn Picker,
        opener: &'a mut dyn Opener,
    ) -> Self {
        let recent = store.load_or_empty(settings.max_recent_files);
        SelectionFlow {
            settings,
            source,
            store,
            picker,
            opener,
            recent,
            state: FlowState::Idle,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn recent(&self) -> &RecentFiles {
        &self.recent
    }

    /// Ranked directories first, then folders of recent files.
    pub fn folder_candidates(&self) -> Vec<PathBuf> {
        let ranked: Vec<PathBuf> = self
            .source
            .fetch_ranked_directories()
            .into_iter()
            .map(|d| d.path)
            .collect();
        let recent_dirs: Vec<PathBuf> = self
            .recent
            .entries()
            .iter()
            .filter_map(|p| p.parent().map(Path::to_path_buf))
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        merge(&ranked, &recent_dirs)
    }

    /// The recent list, then anything extra from the session history.
    pub fn recent_candidates(&self) -> Vec<PathBuf> {
        let history = self
            .settings
            .session_file
            .as_deref()
            .map(session_history_or_empty)
            .unwrap_or_default();
        merge(self.recent.entries(), &history)
    }

    pub fn run_jump(&mut self) -> Result<FlowOutcome, FlowError> {
        let result = self.jump();
        self.settle(result)
    }

    pub fn run_recent(&mut self) -> Result<FlowOutcome, FlowError> {
        let result = self.pick_recent();
        self.settle(result)
    }

    fn settle(
        &mut self,
        result: Result<FlowOutcome, FlowError>,
    ) -> Result<FlowOutcome, FlowError> {
        match &result {
            Ok(FlowOutcome::Opened(path)) => self.state = FlowState::Done(path.clone()),
            _ => self.state = FlowState::Idle,
        }
        result
    }

    fn jump(&mut self) -> Result<FlowOutcome, FlowError> {
        if !self.source.is_available() {
            return Err(FlowError::ToolUnavailable);
        }

        let folders = self.folder_candidates();
        if folders.is_empty() {
            return Err(FlowError::NoRankedDirectories);
        }

        self.state = FlowState::SelectingFolder;
        let Some(folder) = self.choose("Folder", &folders) else {
            return Ok(FlowOutcome::Cancelled);
        };

        if !folder.is_dir() {
            self.forget_folder(&folder)?;
            return Err(FlowError::StaleFolder(folder));
        }

        let filter = ExclusionFilter::new(self.settings.exclude_filepath_filters.as_slice());
        let files = list_files(&folder, &filter);
        if files.is_empty() {
            return Err(FlowError::EmptyFolder(folder));
        }

        self.state = FlowState::SelectingFile {
            folder: Some(folder.clone()),
        };
        let Some(index) = self.picker.pick("File", &files) else {
            return Ok(FlowOutcome::Cancelled);
        };
        let Some(relative) = files.get(index) else {
            return Ok(FlowOutcome::Cancelled);
        };

        self.open(folder.join(relative))
    }

    fn pick_recent(&mut self) -> Result<FlowOutcome, FlowError> {
        let files = self.recent_candidates();
        if files.is_empty() {
            return Err(FlowError::NoRecentFiles);
        }

        self.state = FlowState::SelectingFile { folder: None };
        let Some(file) = self.choose("Recent file", &files) else {
            return Ok(FlowOutcome::Cancelled);
        };

        if !file.exists() {
            if self.recent.remove(&file) {
                self.store.save(&self.recent)?;
            }
            return Err(FlowError::StaleFile(file));
        }

        self.open(file)
    }

    fn choose(&mut self, prompt: &str, paths: &[PathBuf]) -> Option<PathBuf> {
        let labels: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
        let index = self.picker.pick(prompt, &labels)?;
        paths.get(index).cloned()
    }

    fn forget_folder(&mut self, folder: &Path) -> Result<(), StoreError> {
        if self.settings.update_autojump_database {
            self.source.purge_stale();
        }

        let stale: Vec<PathBuf> = self
            .recent
            .entries()
            .iter()
            .filter(|p| p.starts_with(folder))
            .cloned()
            .collect();
        if !stale.is_empty() {
            for path in &stale {
                self.recent.remove(path);
            }
            self.store.save(&self.recent)?;
        }

        Ok(())
    }

    fn open(&mut self, path: PathBuf) -> Result<FlowOutcome, FlowError> {
        log::debug!("opening {}", path.display());
        self.opener.open(&path).map_err(|source| FlowError::Open {
            path: path.clone(),
            source,
        })?;

        record_file(
            self.settings,
            self.source,
            self.store,
            &mut self.recent,
            &path,
        )?;

        Ok(FlowOutcome::Opened(path))
    }
}
