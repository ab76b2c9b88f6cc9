pub mod autojump;
pub mod config;
pub mod filter;
pub mod flow;
pub mod history;
pub mod opener;
pub mod output;
pub mod picker;
pub mod recent;

pub use autojump::{parse_stat_report, Autojump, RankSource, RankedDirectory};
pub use config::{load_config, Config, Settings};
pub use filter::{list_files, should_exclude, ExclusionFilter};
pub use flow::{record_file, FlowError, FlowOutcome, FlowState, SelectionFlow};
pub use history::{load_session_history, merge, session_history_or_empty, HistoryError};
pub use opener::{EditorOpener, Opener, PrintOpener};
pub use output::OutputFormat;
pub use picker::{Picker, TermPicker};
pub use recent::{RecentFiles, RecentStore, StoreError};

/// Recent-file store under the state directory (`$AJO_HOME` or `~/.ajo`).
pub fn recent_store() -> Result<RecentStore, Box<dyn std::error::Error>> {
    let dir = config::state_dir().ok_or("Could not determine home directory")?;
    Ok(RecentStore::in_dir(&dir))
}

/// Loads the layered configuration and fills in defaults.
pub fn load_settings() -> Settings {
    load_config().resolve()
}
