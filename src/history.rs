//! Reads the `"file_history": [...]` section of an editor session file and
//! merges it into other path lists.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

lazy_static! {
    static ref FILE_HISTORY: Regex = Regex::new(r#""file_history"\s*:\s*\["#).unwrap();
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("session file {} does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("could not read session file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed session file {}: {}", .path.display(), .reason)]
    Malformed { path: PathBuf, reason: String },
}

pub fn load_session_history(session_path: &Path) -> Result<Vec<PathBuf>, HistoryError> {
    if !session_path.exists() {
        return Err(HistoryError::NotFound(session_path.to_path_buf()));
    }

    let content = fs::read_to_string(session_path).map_err(|source| HistoryError::Io {
        path: session_path.to_path_buf(),
        source,
    })?;

    parse_file_history(&content).map_err(|reason| HistoryError::Malformed {
        path: session_path.to_path_buf(),
        reason,
    })
}

/// Like [`load_session_history`], but any failure means "no history".
pub fn session_history_or_empty(session_path: &Path) -> Vec<PathBuf> {
    match load_session_history(session_path) {
        Ok(files) => files,
        Err(e @ HistoryError::NotFound(_)) => {
            log::debug!("{}", e);
            Vec::new()
        }
        Err(e) => {
            log::warn!("ignoring session history: {}", e);
            Vec::new()
        }
    }
}

pub fn parse_file_history(content: &str) -> Result<Vec<PathBuf>, String> {
    let start = FILE_HISTORY
        .find(content)
        .ok_or_else(|| "no \"file_history\" list found".to_string())?
        .end();

    let inner = list_body(&content[start..])
        .ok_or_else(|| "unterminated \"file_history\" list".to_string())?;
    let inner = inner.trim_end();
    let inner = inner.strip_suffix(',').unwrap_or(inner);

    let entries: Vec<String> =
        serde_json::from_str(&format!("[{}]", inner)).map_err(|e| e.to_string())?;

    Ok(entries
        .into_iter()
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect())
}

/// Text between an already-consumed `[` and its matching `]`. Brackets inside
/// string literals do not count.
fn list_body(rest: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in rest.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '[' => depth += 1,
            ']' if depth == 0 => return Some(&rest[..i]),
            ']' => depth -= 1,
            _ => {}
        }
    }

    None
}

/// Appends the entries of `secondary` missing from `primary`, keeping
/// `primary`'s order.
pub fn merge<T>(primary: &[T], secondary: &[T]) -> Vec<T>
where
    T: Clone + Eq + std::hash::Hash,
{
    let mut seen: HashSet<&T> = primary.iter().collect();
    let mut merged = primary.to_vec();

    for entry in secondary {
        if seen.insert(entry) {
            merged.push(entry.clone());
        }
    }

    merged
}
