pub mod json;

use serde::Serialize;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid format: {}. Use text or json", s)),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct DirOutput {
    pub path: PathBuf,
    pub score: f64,
    pub exists: bool,
}

#[derive(Serialize, Debug)]
pub struct DirsOutput {
    pub directories: Vec<DirOutput>,
}

#[derive(Serialize, Debug, Clone)]
pub struct RecentOutput {
    pub path: PathBuf,
    /// `recent` for tracked files, `session` for session-history additions.
    pub source: &'static str,
    pub exists: bool,
}

#[derive(Serialize, Debug)]
pub struct RecentListOutput {
    pub max_recent_files: usize,
    pub files: Vec<RecentOutput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
