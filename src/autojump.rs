use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub const DEFAULT_PROGRAM: &str = "autojump";

lazy_static! {
    static ref SCORE_LINE: Regex = Regex::new(r"^\s*(\d+(?:\.\d+)?):\s*(.+?)\s*$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedDirectory {
    pub path: PathBuf,
    pub score: f64,
}

/// Source of ranked directories. Every operation is best-effort: failures are
/// reported as `false` or an empty list, never as an error.
pub trait RankSource {
    fn is_available(&self) -> bool;
    fn fetch_ranked_directories(&self) -> Vec<RankedDirectory>;
    fn record_visit(&self, path: &Path);
    fn purge_stale(&self);
}

/// Runs the autojump binary directly, without a shell.
#[derive(Debug, Clone)]
pub struct Autojump {
    program: PathBuf,
}

impl Default for Autojump {
    fn default() -> Self {
        Autojump::new(DEFAULT_PROGRAM)
    }
}

impl Autojump {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Autojump {
            program: program.into(),
        }
    }

    fn run<I, S>(&self, args: I) -> Option<Output>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        // Blocks until the tool exits; there is no timeout.
        match Command::new(&self.program).args(args).output() {
            Ok(output) if output.status.success() => Some(output),
            Ok(output) => {
                log::debug!(
                    "{} exited with {}: {}",
                    self.program.display(),
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                );
                None
            }
            Err(e) => {
                log::debug!("could not run {}: {}", self.program.display(), e);
                None
            }
        }
    }
}

impl RankSource for Autojump {
    fn is_available(&self) -> bool {
        self.run(std::iter::empty::<&str>()).is_some()
    }

    fn fetch_ranked_directories(&self) -> Vec<RankedDirectory> {
        let Some(output) = self.run(["--stat"]) else {
            return Vec::new();
        };

        let mut report = String::from_utf8_lossy(&output.stdout).into_owned();
        report.push_str(&String::from_utf8_lossy(&output.stderr));

        let dirs = parse_stat_report(&report);
        log::debug!("autojump reported {} directories", dirs.len());
        dirs
    }

    fn record_visit(&self, path: &Path) {
        if path.as_os_str().is_empty() {
            return;
        }
        let args = [OsStr::new("-a"), path.as_os_str()];
        if self.run(args).is_none() {
            log::debug!("failed to record visit to {}", path.display());
        }
    }

    fn purge_stale(&self) {
        if self.run(["--purge"]).is_none() {
            log::debug!("autojump --purge failed");
        }
    }
}

fn is_banner(line: &str) -> bool {
    let line = line.trim();
    line.len() >= 2 && line.chars().all(|c| c == '_')
}

/// Parses `autojump --stat` output. Only lines above the first underscore
/// banner are considered; the result is most relevant first.
pub fn parse_stat_report(report: &str) -> Vec<RankedDirectory> {
    let mut dirs: Vec<RankedDirectory> = report
        .lines()
        .take_while(|line| !is_banner(line))
        .filter_map(|line| {
            let caps = SCORE_LINE.captures(line)?;
            let score = caps[1].parse().ok()?;
            Some(RankedDirectory {
                path: PathBuf::from(&caps[2]),
                score,
            })
        })
        .collect();

    dirs.reverse();
    dirs
}
