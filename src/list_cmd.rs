use crate::cli::ListArgs;
use ajo::output::{self, DirOutput, DirsOutput, OutputFormat, RecentListOutput, RecentOutput};
use ajo::{merge, session_history_or_empty, Autojump, RankSource, Settings};
use colored::*;
use std::error::Error;

fn format_of(args: &ListArgs) -> Result<OutputFormat, Box<dyn Error>> {
    match args.format.as_deref() {
        Some(fmt) => Ok(fmt.parse::<OutputFormat>()?),
        None => Ok(OutputFormat::Text),
    }
}

pub fn dirs(args: ListArgs, settings: &Settings) -> Result<(), Box<dyn Error>> {
    let format = format_of(&args)?;
    let source = Autojump::new(&settings.autojump_bin);

    let directories: Vec<DirOutput> = source
        .fetch_ranked_directories()
        .into_iter()
        .map(|d| DirOutput {
            exists: d.path.is_dir(),
            path: d.path,
            score: d.score,
        })
        .collect();

    match format {
        OutputFormat::Json => output::json::output_dirs(&DirsOutput { directories })?,
        OutputFormat::Text => {
            for dir in &directories {
                let score = format!("{:>8.1}", dir.score);
                let path = dir.path.display().to_string();
                if dir.exists {
                    println!("{} {}", score.green(), path);
                } else {
                    println!("{} {}", score.dimmed(), path.dimmed());
                }
            }
        }
    }

    Ok(())
}

pub fn list(args: ListArgs, settings: &Settings) -> Result<(), Box<dyn Error>> {
    let format = format_of(&args)?;
    let store = ajo::recent_store()?;
    let recent = store.load_or_empty(settings.max_recent_files);
    let history = settings
        .session_file
        .as_deref()
        .map(session_history_or_empty)
        .unwrap_or_default();

    let files: Vec<RecentOutput> = merge(recent.entries(), &history)
        .into_iter()
        .map(|path| RecentOutput {
            source: if recent.contains(&path) {
                "recent"
            } else {
                "session"
            },
            exists: path.exists(),
            path,
        })
        .collect();

    match format {
        OutputFormat::Json => output::json::output_recent(&RecentListOutput {
            max_recent_files: recent.max_entries(),
            files,
        })?,
        OutputFormat::Text => {
            for file in &files {
                let path = file.path.display().to_string();
                match (file.source, file.exists) {
                    (_, false) => println!("{}", path.dimmed()),
                    ("session", true) => println!("{} {}", path, "(session)".dimmed()),
                    _ => println!("{}", path),
                }
            }
        }
    }

    Ok(())
}
