use crate::cli::PathArgs;
use ajo::{record_file, Autojump, Settings};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

pub fn record(args: PathArgs, settings: &Settings) -> Result<(), Box<dyn Error>> {
    let path = absolute(Path::new(&args.file))?;
    let source = Autojump::new(&settings.autojump_bin);
    let store = ajo::recent_store()?;
    let mut recent = store.load_or_empty(settings.max_recent_files);

    record_file(settings, &source, &store, &mut recent, &path)?;
    log::debug!("recorded {}", path.display());

    Ok(())
}

pub fn forget(args: PathArgs, settings: &Settings) -> Result<(), Box<dyn Error>> {
    let raw = PathBuf::from(&args.file);
    let path = absolute(&raw)?;
    let store = ajo::recent_store()?;
    let mut recent = store.load_or_empty(settings.max_recent_files);

    if recent.remove(&path) || recent.remove(&raw) {
        store.save(&recent)?;
        println!("Removed {}", path.display());
    } else {
        println!("{} is not in the recent list", path.display());
    }

    Ok(())
}

fn absolute(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if let Ok(canonical) = fs::canonicalize(path) {
        return Ok(canonical);
    }
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}
