use crate::cli::InitArgs;
use std::fs;
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = r#"# Record folders of opened and saved files in the autojump database.
update_autojump_database = true

# Number of files kept in the recent list.
max_recent_files = 30

# Regular expressions matched against paths relative to the picked folder.
# Matching files are hidden from the file list.
exclude_filepath_filters = [
    # Version control
    '(^|/)\.git/',
    '(^|/)\.hg/',
    '(^|/)\.svn/',

    # Build output
    '(^|/)target/',
    '(^|/)build/',
    '(^|/)dist/',
    '(^|/)node_modules/',
    '(^|/)__pycache__/',

    # Compiled and editor files
    '\.(o|a|so|pyc|class)$',
    '\.sw[po]$',
    '~$',
    '(^|/)\.DS_Store$',
]

# autojump_bin = "autojump"
# editor = "code -w"
# session_file = "/home/me/.config/sublime-text/Local/Session.sublime_session"
"#;

pub fn run(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = if args.global {
        let dir = ajo::config::state_dir().ok_or("Could not determine home directory")?;
        fs::create_dir_all(&dir)?;
        dir.join("config.toml")
    } else {
        PathBuf::from(ajo::config::LOCAL_CONFIG)
    };

    if path.exists() && !args.force {
        return Err(format!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        )
        .into());
    }

    fs::write(&path, DEFAULT_CONFIG)?;

    let location = if args.global { "global" } else { "local" };
    println!("Created {} config at {}", location, path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: ajo::Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        let filters = config.exclude_filepath_filters.unwrap();
        assert!(ajo::should_exclude(".git/HEAD", filters.as_slice()));
        assert!(ajo::should_exclude("app/build/out.o", filters.as_slice()));
        assert!(!ajo::should_exclude("src/main.rs", filters.as_slice()));
        assert_eq!(config.max_recent_files, Some(30));
    }
}
