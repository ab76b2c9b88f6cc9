use regex::Regex;
use std::path::Path;
use walkdir::WalkDir;

pub struct ExclusionFilter {
    patterns: Vec<Regex>,
}

impl ExclusionFilter {
    /// Compiles `patterns`. Invalid expressions are skipped with a warning.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let patterns = patterns
            .iter()
            .filter_map(|p| match Regex::new(p.as_ref()) {
                Ok(re) => Some(re),
                Err(e) => {
                    log::warn!("ignoring invalid exclude filter {:?}: {}", p.as_ref(), e);
                    None
                }
            })
            .collect();

        ExclusionFilter { patterns }
    }

    pub fn is_excluded(&self, relative_path: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(relative_path))
    }
}

pub fn should_exclude<S: AsRef<str>>(relative_path: &str, patterns: &[S]) -> bool {
    ExclusionFilter::new(patterns).is_excluded(relative_path)
}

/// Lists the files under `folder`, following symlinks, as sorted
/// `/`-separated paths relative to `folder`.
pub fn list_files(folder: &Path, filter: &ExclusionFilter) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(folder)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let relative = entry.path().strip_prefix(folder).ok()?;
            let parts: Vec<_> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect();
            Some(parts.join("/"))
        })
        .filter(|relative| !filter.is_excluded(relative))
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_should_exclude() {
        assert!(should_exclude("build/out.o", &["^build/"]));
        assert!(!should_exclude("src/main.c", &["^build/"]));
        assert!(should_exclude("src/.git/HEAD", &[r"\.git/"]));
        assert!(!should_exclude::<&str>("anything", &[]));
    }

    #[test]
    fn test_invalid_pattern_never_matches() {
        let filter = ExclusionFilter::new(&["(unclosed", r"\.o$"]);
        assert!(filter.is_excluded("main.o"));
        assert!(!filter.is_excluded("(unclosed"));
    }

    #[test]
    fn test_list_files_filters_and_sorts() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src/nested")).unwrap();
        fs::create_dir_all(root.join("build")).unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join("src/main.c"), "int main;").unwrap();
        fs::write(root.join("src/nested/util.c"), "").unwrap();
        fs::write(root.join("build/out.o"), "").unwrap();
        fs::write(root.join(".git/HEAD"), "").unwrap();
        fs::write(root.join("README"), "").unwrap();

        let filter = ExclusionFilter::new(&["^build/", r"^\.git/"]);
        let files = list_files(root, &filter);
        assert_eq!(files, vec!["README", "src/main.c", "src/nested/util.c"]);
    }

    #[test]
    fn test_list_files_empty_folder() {
        let dir = tempdir().unwrap();
        let filter = ExclusionFilter::new::<&str>(&[]);
        assert!(list_files(dir.path(), &filter).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_list_files_follows_symlinks() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        let root = dir.path().join("root");
        fs::create_dir_all(&target).unwrap();
        fs::create_dir_all(&root).unwrap();
        fs::write(target.join("linked.txt"), "").unwrap();
        std::os::unix::fs::symlink(&target, root.join("link")).unwrap();

        let files = list_files(&root, &ExclusionFilter::new::<&str>(&[]));
        assert_eq!(files, vec!["link/linked.txt"]);
    }
}
