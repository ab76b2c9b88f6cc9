use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

/// Where a picked file ends up.
pub trait Opener {
    fn open(&mut self, path: &Path) -> io::Result<()>;
}

/// Writes the path on its own line, for `$EDITOR "$(ajo jump)"`.
pub struct PrintOpener<W> {
    output: W,
}

impl<W: Write> PrintOpener<W> {
    pub fn new(output: W) -> Self {
        PrintOpener { output }
    }
}

impl<W: Write> Opener for PrintOpener<W> {
    fn open(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.output, "{}", path.display())?;
        self.output.flush()
    }
}

/// Runs an editor command (e.g. `code -w`) with the path appended. The command
/// is split with shell quoting rules, so `'/opt/My Editor/bin/ed' -w` works.
pub struct EditorOpener {
    program: String,
    args: Vec<String>,
}

impl EditorOpener {
    pub fn new(command: &str) -> Option<Self> {
        let mut words = shlex::split(command)?.into_iter();
        let program = words.next()?;
        Some(EditorOpener {
            program,
            args: words.collect(),
        })
    }
}

impl Opener for EditorOpener {
    fn open(&mut self, path: &Path) -> io::Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::Other,
                format!("{} exited with {}", self.program, status),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_opener() {
        let mut out = Vec::new();
        PrintOpener::new(&mut out)
            .open(Path::new("/tmp/a file.txt"))
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/tmp/a file.txt\n");
    }

    #[test]
    fn test_editor_command_split() {
        let opener = EditorOpener::new("code -w --reuse-window").unwrap();
        assert_eq!(opener.program, "code");
        assert_eq!(opener.args, vec!["-w", "--reuse-window"]);
        assert!(EditorOpener::new("   ").is_none());
    }

    #[test]
    fn test_editor_command_with_quoted_path() {
        let opener = EditorOpener::new("'/Applications/Sublime Text.app/subl' -w").unwrap();
        assert_eq!(opener.program, "/Applications/Sublime Text.app/subl");
        assert_eq!(opener.args, vec!["-w"]);

        let opener = EditorOpener::new(r#"vim -c "set nu""#).unwrap();
        assert_eq!(opener.args, vec!["-c", "set nu"]);

        assert!(EditorOpener::new("'/unterminated/path -w").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_editor_failure_is_an_error() {
        let mut opener = EditorOpener::new("false").unwrap();
        assert!(opener.open(Path::new("/tmp")).is_err());
        let mut opener = EditorOpener::new("true").unwrap();
        assert!(opener.open(Path::new("/tmp")).is_ok());
    }
}
