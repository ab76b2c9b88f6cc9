use colored::*;
use std::io::{self, BufRead, Write};

/// A quick-selection prompt: shows labelled items and returns the index of
/// the one chosen, or `None` when the user dismisses it.
pub trait Picker {
    fn pick(&mut self, prompt: &str, items: &[String]) -> Option<usize>;
}

/// Numbered-list prompt on a terminal. Typing a number picks that item,
/// other text narrows the list, an empty line or EOF cancels.
pub struct TermPicker<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl TermPicker<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio(color: bool) -> Self {
        TermPicker::new(io::stdin().lock(), io::stderr(), color)
    }
}

impl<R: BufRead, W: Write> TermPicker<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        TermPicker {
            input,
            output,
            color,
        }
    }

    fn show(&mut self, prompt: &str, items: &[String], visible: &[usize]) -> io::Result<()> {
        let heading = if self.color {
            prompt.bold().to_string()
        } else {
            prompt.to_string()
        };
        writeln!(self.output, "{}", heading)?;

        for (n, &index) in visible.iter().enumerate() {
            let number = format!("{:>3}", n + 1);
            let number = if self.color {
                number.cyan().to_string()
            } else {
                number
            };
            writeln!(self.output, "{} {}", number, items[index])?;
        }

        write!(self.output, "> ")?;
        self.output.flush()
    }

    fn read_answer(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                log::debug!("failed to read selection: {}", e);
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Picker for TermPicker<R, W> {
    fn pick(&mut self, prompt: &str, items: &[String]) -> Option<usize> {
        let mut visible: Vec<usize> = (0..items.len()).collect();

        loop {
            if let Err(e) = self.show(prompt, items, &visible) {
                log::debug!("failed to draw prompt: {}", e);
                return None;
            }

            let answer = self.read_answer()?;
            if answer.is_empty() || answer == "q" {
                return None;
            }

            if let Ok(n) = answer.parse::<usize>() {
                if n >= 1 && n <= visible.len() {
                    return Some(visible[n - 1]);
                }
                let _ = writeln!(self.output, "no item {}", n);
                continue;
            }

            let needle = answer.to_lowercase();
            let narrowed: Vec<usize> = visible
                .iter()
                .copied()
                .filter(|&i| items[i].to_lowercase().contains(&needle))
                .collect();

            match narrowed.len() {
                0 => {
                    let _ = writeln!(self.output, "nothing matches {:?}", answer);
                }
                1 => return Some(narrowed[0]),
                _ => visible = narrowed,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<String> {
        ["src/main.rs", "src/lib.rs", "README.md"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn pick_with(input: &str) -> (Option<usize>, String) {
        let mut out = Vec::new();
        let picked = TermPicker::new(input.as_bytes(), &mut out, false).pick("Pick", &items());
        (picked, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_pick_by_number() {
        let (picked, out) = pick_with("2\n");
        assert_eq!(picked, Some(1));
        assert!(out.contains("  1 src/main.rs"));
        assert!(out.contains("  3 README.md"));
    }

    #[test]
    fn test_cancel() {
        assert_eq!(pick_with("\n").0, None);
        assert_eq!(pick_with("q\n").0, None);
        assert_eq!(pick_with("").0, None);
    }

    #[test]
    fn test_out_of_range_reprompts() {
        let (picked, out) = pick_with("9\n3\n");
        assert_eq!(picked, Some(2));
        assert!(out.contains("no item 9"));
    }

    #[test]
    fn test_narrowing() {
        assert_eq!(pick_with("readme\n").0, Some(2));

        // "src" leaves two items, renumbered from 1.
        let (picked, _) = pick_with("src\n2\n");
        assert_eq!(picked, Some(1));

        let (picked, out) = pick_with("zzz\n\n");
        assert_eq!(picked, None);
        assert!(out.contains("nothing matches"));
    }
}
