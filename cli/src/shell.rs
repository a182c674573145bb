//! Interactive loop: reads one command per line until `exit` or end of input.

use std::io::{self, BufRead, IsTerminal, Write};

use clap::Parser;
use colored::*;
use libra_common::config::Config;
use libra_core::Library;
use tracing::{debug, error};

use crate::commands::{self, Flow, ShellLine};
use crate::terminal::colors;

const PROMPT: &str = "libra> ";

pub fn run(library: &mut Library, cfg: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let interactive: bool = stdin.is_terminal();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            let mut stdout = io::stdout();
            write!(stdout, "{}", PROMPT.color(colors::ACCENT).bold())?;
            stdout.flush()?;
        }

        let Some(line) = lines.next() else {
            debug!("end of input");
            break;
        };
        let line: String = line?;

        let words: Vec<String> = match split_line(&line) {
            Ok(words) => words,
            Err(reason) => {
                error!("{reason}");
                continue;
            }
        };
        if words.is_empty() {
            continue;
        }

        let parsed: ShellLine = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(err) => {
                err.print()?;
                continue;
            }
        };

        match commands::dispatch(parsed.command, library, cfg) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => error!("{err}"),
        }
    }

    Ok(())
}

/// Splits a line on whitespace, keeping double-quoted runs together.
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quoted {
        return Err(String::from("unterminated quote"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_words() {
        assert_eq!(
            split_line("  borrow 1   2 ").unwrap(),
            vec!["borrow", "1", "2"]
        );
        assert!(split_line("   ").unwrap().is_empty());
    }

    #[test]
    fn test_split_keeps_quoted_text_together() {
        let words = split_line(r#"book add "The Left Hand of Darkness" "Ursula K. Le Guin" 1969 X scifi"#)
            .unwrap();
        assert_eq!(words.len(), 7);
        assert_eq!(words[2], "The Left Hand of Darkness");
        assert_eq!(words[3], "Ursula K. Le Guin");
    }

    #[test]
    fn test_split_empty_quotes_give_empty_word() {
        assert_eq!(split_line(r#"find """#).unwrap(), vec!["find", ""]);
    }

    #[test]
    fn test_split_rejects_unterminated_quote() {
        assert!(split_line(r#"book find "dune"#).is_err());
    }
}
