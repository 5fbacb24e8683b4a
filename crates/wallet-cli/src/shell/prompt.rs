//! Line input sources for the menu shell.
//!
//! On a terminal prompts go through `dialoguer`; anywhere else (pipes,
//! redirected files, tests) a plain line reader is used so sessions can be
//! scripted.

use std::io::{self, BufRead, Write};

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

/// Source of user input for the shell.
pub trait Prompter {
    /// Ask for one line of input. `Ok(None)` means input has ended.
    fn input(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Wait for the user before the menu is redrawn.
    fn pause(&mut self) -> io::Result<()>;
}

/// Interactive prompts on the controlling terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn read(&self, prompt: &str, report: bool) -> io::Result<Option<String>> {
        let result = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .report(report)
            .interact_text();
        match result {
            Ok(value) => Ok(Some(value)),
            Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::UnexpectedEof => {
                Ok(None)
            }
            Err(err) => Err(io::Error::other(err.to_string())),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.read(prompt, true)
    }

    fn pause(&mut self) -> io::Result<()> {
        self.read("Press Enter to return to the menu", false)
            .map(|_| ())
    }
}

/// Line-oriented prompts over any reader, echoing prompts to `out`.
pub struct LinePrompter<R, W> {
    reader: R,
    out: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn input(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}: ", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(&line);
        Ok(Some(trimmed.to_string()))
    }

    /// Scripted input has nobody to wait for.
    fn pause(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_line_prompter_reads_lines() {
        let mut out = Vec::new();
        let mut prompter = LinePrompter::new(Cursor::new("2024-04-10\r\n  Rent \n"), &mut out);

        assert_eq!(
            prompter.input("Date").unwrap().as_deref(),
            Some("2024-04-10")
        );
        assert_eq!(
            prompter.input("Description").unwrap().as_deref(),
            Some("  Rent ")
        );
        assert_eq!(prompter.input("Choice").unwrap(), None);
        drop(prompter);

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Date: Description: Choice: "
        );
    }

    #[test]
    fn test_line_prompter_empty_line_is_not_eof() {
        let mut prompter = LinePrompter::new(Cursor::new("\n"), io::sink());
        assert_eq!(prompter.input("Date").unwrap().as_deref(), Some(""));
        assert_eq!(prompter.input("Date").unwrap(), None);
    }

    #[test]
    fn test_line_prompter_last_line_without_newline() {
        let mut prompter = LinePrompter::new(Cursor::new("5"), io::sink());
        assert_eq!(prompter.input("Choice").unwrap().as_deref(), Some("5"));
    }
}
