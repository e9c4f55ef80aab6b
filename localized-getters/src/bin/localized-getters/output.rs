use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::{Color, Colorize};

/// Status lines on stderr, so stdout only ever carries generated code.
pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    pub fn new(quiet: bool, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { quiet }
    }

    pub fn success(&self, message: &str) {
        self.status("✓", Color::Green, message);
    }

    pub fn info(&self, message: &str) {
        self.status("•", Color::Blue, message);
    }

    pub fn warning(&self, message: &str) {
        self.status("!", Color::Yellow, message);
    }

    /// Errors are shown even in quiet mode.
    pub fn error(&self, message: &str) {
        eprintln!("{} {message}", "Error:".color(Color::Red).bold());
    }

    fn status(&self, icon: &str, color: Color, message: &str) {
        if !self.quiet {
            eprintln!("{} {message}", icon.color(color).bold());
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

/// Write `content` to `path` unless the file already holds exactly that.
pub fn write_if_changed(path: &Path, content: &str) -> Result<WriteOutcome> {
    if fs::read_to_string(path).is_ok_and(|existing| existing == content) {
        return Ok(WriteOutcome::Unchanged);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(WriteOutcome::Written)
}
