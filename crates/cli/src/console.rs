//! Progress output
//!
//! Progress goes to stdout, unless stdout carries a machine-readable
//! document (`parse --json`, plugin mode); then it goes to stderr.

use colored::*;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, Copy)]
pub struct Console {
    stream: Stream,
    verbose: bool,
}

impl Console {
    pub fn stdout(verbose: bool) -> Self {
        Self {
            stream: Stream::Stdout,
            verbose,
        }
    }

    pub fn stderr(verbose: bool) -> Self {
        Self {
            stream: Stream::Stderr,
            verbose,
        }
    }

    pub fn stream(&self) -> Stream {
        self.stream
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// `→ message`
    pub fn step(&self, message: impl Display) {
        self.emit(format!("{} {}", "→".cyan(), message));
    }

    /// `✓ message`
    pub fn success(&self, message: impl Display) {
        self.emit(format!("{} {}", "✓".green(), message));
    }

    /// `✗ message`
    pub fn failure(&self, message: impl Display) {
        self.emit(format!("{} {}", "✗".red(), message));
    }

    /// Indented line, shown only with `--verbose`
    pub fn detail(&self, message: impl Display) {
        if self.verbose {
            self.emit(format!("  {}", message));
        }
    }

    fn emit(&self, line: String) {
        match self.stream {
            Stream::Stdout => println!("{}", line),
            Stream::Stderr => eprintln!("{}", line),
        }
    }
}
