//! Session driver: owns the tree and runs the three input modes.
//!
//! All modes are synchronous and single-threaded; one command runs to
//! completion before the next line is read. The driver is generic over its
//! reader and writer so tests run it against in-memory buffers.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::command::Command;
use crate::tree::Tree;

/// Usage banner shown when entering interactive mode.
pub const BANNER: &str = "Type your commands (CREATE, MOVE, DELETE, LIST) or EXIT to quit.";

/// Interactive prompt.
pub const PROMPT: &str = "> ";

/// Farewell printed when the interactive session ends.
pub const FAREWELL: &str = "Goodbye!";

const EXIT_KEYWORD: &str = "EXIT";

/// Owns the in-memory tree for the lifetime of one invocation.
pub struct Session {
    tree: Tree,
}

impl Session {
    pub fn new(tree: Tree) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Consume the session, handing the tree back for persistence.
    pub fn into_tree(self) -> Tree {
        self.tree
    }

    /// Parse and run one command line, returning its report. Parse failures
    /// become reports too; nothing here terminates the session.
    pub fn process_line(&mut self, line: &str) -> String {
        match Command::parse(line) {
            Ok(command) => {
                debug!(?command, "dispatching command");
                command.execute(&mut self.tree)
            }
            Err(err) => err.to_string(),
        }
    }

    /// Interactive mode: banner, then one prompted command per line until
    /// an EXIT line (case-insensitive) or end of input.
    pub fn run_interactive<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> io::Result<()> {
        info!("entering interactive mode");
        writeln!(output, "{BANNER}")?;
        write!(output, "{PROMPT}")?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case(EXIT_KEYWORD) {
                break;
            }
            emit(&self.process_line(trimmed), output)?;
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }

        writeln!(output, "{FAREWELL}")?;
        Ok(())
    }

    /// Batch mode over an already-read command file: blank lines are
    /// skipped, every executed line is echoed first.
    pub fn run_script<W: Write>(&mut self, contents: &str, output: &mut W) -> io::Result<()> {
        info!("executing command script");
        for line in contents.lines() {
            if line.trim().is_empty() {
                continue;
            }
            writeln!(output, "Executing: {line}")?;
            emit(&self.process_line(line.trim()), output)?;
        }
        Ok(())
    }

    /// Single-shot mode: one command line assembled from argv.
    pub fn run_single<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<()> {
        emit(&self.process_line(line.trim()), output)
    }
}

/// Write a report line, suppressing the line entirely for empty reports
/// (LIST of an empty tree prints nothing, not a blank line).
fn emit<W: Write>(report: &str, output: &mut W) -> io::Result<()> {
    if report.is_empty() {
        return Ok(());
    }
    writeln!(output, "{report}")
}
