//! Command language: parse one line of text, run it against a tree.
//!
//! Definitions and dispatch only; reading lines and choosing input modes
//! belongs to the session driver.

use crate::error::{CommandError, StoreError};
use crate::tree::Tree;

/// A parsed command, ready to run against a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create { path: String },
    Move { source: String, dest: String },
    Delete { path: String },
    List,
}

impl Command {
    /// Parse one command line: whitespace-split tokens, case-insensitive
    /// keyword, strict argument arity. An empty line parses as an unknown
    /// command.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().unwrap_or("");
        let args: Vec<&str> = tokens.collect();

        match keyword.to_ascii_uppercase().as_str() {
            "CREATE" => match args.as_slice() {
                [path] => Ok(Command::Create {
                    path: (*path).to_string(),
                }),
                _ => Err(CommandError::Malformed {
                    usage: "CREATE <path>",
                }),
            },
            "MOVE" => match args.as_slice() {
                [source, dest] => Ok(Command::Move {
                    source: (*source).to_string(),
                    dest: (*dest).to_string(),
                }),
                _ => Err(CommandError::Malformed {
                    usage: "MOVE <sourcePath> <destPath>",
                }),
            },
            "DELETE" => match args.as_slice() {
                [path] => Ok(Command::Delete {
                    path: (*path).to_string(),
                }),
                _ => Err(CommandError::Malformed {
                    usage: "DELETE <path>",
                }),
            },
            "LIST" => {
                if args.is_empty() {
                    Ok(Command::List)
                } else {
                    Err(CommandError::Malformed { usage: "LIST" })
                }
            }
            _ => Err(CommandError::Unknown),
        }
    }

    /// Run against `tree`, returning the report text. Multi-line for LIST,
    /// empty for LIST of an empty tree. Failures come back as report text
    /// too; they never terminate the session.
    pub fn execute(&self, tree: &mut Tree) -> String {
        match self {
            Command::Create { path } => {
                tree.create(path);
                format!("Created: {path}")
            }
            Command::Move { source, dest } => match tree.move_node(source, dest) {
                Ok(()) => format!("Moved {source} to {dest}"),
                Err(StoreError::NotFound { path, .. }) => {
                    format!("Cannot move: {path} does not exist")
                }
            },
            Command::Delete { path } => match tree.delete(path) {
                Ok(()) => format!("Deleted: {path}"),
                Err(StoreError::NotFound { segment, .. }) => {
                    format!("Cannot delete {path} - {segment} does not exist")
                }
            },
            Command::List => tree.list().join("\n"),
        }
    }
}
