//! CLI route: mode selection and run context. Dispatches to the session
//! driver; persistence brackets the run.

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::cli::parse::Cli;
use crate::config::ConfigLoader;
use crate::error::StorageError;
use crate::session::Session;
use crate::store::{JsonFileStore, TreeStore};

/// Runtime context for CLI execution: resolved storage backend and the
/// session holding the loaded tree.
pub struct RunContext {
    store: JsonFileStore,
    session: Session,
}

impl RunContext {
    /// Build the context from parsed CLI flags. Storage path precedence:
    /// `--storage` flag, then config file, then `storage.json`.
    pub fn new(cli: &Cli) -> Result<Self, StorageError> {
        let config = if let Some(ref path) = cli.config {
            ConfigLoader::load_from_file(path)?
        } else {
            ConfigLoader::load(Path::new("."))?
        };

        let storage_path = cli
            .storage
            .clone()
            .unwrap_or_else(|| config.storage.file.clone());
        let store = JsonFileStore::new(storage_path);
        let tree = store.load()?;
        info!(path = %store.path().display(), "tree loaded");

        Ok(Self {
            store,
            session: Session::new(tree),
        })
    }

    /// Select and run one input mode, then persist the tree. A batch-file
    /// read failure is reported and abandons the batch, but the terminal
    /// save still runs; only storage failures surface as errors.
    pub fn run<R: BufRead, W: Write>(
        mut self,
        cli: &Cli,
        input: R,
        output: &mut W,
    ) -> Result<(), StorageError> {
        if let Some(ref file) = cli.file {
            match fs::read_to_string(file) {
                Ok(contents) => self.session.run_script(&contents, output)?,
                Err(err) => {
                    warn!(path = %file.display(), %err, "failed to read command file");
                    writeln!(
                        output,
                        "Failed to read command file {}: {}",
                        file.display(),
                        err
                    )?;
                }
            }
        } else if !cli.command.is_empty() {
            self.session.run_single(&cli.command.join(" "), output)?;
        } else {
            self.session.run_interactive(input, output)?;
        }

        let tree = self.session.into_tree();
        self.store.save(&tree)?;
        Ok(())
    }
}
