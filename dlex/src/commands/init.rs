//! Init command implementation.
//!
//! Writes a starter `dlex.toml` holding the default settings and an
//! example keyword mapping.

use std::path::{Path, PathBuf};

use crate::commands::common::error_messages;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{DlexError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to write the configuration into (default: current directory).
    pub path: Option<PathBuf>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Create a new InitCommand.
    pub fn new(args: InitArgs) -> Self {
        Self { args }
    }

    /// Execute the command, returning the path of the written file.
    pub fn run(&self) -> Result<PathBuf> {
        let dir = self.args.path.clone().unwrap_or_else(|| PathBuf::from("."));
        let target = self.validate_target(&dir)?;

        Self::starter_config().save_to_path(&target)?;

        if self.args.verbose {
            tracing::info!(path = %target.display(), "created configuration");
        }
        Ok(target)
    }

    fn validate_target(&self, dir: &Path) -> Result<PathBuf> {
        if dir.exists() && !dir.is_dir() {
            return Err(DlexError::Validation(format!(
                "{} {}",
                error_messages::TARGET_NOT_DIR,
                dir.display()
            )));
        }

        let target = dir.join(CONFIG_FILE_NAME);
        if target.exists() && !self.args.force {
            return Err(DlexError::Validation(format!(
                "{} {}",
                error_messages::CONFIG_EXISTS,
                target.display()
            )));
        }
        Ok(target)
    }

    /// Defaults plus the `pos`/`neg` spellings of the sign operators.
    fn starter_config() -> Config {
        let mut config = Config::default();
        config.keywords.insert("pos".to_string(), "POS".to_string());
        config.keywords.insert("neg".to_string(), "NEG".to_string());
        config
    }
}

/// Run the init command.
pub fn run_init(args: InitArgs) -> Result<()> {
    let path = InitCommand::new(args).run()?;
    println!("Created {}", path.display());
    Ok(())
}
