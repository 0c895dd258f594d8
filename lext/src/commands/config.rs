//! `lext config`: show the effective configuration or write it to a file.

use std::path::PathBuf;

use tracing::info;

use super::traits::Command;
use crate::config::Config;
use crate::error::{LextError, Result};

#[derive(Debug, Clone)]
pub struct ConfigArgs {
    pub write: Option<PathBuf>,
    pub force: bool,
}

pub struct ConfigCommand {
    config: Config,
    write: Option<PathBuf>,
    force: bool,
}

impl Command for ConfigCommand {
    type Args = ConfigArgs;

    fn new(args: ConfigArgs, config: &Config) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
            write: args.write,
            force: args.force,
        })
    }

    fn run(&self) -> Result<()> {
        let Some(path) = &self.write else {
            print!("{}", self.config.to_toml()?);
            return Ok(());
        };

        if path.exists() && !self.force {
            return Err(LextError::Validation(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        self.config.save_to_path(path)?;
        info!("Wrote configuration to {}", path.display());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "config"
    }
}
