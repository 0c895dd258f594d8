//! The shape every lext subcommand shares.

use crate::config::Config;
use crate::error::Result;

/// A subcommand: built from its parsed arguments plus the loaded
/// configuration, then run once.
pub trait Command: Sized {
    type Args;

    fn new(args: Self::Args, config: &Config) -> Result<Self>;

    fn run(&self) -> Result<()>;

    fn name(&self) -> &'static str;
}
