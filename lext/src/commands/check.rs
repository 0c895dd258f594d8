//! `lext check`: report the first lexical error of each input file.

use std::path::PathBuf;

use lexis_lex::GrammarKind;
use tracing::{info, warn};

use super::common::{
    build_pool, check_for_failures, lex_files, output_messages, read_sources, resolve_grammar,
};
use super::traits::Command;
use crate::config::Config;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct CheckArgs {
    pub input: Vec<PathBuf>,
    pub grammar: Option<String>,
    pub jobs: Option<usize>,
}

pub struct CheckCommand {
    input: Vec<PathBuf>,
    grammar: GrammarKind,
    jobs: usize,
}

impl Command for CheckCommand {
    type Args = CheckArgs;

    fn new(args: CheckArgs, config: &Config) -> Result<Self> {
        Ok(Self {
            grammar: resolve_grammar(args.grammar.as_deref(), config)?,
            jobs: args.jobs.unwrap_or(config.jobs),
            input: args.input,
        })
    }

    fn run(&self) -> Result<()> {
        let inputs = read_sources(&self.input)?;
        let pool = build_pool(self.jobs)?;
        let lexed = lex_files(inputs, self.grammar, &pool);

        let mut failed = 0;
        for file in &lexed {
            if let Some(rendered) = file.render_error()? {
                warn!("{} has a lexical error", file.path.display());
                eprintln!("{}\n", rendered);
                failed += 1;
            }
        }

        if failed == 0 {
            info!("{} ({} file(s))", output_messages::ALL_CLEAN, lexed.len());
        }
        check_for_failures(failed, lexed.len())
    }

    fn name(&self) -> &'static str {
        "check"
    }
}
