//! `lext keywords`: list a grammar's reserved words, and optionally its
//! operators.

use lexis_lex::grammar::BuiltinGrammar;
use lexis_lex::GrammarKind;

use super::common::resolve_grammar;
use super::traits::Command;
use crate::config::Config;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct KeywordsArgs {
    pub grammar: Option<String>,
    pub operators: bool,
}

pub struct KeywordsCommand {
    grammar: GrammarKind,
    operators: bool,
}

impl Command for KeywordsCommand {
    type Args = KeywordsArgs;

    fn new(args: KeywordsArgs, config: &Config) -> Result<Self> {
        Ok(Self {
            grammar: resolve_grammar(args.grammar.as_deref(), config)?,
            operators: args.operators,
        })
    }

    fn run(&self) -> Result<()> {
        for word in listing(self.grammar.grammar(), self.operators) {
            println!("{}", word);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "keywords"
    }
}

/// Keywords in alphabetical order, or operators longest first.
fn listing(grammar: &BuiltinGrammar, operators: bool) -> Vec<&'static str> {
    if operators {
        grammar.operators.spellings().collect()
    } else {
        grammar.keywords.words()
    }
}
