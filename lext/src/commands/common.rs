//! Shared types and helpers for lext commands.

use std::path::{Path, PathBuf};

use lexis_lex::{tokenise, GrammarKind, LexError, Token};
use lexis_util::SourceMap;
use rayon::prelude::*;
use rayon::ThreadPool;

use crate::config::Config;
use crate::error::{LextError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// How `lext tokens` prints its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Case-insensitive; `None` for anything unrecognised.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// The `--format` flag if given, otherwise the configured format.
pub fn resolve_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat> {
    let name = flag.unwrap_or(&config.format);
    OutputFormat::parse(name).ok_or_else(|| {
        LextError::Validation(format!(
            "{}: '{}'",
            error_messages::UNKNOWN_FORMAT,
            name
        ))
    })
}

/// The `--grammar` flag if given, otherwise the configured grammar.
pub fn resolve_grammar(flag: Option<&str>, config: &Config) -> Result<GrammarKind> {
    flag.unwrap_or(&config.grammar)
        .parse::<GrammarKind>()
        .map_err(|e| LextError::Validation(e.to_string()))
}

// ============================================================================
// Tokenising files
// ============================================================================

/// One input file after tokenising.
///
/// Each file gets its own [`SourceMap`] so files can be processed on
/// different threads with nothing shared between them.
pub struct LexedFile {
    pub path: PathBuf,
    pub sources: SourceMap,
    pub outcome: std::result::Result<Vec<Token>, LexError>,
}

impl LexedFile {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The lexical error rendered with its source line, if there was one.
    pub fn render_error(&self) -> Result<Option<String>> {
        match &self.outcome {
            Ok(_) => Ok(None),
            Err(err) => Ok(Some(err.to_diagnostic().render(&self.sources)?)),
        }
    }
}

/// Read every input up front so a missing file fails the whole command
/// before any output is written.
pub fn read_sources(paths: &[PathBuf]) -> Result<Vec<(PathBuf, String)>> {
    paths
        .iter()
        .map(|path| Ok((path.clone(), read_source(path)?)))
        .collect()
}

pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(LextError::FileOperation(format!(
            "{}: {}",
            error_messages::INPUT_NOT_FOUND,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(LextError::FileOperation(format!(
            "{}: {}",
            error_messages::INPUT_NOT_A_FILE,
            path.display()
        )));
    }
    std::fs::read_to_string(path).map_err(|e| {
        LextError::FileOperation(format!(
            "{} {}: {}",
            error_messages::READ_FAILED,
            path.display(),
            e
        ))
    })
}

pub fn build_pool(jobs: usize) -> Result<ThreadPool> {
    if jobs == 0 {
        return Err(LextError::Validation(error_messages::ZERO_JOBS.to_string()));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| LextError::Config(format!("{}: {}", error_messages::POOL_FAILED, e)))
}

/// Tokenise every file on `pool`. Results come back in input order.
pub fn lex_files(
    inputs: Vec<(PathBuf, String)>,
    grammar: GrammarKind,
    pool: &ThreadPool,
) -> Vec<LexedFile> {
    if inputs.len() <= 1 || pool.current_num_threads() == 1 {
        return inputs
            .into_iter()
            .map(|(path, source)| lex_file(path, source, grammar))
            .collect();
    }

    pool.install(|| {
        inputs
            .into_par_iter()
            .map(|(path, source)| lex_file(path, source, grammar))
            .collect()
    })
}

pub fn lex_file(path: PathBuf, source: String, grammar: GrammarKind) -> LexedFile {
    let mut sources = SourceMap::new();
    let file_id = sources.add_file(path.display().to_string(), source.as_str());
    let outcome = tokenise(&source, file_id, grammar.grammar());

    match &outcome {
        Ok(tokens) => tracing::debug!("{}: {} tokens", path.display(), tokens.len()),
        Err(err) => tracing::debug!("{}: {}", path.display(), err),
    }

    LexedFile {
        path,
        sources,
        outcome,
    }
}

/// Fail with a summary if any file had a lexical error.
pub fn check_for_failures(failed: usize, total: usize) -> Result<()> {
    if failed > 0 {
        return Err(LextError::CommandExecution(format!(
            "{} of {} {}",
            failed,
            total,
            error_messages::FILES_FAILED
        )));
    }
    Ok(())
}

// ============================================================================
// Messages
// ============================================================================

pub mod error_messages {
    pub const INPUT_NOT_FOUND: &str = "Input file does not exist";
    pub const INPUT_NOT_A_FILE: &str = "Input path is not a file";
    pub const READ_FAILED: &str = "Failed to read";
    pub const UNKNOWN_FORMAT: &str = "Unknown output format (expected 'text' or 'json')";
    pub const ZERO_JOBS: &str = "Number of jobs must be at least 1";
    pub const POOL_FAILED: &str = "Failed to start worker threads";
    pub const FILES_FAILED: &str = "file(s) had lexical errors";
}

pub mod output_messages {
    pub const ALL_CLEAN: &str = "No lexical errors found";
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("xml"), None);
    }

    #[test]
    fn test_flag_overrides_config() {
        let config = Config::default();
        assert_eq!(resolve_grammar(Some("ir"), &config).unwrap(), GrammarKind::Ir);
        assert_eq!(resolve_grammar(None, &config).unwrap(), GrammarKind::Source);
        assert_eq!(resolve_format(Some("json"), &config).unwrap(), OutputFormat::Json);
        assert_eq!(resolve_format(None, &config).unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_bad_names_are_validation_errors() {
        let config = Config::default();
        assert!(matches!(
            resolve_grammar(Some("cobol"), &config),
            Err(LextError::Validation(_))
        ));
        assert!(matches!(
            resolve_format(Some("xml"), &config),
            Err(LextError::Validation(_))
        ));
    }

    #[test]
    fn test_read_missing_source() {
        let result = read_source(Path::new("/nonexistent/input.src"));
        assert!(matches!(result, Err(LextError::FileOperation(_))));
    }

    #[test]
    fn test_read_directory_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_source(temp_dir.path());
        assert!(matches!(result, Err(LextError::FileOperation(_))));
    }

    #[test]
    fn test_zero_jobs_rejected() {
        assert!(matches!(build_pool(0), Err(LextError::Validation(_))));
    }

    #[test]
    fn test_lex_files_keeps_input_order() {
        let inputs: Vec<_> = (0..16)
            .map(|i| (PathBuf::from(format!("f{}.src", i)), format!("x{} = {};", i, i)))
            .collect();
        let pool = build_pool(4).unwrap();

        let lexed = lex_files(inputs, GrammarKind::Source, &pool);
        assert_eq!(lexed.len(), 16);
        for (i, file) in lexed.iter().enumerate() {
            assert_eq!(file.path, PathBuf::from(format!("f{}.src", i)));
            let tokens = file.outcome.as_ref().unwrap();
            assert_eq!(tokens[2].int_value(), Some(i as i64));
        }
    }

    #[test]
    fn test_render_error_names_file() {
        let file = lex_file(PathBuf::from("bad.src"), "x = 0777;".to_string(), GrammarKind::Source);
        assert!(!file.is_ok());
        let rendered = file.render_error().unwrap().unwrap();
        assert!(rendered.contains("octal"));
        assert!(rendered.contains("bad.src:1:5"));
    }

    #[test]
    fn test_check_for_failures() {
        assert!(check_for_failures(0, 3).is_ok());
        let err = check_for_failures(2, 3).unwrap_err();
        assert!(err.to_string().contains("2 of 3"));
    }
}
