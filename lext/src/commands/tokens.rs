//! `lext tokens`: print the token stream of each input file.

use std::fmt::Write as _;
use std::path::PathBuf;

use lexis_lex::{GrammarKind, Token, TokenValue};
use serde::Serialize;
use tracing::info;

use super::common::{
    build_pool, check_for_failures, lex_files, read_sources, resolve_format, resolve_grammar,
    LexedFile, OutputFormat,
};
use super::traits::Command;
use crate::config::Config;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct TokensArgs {
    pub input: Vec<PathBuf>,
    pub grammar: Option<String>,
    pub format: Option<String>,
    pub spans: bool,
    pub jobs: Option<usize>,
}

pub struct TokensCommand {
    input: Vec<PathBuf>,
    grammar: GrammarKind,
    format: OutputFormat,
    spans: bool,
    jobs: usize,
}

impl Command for TokensCommand {
    type Args = TokensArgs;

    fn new(args: TokensArgs, config: &Config) -> Result<Self> {
        Ok(Self {
            grammar: resolve_grammar(args.grammar.as_deref(), config)?,
            format: resolve_format(args.format.as_deref(), config)?,
            spans: args.spans || config.show_spans,
            jobs: args.jobs.unwrap_or(config.jobs),
            input: args.input,
        })
    }

    fn run(&self) -> Result<()> {
        info!(
            "Tokenising {} file(s) with the {} grammar",
            self.input.len(),
            self.grammar
        );

        let inputs = read_sources(&self.input)?;
        let pool = build_pool(self.jobs)?;
        let lexed = lex_files(inputs, self.grammar, &pool);

        let output = match self.format {
            OutputFormat::Text => self.render_text(&lexed)?,
            OutputFormat::Json => self.render_json(&lexed)?,
        };
        print!("{}", output);

        let failed = lexed.iter().filter(|file| !file.is_ok()).count();
        check_for_failures(failed, lexed.len())
    }

    fn name(&self) -> &'static str {
        "tokens"
    }
}

impl TokensCommand {
    fn render_text(&self, lexed: &[LexedFile]) -> Result<String> {
        let mut out = String::new();
        let with_headers = lexed.len() > 1;

        for (index, file) in lexed.iter().enumerate() {
            if with_headers {
                if index > 0 {
                    out.push('\n');
                }
                let _ = writeln!(out, "==> {} <==", file.path.display());
            }
            match &file.outcome {
                Ok(tokens) => {
                    for token in tokens {
                        out.push_str(&self.format_token(token));
                        out.push('\n');
                    }
                }
                Err(_) => {
                    if let Some(rendered) = file.render_error()? {
                        eprintln!("{}", rendered);
                    }
                }
            }
        }
        Ok(out)
    }

    fn format_token(&self, token: &Token) -> String {
        let mut line = String::new();
        if self.spans {
            let _ = write!(line, "{}:{}\t", token.span.line, token.span.column);
        }
        line.push_str(&token.kind.description());
        match &token.value {
            TokenValue::None => {}
            TokenValue::Int(v) => {
                let _ = write!(line, " {}", v);
            }
            TokenValue::Float(v) => {
                let _ = write!(line, " {:?}", v);
            }
            TokenValue::Text(s) => {
                let _ = write!(line, " {:?}", s);
            }
        }
        line
    }

    fn render_json(&self, lexed: &[LexedFile]) -> Result<String> {
        let reports: Vec<FileReport<'_>> = lexed
            .iter()
            .map(|file| FileReport::new(file, self.spans))
            .collect();
        let mut out = serde_json::to_string_pretty(&reports)?;
        out.push('\n');
        Ok(out)
    }
}

#[derive(Serialize)]
struct FileReport<'a> {
    file: String,
    tokens: Vec<TokenRecord<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorRecord>,
}

impl<'a> FileReport<'a> {
    fn new(file: &'a LexedFile, spans: bool) -> Self {
        let (tokens, error) = match &file.outcome {
            Ok(tokens) => (
                tokens.iter().map(|t| TokenRecord::new(t, spans)).collect(),
                None,
            ),
            Err(err) => (
                Vec::new(),
                Some(ErrorRecord {
                    code: err.code().to_string(),
                    message: err.to_string(),
                    line: err.span.line,
                    column: err.span.column,
                }),
            ),
        };
        Self {
            file: file.path.display().to_string(),
            tokens,
            error,
        }
    }
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<ValueRecord<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    span: Option<SpanRecord>,
}

impl<'a> TokenRecord<'a> {
    fn new(token: &'a Token, spans: bool) -> Self {
        let value = match &token.value {
            TokenValue::None => None,
            TokenValue::Int(v) => Some(ValueRecord::Int(*v)),
            TokenValue::Float(v) => Some(ValueRecord::Float(*v)),
            TokenValue::Text(s) => Some(ValueRecord::Text(s)),
        };
        let span = spans.then(|| SpanRecord {
            line: token.span.line,
            column: token.span.column,
            start: token.span.start,
            end: token.span.end,
        });
        Self {
            kind: token.kind.description(),
            value,
            span,
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum ValueRecord<'a> {
    Int(i64),
    Float(f64),
    Text(&'a str),
}

#[derive(Serialize)]
struct SpanRecord {
    line: u32,
    column: u32,
    start: usize,
    end: usize,
}

#[derive(Serialize)]
struct ErrorRecord {
    code: String,
    message: String,
    line: u32,
    column: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexis_lex::TokenType;
    use lexis_util::Span;

    fn command(spans: bool) -> TokensCommand {
        TokensCommand {
            input: Vec::new(),
            grammar: GrammarKind::Source,
            format: OutputFormat::Text,
            spans,
            jobs: 1,
        }
    }

    #[test]
    fn test_format_token_values() {
        let cmd = command(false);
        let int = Token {
            kind: TokenType::LITERAL_INT32,
            value: TokenValue::Int(42),
            span: Span::DUMMY,
        };
        assert_eq!(cmd.format_token(&int), "integer32 42");

        let text = Token {
            kind: TokenType::LITERAL_STRING,
            value: TokenValue::Text("a\"b".to_string()),
            span: Span::DUMMY,
        };
        assert_eq!(cmd.format_token(&text), "string literal \"a\\\"b\"");

        let op = Token {
            kind: TokenType::new("+="),
            value: TokenValue::None,
            span: Span::DUMMY,
        };
        assert_eq!(cmd.format_token(&op), "\"+=\"");
    }

    #[test]
    fn test_format_token_with_span() {
        let cmd = command(true);
        let token = Token {
            kind: TokenType::LITERAL_FLOAT64,
            value: TokenValue::Float(1.0),
            span: Span::new(4, 7, 2, 3),
        };
        assert_eq!(cmd.format_token(&token), "2:3\tfloat64 1.0");
    }

    #[test]
    fn test_json_report_shape() {
        let file = crate::commands::common::lex_file(
            PathBuf::from("a.src"),
            "x = \"hi\";".to_string(),
            GrammarKind::Source,
        );
        let json = command(false).render_json(std::slice::from_ref(&file)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let tokens = &value[0]["tokens"];
        assert_eq!(value[0]["file"], "a.src");
        assert_eq!(tokens[0]["kind"], "identifier");
        assert_eq!(tokens[0]["value"], "x");
        assert_eq!(tokens[2]["value"], "hi");
        assert!(tokens[1].get("value").is_none());
        assert!(tokens[0].get("span").is_none());
        assert!(value[0].get("error").is_none());
    }

    #[test]
    fn test_json_report_error() {
        let file = crate::commands::common::lex_file(
            PathBuf::from("b.src"),
            "a ` b".to_string(),
            GrammarKind::Source,
        );
        let json = command(true).render_json(std::slice::from_ref(&file)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["error"]["code"], "E1002");
        assert_eq!(value[0]["error"]["column"], 3);
    }
}
