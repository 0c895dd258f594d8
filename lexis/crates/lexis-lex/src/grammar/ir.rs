//! The intermediate-representation dialect.
//!
//! Locals are written `$name` and block labels `@name`, so both sigils may
//! start an identifier.

use std::sync::LazyLock;

use super::table::{BuiltinGrammar, CharClasses, KeywordTable, OperatorTable, Policies};
use crate::unicode::{is_ascii_ident_body, is_ascii_letter};

const KEYWORDS: &[&str] = &[
    "processor", "graph", "namespace", "function", "block", "let", "var",
    "branch", "branch_if", "return", "write", "advance", "input", "output",
    "event", "stream", "value", "connection", "struct", "external", "true",
    "false", "void", "bool", "int32", "int64", "float32", "float64", "string",
    "fixed", "wrap", "clamp", "cast", "call", "read", "state", "node",
];

const OPERATORS: &[&str] = &[
    ";", ",", ".", "(", ")", "{", "}", "[", "]", "<", ">", "=", "->", ":",
    "::", "?", "+", "-", "*", "/", "%", "&", "|", "^", "!", "~", "<<", ">>",
    ">>>", "==", "!=", "<=", ">=", "&&", "||", "#",
];

fn is_ir_identifier_start(c: char) -> bool {
    is_ascii_letter(c) || c == '$' || c == '@'
}

static IR: LazyLock<BuiltinGrammar> = LazyLock::new(|| {
    Policies::new(
        KeywordTable::new(KEYWORDS),
        OperatorTable::new(OPERATORS),
        CharClasses {
            start: is_ir_identifier_start,
            body: is_ascii_ident_body,
        },
    )
});

/// Grammar of the IR dialect.
pub fn ir() -> &'static BuiltinGrammar {
    &IR
}
