//! The high-level source language.

use std::sync::LazyLock;

use super::table::{BuiltinGrammar, CharClasses, KeywordTable, OperatorTable, Policies};
use crate::unicode::{is_ascii_ident_body, is_ascii_letter};

const KEYWORDS: &[&str] = &[
    "if", "else", "do", "while", "for", "loop", "break", "continue", "return",
    "const", "let", "var", "void", "int", "int32", "int64", "float", "float32",
    "float64", "fixed", "bool", "true", "false", "string", "struct", "using",
    "external", "graph", "processor", "namespace", "connection", "input",
    "output", "event", "import", "static_assert", "try", "catch", "throw",
    "wrap", "clamp", "complex", "complex32", "complex64",
];

const OPERATORS: &[&str] = &[
    ";", ",", ".", "..", "::", ":", "(", ")", "{", "}", "[", "]", "<", ">",
    "<=", ">=", "==", "!=", "=", "+", "-", "*", "/", "%", "+=", "-=", "*=",
    "/=", "%=", "&", "&&", "|", "||", "^", "~", "!", "?", "<<", ">>", ">>>",
    "<<=", ">>=", ">>>=", "&=", "|=", "^=", "&&=", "||=", "++", "--", "->",
    "@",
];

static SOURCE: LazyLock<BuiltinGrammar> = LazyLock::new(|| {
    Policies::new(
        KeywordTable::new(KEYWORDS),
        OperatorTable::new(OPERATORS),
        CharClasses {
            start: is_ascii_letter,
            body: is_ascii_ident_body,
        },
    )
});

/// Grammar of the source language.
pub fn source() -> &'static BuiltinGrammar {
    &SOURCE
}
