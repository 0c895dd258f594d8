//! Reusable policy implementations.

use lexis_util::FxHashMap;

use super::{IdentifierMatcher, KeywordList, OperatorList};
use crate::cursor::Cursor;
use crate::token::TokenType;

/// Exact-match keyword lookup.
#[derive(Clone, Debug, Default)]
pub struct KeywordTable {
    words: FxHashMap<&'static str, TokenType>,
}

impl KeywordTable {
    pub fn new(words: &[&'static str]) -> Self {
        Self {
            words: words.iter().map(|&w| (w, TokenType::new(w))).collect(),
        }
    }

    /// Reserved words in alphabetical order.
    pub fn words(&self) -> Vec<&'static str> {
        let mut words: Vec<_> = self.words.keys().copied().collect();
        words.sort_unstable();
        words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl KeywordList for KeywordTable {
    fn match_keyword(&self, text: &str) -> Option<TokenType> {
        self.words.get(text).copied()
    }
}

/// Greedy longest-match operator lookup.
#[derive(Clone, Debug, Default)]
pub struct OperatorTable {
    /// Longest spelling first
    operators: Vec<(&'static str, TokenType)>,
}

impl OperatorTable {
    pub fn new(operators: &[&'static str]) -> Self {
        let mut operators: Vec<_> = operators
            .iter()
            .filter(|op| !op.is_empty())
            .map(|&op| (op, TokenType::new(op)))
            .collect();
        operators.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));
        operators.dedup_by(|a, b| a.0 == b.0);
        Self { operators }
    }

    pub fn spellings(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.operators.iter().map(|(op, _)| *op)
    }
}

impl OperatorList for OperatorTable {
    fn match_operator(&self, cursor: &mut Cursor<'_>) -> Option<TokenType> {
        let (op, token_type) = self
            .operators
            .iter()
            .find(|(op, _)| cursor.starts_with(op))?;
        cursor.advance_bytes(op.len());
        Some(*token_type)
    }
}

/// Identifier classification from a pair of predicates.
#[derive(Clone, Copy, Debug)]
pub struct CharClasses {
    pub start: fn(char) -> bool,
    pub body: fn(char) -> bool,
}

impl IdentifierMatcher for CharClasses {
    fn is_identifier_start(&self, c: char) -> bool {
        (self.start)(c)
    }

    fn is_identifier_body(&self, c: char) -> bool {
        (self.body)(c)
    }
}

/// Three independent policies combined into one grammar.
#[derive(Clone, Debug)]
pub struct Policies<K, O, I> {
    pub keywords: K,
    pub operators: O,
    pub identifiers: I,
}

impl<K, O, I> Policies<K, O, I> {
    pub fn new(keywords: K, operators: O, identifiers: I) -> Self {
        Self {
            keywords,
            operators,
            identifiers,
        }
    }
}

impl<K: KeywordList, O, I> KeywordList for Policies<K, O, I> {
    fn match_keyword(&self, text: &str) -> Option<TokenType> {
        self.keywords.match_keyword(text)
    }
}

impl<K, O: OperatorList, I> OperatorList for Policies<K, O, I> {
    fn match_operator(&self, cursor: &mut Cursor<'_>) -> Option<TokenType> {
        self.operators.match_operator(cursor)
    }
}

impl<K, O, I: IdentifierMatcher> IdentifierMatcher for Policies<K, O, I> {
    fn is_identifier_start(&self, c: char) -> bool {
        self.identifiers.is_identifier_start(c)
    }

    fn is_identifier_body(&self, c: char) -> bool {
        self.identifiers.is_identifier_body(c)
    }
}

/// Shape of the built-in grammars.
pub type BuiltinGrammar = Policies<KeywordTable, OperatorTable, CharClasses>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::{is_ascii_ident_body, is_ascii_letter};

    #[test]
    fn test_keyword_table_exact_match_only() {
        let table = KeywordTable::new(&["let", "letter"]);
        assert_eq!(table.match_keyword("let"), Some(TokenType::new("let")));
        assert_eq!(table.match_keyword("letter"), Some(TokenType::new("letter")));
        assert_eq!(table.match_keyword("le"), None);
        assert_eq!(table.match_keyword("lets"), None);
        assert_eq!(table.words(), vec!["let", "letter"]);
    }

    #[test]
    fn test_operator_table_longest_match() {
        let table = OperatorTable::new(&[">", ">>", ">>=", "="]);
        let mut cursor = Cursor::new(">>= x");
        assert_eq!(table.match_operator(&mut cursor), Some(TokenType::new(">>=")));
        assert_eq!(cursor.position(), 3);

        let mut cursor = Cursor::new(">=");
        assert_eq!(table.match_operator(&mut cursor), Some(TokenType::new(">")));
        assert_eq!(table.match_operator(&mut cursor), Some(TokenType::new("=")));
    }

    #[test]
    fn test_operator_table_miss_leaves_cursor() {
        let table = OperatorTable::new(&["+", "++"]);
        let mut cursor = Cursor::new("#");
        assert_eq!(table.match_operator(&mut cursor), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_operator_table_dedups_and_orders() {
        let table = OperatorTable::new(&["+", "+=", "+", ""]);
        assert_eq!(table.spellings().collect::<Vec<_>>(), vec!["+=", "+"]);
    }

    #[test]
    fn test_policies_delegate() {
        let grammar = Policies::new(
            KeywordTable::new(&["if"]),
            OperatorTable::new(&["("]),
            CharClasses {
                start: is_ascii_letter,
                body: is_ascii_ident_body,
            },
        );
        assert!(grammar.match_keyword("if").is_some());
        assert!(grammar.is_identifier_start('x'));
        assert!(!grammar.is_identifier_start('_'));
        assert!(grammar.is_identifier_body('_'));
        let mut cursor = Cursor::new("(");
        assert!(grammar.match_operator(&mut cursor).is_some());
    }
}
