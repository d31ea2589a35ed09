//! # Lexer for stackvm Assembly Language
//!
//! A token is any maximal run of non-whitespace characters. A `#` at the
//! start of a token opens a comment that runs to the end of the line; a `#`
//! inside a token is just part of it.

use logos::Logos;

/// Tokens for stackvm assembly
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")] // C isspace set
#[logos(skip r"#[^\n]*")] // Skip comments
pub enum Token {
    /// Mnemonic or operand, verbatim
    #[regex(r"[^ \t\n\r\x0B\x0C#][^ \t\n\r\x0B\x0C]*", |lex| lex.slice().to_string())]
    Word(String),
}

/// Split source text into tokens, in order.
///
/// Every character is covered by a skip pattern or by `Word`, so lexing
/// cannot fail.
pub fn tokenize(source: &str) -> Vec<String> {
    Token::lexer(source)
        .filter_map(|token| match token {
            Ok(Token::Word(word)) => Some(word),
            Err(()) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_words() {
        let mut lex = Token::lexer("iconst 5\nprint");
        assert_eq!(lex.next(), Some(Ok(Token::Word("iconst".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Word("5".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Word("print".to_string()))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_lexer_comment_to_end_of_line() {
        let tokens = tokenize("# iconst 5\nhalt");
        assert_eq!(tokens, vec!["halt"]);
    }

    #[test]
    fn test_lexer_trailing_comment() {
        let tokens = tokenize("iconst 1 # push one\nprint # no newline at end");
        assert_eq!(tokens, vec!["iconst", "1", "print"]);
    }

    #[test]
    fn test_lexer_hash_inside_token() {
        let tokens = tokenize("a#b c");
        assert_eq!(tokens, vec!["a#b", "c"]);
    }

    #[test]
    fn test_lexer_all_whitespace_kinds() {
        let tokens = tokenize(" \tiadd\r\n\x0Bisub\x0Cimul  ");
        assert_eq!(tokens, vec!["iadd", "isub", "imul"]);
    }

    #[test]
    fn test_lexer_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\n# only a comment").is_empty());
    }

    #[test]
    fn test_lexer_keeps_punctuation() {
        let tokens = tokenize("call 1, 2,3");
        assert_eq!(tokens, vec!["call", "1,", "2,3"]);
    }

    #[test]
    fn test_lexer_accepts_any_bytes() {
        let tokens = tokenize("\u{0}x \u{7f}y größe");
        assert_eq!(tokens, vec!["\u{0}x", "\u{7f}y", "größe"]);
    }
}
