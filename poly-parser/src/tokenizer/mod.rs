pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
///
/// Input the tokenizer cannot classify is kept as [`TokenKind::Symbol`] tokens, so that the parser
/// can point at it.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind: result.unwrap_or(TokenKind::Symbol),
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + x",
            [
                (TokenKind::Int, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "x"),
            ],
        );
    }

    #[test]
    fn numbers() {
        compare_tokens(
            "3 4.5 6. .75",
            [
                (TokenKind::Int, "3"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, "4.5"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, "6."),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, ".75"),
            ],
        );
    }

    #[test]
    fn complex_expr() {
        compare_tokens(
            "(Foo\t*\n2)-x1",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "Foo"),
                (TokenKind::Whitespace, "\t"),
                (TokenKind::Mul, "*"),
                (TokenKind::Whitespace, "\n"),
                (TokenKind::Int, "2"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Symbol, "-"),
                (TokenKind::Name, "x"),
                (TokenKind::Int, "1"),
            ],
        );
    }

    #[test]
    fn complete_keeps_spans() {
        let tokens = tokenize_complete("ab * 12");
        let spans = tokens.iter().map(|token| token.span.clone()).collect::<Vec<_>>();
        assert_eq!(spans, vec![0..2, 2..3, 3..4, 4..5, 5..7]);
        assert!(tokens[1].is_whitespace());
        assert_eq!(tokens[4].lexeme, "12");
    }
}
