use crate::{literal::Literal, token_type::TokenTy};

/// A classified lexeme together with the line it starts on.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub ty: TokenTy,
    /// Raw spelling from the source. Empty for [`TokenTy::Eof`].
    pub lexeme: String,
    pub literal: Option<Literal>,
    /// 1-based.
    pub line: usize,
}

impl Token {
    pub fn new(ty: TokenTy, lexeme: String, literal: Option<Literal>, line: usize) -> Self {
        Token {
            ty,
            lexeme,
            literal,
            line,
        }
    }

    pub fn eof(line: usize) -> Self {
        Token::new(TokenTy::Eof, String::new(), None, line)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.literal {
            Some(literal) => f.write_fmt(format_args!("{:?} {} {}", self.ty, self.lexeme, literal)),
            None => f.write_fmt(format_args!("{:?} {}", self.ty, self.lexeme)),
        }
    }
}
