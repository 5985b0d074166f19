use crate::{
    diagnostic::{DiagnosticSink, ScanError, ScanErrors},
    literal::Literal,
    token::Token,
    token_type::TokenTy,
};

static KEYWORDS: phf::Map<&'static str, TokenTy> = phf::phf_map! {
    "and" =>    TokenTy::And,
    "class" =>  TokenTy::Class,
    "else" =>   TokenTy::Else,
    "false" =>  TokenTy::False,
    "for" =>    TokenTy::For,
    "fun" =>    TokenTy::Fun,
    "if" =>     TokenTy::If,
    "nil" =>    TokenTy::Nil,
    "or" =>     TokenTy::Or,
    "print" =>  TokenTy::Print,
    "return" => TokenTy::Return,
    "super" =>  TokenTy::Super,
    "this" =>   TokenTy::This,
    "true" =>   TokenTy::True,
    "var" =>    TokenTy::Var,
    "while" =>  TokenTy::While,
};

/// Reserved word for an exact, case-sensitive identifier spelling.
pub fn keyword(text: &str) -> Option<TokenTy> {
    KEYWORDS.get(text).copied()
}

/// Scans `source`, collecting diagnostics instead of reporting them as they
/// happen. Tokens are only returned when the scan was clean.
pub fn scan(source: &str) -> Result<Vec<Token>, ScanErrors> {
    let mut errors = Vec::new();
    let tokens = Scanner::new(source).scan_tokens(&mut errors);
    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(ScanErrors(errors))
    }
}

/// Single pass cursor over a source text.
///
/// `start` and `current` are byte offsets that always sit on character
/// boundaries, so every lexeme is a plain slice of the source.
pub struct Scanner<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    errors: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            errors: 0,
        }
    }

    /// Runs the scan to completion. Malformed input is handed to `sink` and
    /// never stops the scan; the result always ends with [`TokenTy::Eof`].
    pub fn scan_tokens(mut self, sink: &mut dyn DiagnosticSink) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token(sink);
        }
        self.tokens.push(Token::eof(self.line));
        tracing::debug!(
            tokens = self.tokens.len(),
            errors = self.errors,
            lines = self.line,
            "scan finished"
        );
        self.tokens
    }

    fn scan_token(&mut self, sink: &mut dyn DiagnosticSink) {
        let ch = self.advance();
        match ch {
            '(' => self.add_token(TokenTy::LeftParen),
            ')' => self.add_token(TokenTy::RightParen),
            '{' => self.add_token(TokenTy::LeftBrace),
            '}' => self.add_token(TokenTy::RightBrace),
            ',' => self.add_token(TokenTy::Comma),
            '.' => self.add_token(TokenTy::Dot),
            '-' => self.add_token(TokenTy::Minus),
            '+' => self.add_token(TokenTy::Plus),
            ';' => self.add_token(TokenTy::Semicolon),
            '*' => self.add_token(TokenTy::Star),
            '!' => {
                let ty = if self.matches('=') {
                    TokenTy::BangEqual
                } else {
                    TokenTy::Bang
                };
                self.add_token(ty);
            }
            '=' => {
                let ty = if self.matches('=') {
                    TokenTy::EqualEqual
                } else {
                    TokenTy::Equal
                };
                self.add_token(ty);
            }
            '<' => {
                let ty = if self.matches('=') {
                    TokenTy::LessEqual
                } else {
                    TokenTy::Less
                };
                self.add_token(ty);
            }
            '>' => {
                let ty = if self.matches('=') {
                    TokenTy::GreaterEqual
                } else {
                    TokenTy::Greater
                };
                self.add_token(ty);
            }
            '/' => {
                if self.matches('/') {
                    // the newline itself is left for the next iteration
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenTy::Slash);
                }
            }
            // skip
            ' ' | '\r' | '\t' => {}
            '\n' => {
                self.line += 1;
            }
            '"' => self.string(sink),
            ch if ch.is_ascii_digit() => self.number(),
            ch if is_alpha(ch) => self.identifier(),
            ch => self.error(sink, ScanError::UnexpectedCharacter { line: self.line, ch }),
        }
    }

    fn string(&mut self, sink: &mut dyn DiagnosticSink) {
        let opening_line = self.line;
        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return self.error(sink, ScanError::UnterminatedString { line: self.line });
        }

        // closing "
        self.advance();

        // trim the quotes
        let value = &self.source[self.start + 1..self.current - 1];
        self.push(
            TokenTy::String,
            Some(Literal::String(value.to_owned())),
            opening_line,
        );
    }

    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance();

            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        // digits with an optional fraction always parse; overflow is infinity
        let value = self.lexeme().parse::<f64>().unwrap_or(f64::INFINITY);
        self.add_literal(TokenTy::Number, Literal::Number(value));
    }

    fn identifier(&mut self) {
        while is_alpha_numeric(self.peek()) {
            self.advance();
        }

        let ty = keyword(self.lexeme()).unwrap_or(TokenTy::Identifier);
        self.add_token(ty);
    }

    fn error(&mut self, sink: &mut dyn DiagnosticSink, error: ScanError) {
        tracing::debug!(line = error.line(), %error, "scan error");
        self.errors += 1;
        sink.report(error);
    }

    fn peek(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }

    fn matches(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            false
        } else {
            self.current += expected.len_utf8();
            true
        }
    }

    /// Only called with input remaining.
    fn advance(&mut self) -> char {
        let ch = self.peek();
        self.current += ch.len_utf8();
        ch
    }

    #[inline]
    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    #[inline]
    fn add_token(&mut self, ty: TokenTy) {
        self.push(ty, None, self.line)
    }

    #[inline]
    fn add_literal(&mut self, ty: TokenTy, literal: Literal) {
        self.push(ty, Some(literal), self.line)
    }

    fn push(&mut self, ty: TokenTy, literal: Option<Literal>, line: usize) {
        let lexeme = self.lexeme().to_owned();
        tracing::trace!(?ty, %lexeme, line, "token");
        self.tokens.push(Token::new(ty, lexeme, literal, line))
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

#[inline]
fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

#[inline]
fn is_alpha_numeric(ch: char) -> bool {
    is_alpha(ch) || ch.is_ascii_digit()
}
