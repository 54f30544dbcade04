use std::iter::Peekable;
use std::str::Chars;

use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Ident(String),
    Str(String),
    Number(f32),
    /// Color literal: `[r, g, b, a]` straight-alpha bytes as parsed from
    /// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    Color([u8; 4]),
    // Punctuation
    Colon,
    LBrace,
    RBrace,
    // Keywords
    Import,
    As,
    // Sentinel
    Eof,
}

/// A token tagged with the 1-based position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub line: usize,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

/// Character scanner producing [`TokenWithPos`] values.
///
/// Whitespace and both comment forms (`// line`, `/* block */`) separate
/// tokens and are otherwise ignored. An unterminated block comment runs to the
/// end of input.
pub struct Lexer<'s> {
    chars: Peekable<Chars<'s>>,
    line: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { chars: src.chars().peekable(), line: 1, col: 1 }
    }

    pub fn tokenize(mut self) -> Result<Vec<TokenWithPos>, ParseError> {
        let mut out = Vec::new();
        loop {
            self.skip_trivia();
            let (line, col) = (self.line, self.col);
            let token = self.token()?;
            let done = token == Token::Eof;
            out.push(TokenWithPos { token, line, col });
            if done {
                return Ok(out);
            }
        }
    }

    // ── scanning ──────────────────────────────────────────────────────────

    fn first(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn second(&self) -> Option<char> {
        self.chars.clone().nth(1)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    /// Consumes characters while `pred` holds, appending them to `buf`.
    fn take_while(&mut self, buf: &mut String, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.first().filter(|c| pred(*c)) {
            buf.push(c);
            self.bump();
        }
    }

    fn error(&self, msg: impl Into<String>) -> ParseError {
        ParseError::new(msg, self.line, self.col)
    }

    fn skip_trivia(&mut self) {
        loop {
            match (self.first(), self.second()) {
                (Some(c), _) if c.is_whitespace() => {
                    self.bump();
                }
                (Some('/'), Some('/')) => {
                    while self.first().is_some_and(|c| c != '\n') {
                        self.bump();
                    }
                }
                (Some('/'), Some('*')) => {
                    self.bump();
                    self.bump();
                    while let Some(c) = self.bump() {
                        if c == '*' && self.first() == Some('/') {
                            self.bump();
                            break;
                        }
                    }
                }
                _ => return,
            }
        }
    }

    // ── tokens ────────────────────────────────────────────────────────────

    fn token(&mut self) -> Result<Token, ParseError> {
        let Some(c) = self.first() else {
            return Ok(Token::Eof);
        };

        let punct = match c {
            ':' => Some(Token::Colon),
            '{' => Some(Token::LBrace),
            '}' => Some(Token::RBrace),
            _ => None,
        };
        if let Some(token) = punct {
            self.bump();
            return Ok(token);
        }

        match c {
            '"' => self.string(),
            '#' => self.color(),
            '-' | '.' | '0'..='9' => self.number(),
            c if c.is_alphabetic() || c == '_' => Ok(self.word()),
            other => Err(self.error(format!("unexpected character {other:?}"))),
        }
    }

    fn string(&mut self) -> Result<Token, ParseError> {
        self.bump(); // opening quote
        let mut s = String::new();
        loop {
            let c = self.bump().ok_or_else(|| self.error("unterminated string literal"))?;
            match c {
                '"' => return Ok(Token::Str(s)),
                '\\' => {
                    let escaped = self.bump().ok_or_else(|| self.error("unterminated escape sequence"))?;
                    s.push(match escaped {
                        'n' => '\n',
                        't' => '\t',
                        other => other,
                    });
                }
                c => s.push(c),
            }
        }
    }

    fn color(&mut self) -> Result<Token, ParseError> {
        self.bump(); // `#`
        let mut hex = String::new();
        self.take_while(&mut hex, |c| c.is_ascii_hexdigit());

        let digits: Vec<u8> = hex.chars().filter_map(|c| c.to_digit(16)).map(|d| d as u8).collect();
        let pair = |i: usize| digits[i] * 16 + digits[i + 1];
        let rgba = match digits.len() {
            3 | 4 => {
                let mut out = [255; 4];
                for (slot, d) in out.iter_mut().zip(&digits) {
                    *slot = d * 17;
                }
                out
            }
            6 => [pair(0), pair(2), pair(4), 255],
            8 => [pair(0), pair(2), pair(4), pair(6)],
            n => {
                return Err(self.error(format!(
                    "color literal must be #rgb, #rgba, #rrggbb or #rrggbbaa, got {n} digits"
                )));
            }
        };
        Ok(Token::Color(rgba))
    }

    fn number(&mut self) -> Result<Token, ParseError> {
        let mut text = String::new();
        if self.first() == Some('-') {
            if !self.second().is_some_and(|c| c.is_ascii_digit() || c == '.') {
                return Err(self.error("expected a digit after '-'"));
            }
            text.push('-');
            self.bump();
        }
        self.take_while(&mut text, |c| c.is_ascii_digit());
        if self.first() == Some('.') {
            text.push('.');
            self.bump();
            self.take_while(&mut text, |c| c.is_ascii_digit());
        }
        text.parse::<f32>()
            .map(Token::Number)
            .map_err(|_| self.error(format!("invalid number {text:?}")))
    }

    /// Identifiers may contain inner dashes so HTML-style names such as
    /// `outer-color` or `data-font-family` read naturally.
    fn word(&mut self) -> Token {
        let mut word = String::new();
        self.take_while(&mut word, |c| c.is_alphanumeric() || c == '_' || c == '-');
        match word.as_str() {
            "import" => Token::Import,
            "as" => Token::As,
            _ => Token::Ident(word),
        }
    }
}
