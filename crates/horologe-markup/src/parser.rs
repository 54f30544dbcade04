use crate::ast::{HmlDocument, Import, Node, Prop, Value};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

// ── Parser ────────────────────────────────────────────────────────────────

/// Recursive-descent parser over a token stream.
///
/// ```text
/// document := import* node EOF
/// import   := "import" STRING "as" IDENT
/// node     := IDENT STRING? ( "{" item* "}" )?
/// item     := IDENT ":" value | node
/// value    := STRING | NUMBER | COLOR | IDENT
/// ```
pub struct Parser {
    tokens: Vec<TokenWithPos>,
    cursor: usize,
}

/// What a block item turned out to be.
enum Item {
    Prop(Prop),
    Child(Node),
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, cursor: 0 }
    }

    // ── Document ──────────────────────────────────────────────────────────

    pub fn parse_document(&mut self) -> Result<HmlDocument, ParseError> {
        let mut imports = Vec::new();
        while self.at(&Token::Import) {
            imports.push(self.import()?);
        }

        let root = self.node()?;
        if !self.at(&Token::Eof) {
            return Err(self.error_here(format!(
                "unexpected {:?} after the root element; a document has exactly one root",
                self.nth(0)
            )));
        }

        Ok(HmlDocument { imports, root })
    }

    fn import(&mut self) -> Result<Import, ParseError> {
        self.bump(); // `import`
        let path = self.string()?;
        self.eat(&Token::As)?;
        let alias = self.ident()?;
        Ok(Import { path, alias })
    }

    // ── Nodes ─────────────────────────────────────────────────────────────

    fn node(&mut self) -> Result<Node, ParseError> {
        let line = self.position(self.cursor).0;
        let element = self.ident()?;
        let content = if matches!(self.nth(0), Token::Str(_)) { Some(self.string()?) } else { None };

        let mut node = Node { element, content, props: Vec::new(), children: Vec::new(), line };
        if !self.at(&Token::LBrace) {
            return Ok(node);
        }

        self.bump(); // `{`
        loop {
            if self.at(&Token::RBrace) {
                self.bump();
                return Ok(node);
            }
            if self.at(&Token::Eof) {
                return Err(self.error_here("unclosed '{' block"));
            }
            match self.item()? {
                Item::Prop(prop) => node.props.push(prop),
                Item::Child(child) => node.children.push(child),
            }
        }
    }

    /// `key: value` when an identifier is followed by `:`, otherwise a child element.
    fn item(&mut self) -> Result<Item, ParseError> {
        if !matches!(self.nth(0), Token::Ident(_)) {
            return Err(self.error_here(format!(
                "unexpected {:?} inside block; expected `key: value` or an element name",
                self.nth(0)
            )));
        }
        if self.nth(1) != &Token::Colon {
            return self.node().map(Item::Child);
        }

        let key = self.ident()?;
        self.bump(); // `:`
        let value = match self.bump() {
            Token::Str(s) => Value::Str(s),
            Token::Number(n) => Value::Number(n),
            Token::Color(c) => Value::Color(c),
            Token::Ident(s) => Value::Ident(s),
            other => return Err(self.error_behind(format!("expected a value for `{key}`, got {other:?}"))),
        };
        Ok(Item::Prop(Prop { key, value }))
    }

    // ── Cursor ────────────────────────────────────────────────────────────

    fn nth(&self, n: usize) -> &Token {
        self.tokens.get(self.cursor + n).map_or(&Token::Eof, |t| &t.token)
    }

    fn at(&self, token: &Token) -> bool {
        self.nth(0) == token
    }

    fn bump(&mut self) -> Token {
        let token = self.nth(0).clone();
        self.cursor = (self.cursor + 1).min(self.tokens.len());
        token
    }

    fn eat(&mut self, expected: &Token) -> Result<(), ParseError> {
        match self.bump() {
            ref got if got == expected => Ok(()),
            got => Err(self.error_behind(format!("expected {expected:?}, got {got:?}"))),
        }
    }

    fn ident(&mut self) -> Result<String, ParseError> {
        match self.bump() {
            Token::Ident(s) => Ok(s),
            got => Err(self.error_behind(format!("expected identifier, got {got:?}"))),
        }
    }

    fn string(&mut self) -> Result<String, ParseError> {
        match self.bump() {
            Token::Str(s) => Ok(s),
            got => Err(self.error_behind(format!("expected string, got {got:?}"))),
        }
    }

    // ── Errors ────────────────────────────────────────────────────────────

    /// Line and column of token `index`, clamped to the last token.
    fn position(&self, index: usize) -> (usize, usize) {
        self.tokens
            .get(index)
            .or_else(|| self.tokens.last())
            .map_or((1, 1), |t| (t.line, t.col))
    }

    /// Error at the token about to be read.
    fn error_here(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.position(self.cursor);
        ParseError::new(msg, line, col)
    }

    /// Error at the token just consumed.
    fn error_behind(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.position(self.cursor.saturating_sub(1));
        ParseError::new(msg, line, col)
    }
}

/// Parse a `.hml` source string into an [`HmlDocument`].
pub fn parse_str(src: &str) -> Result<HmlDocument, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_document()
}
