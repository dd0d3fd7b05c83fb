use super::{LexerTokenKind, Position, Token};

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a [u8],

    /// Everything before this has already been consumed
    position: Position,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a [u8]) -> Lexer<'a> {
        Lexer {
            source,
            position: Position::start(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Rewind (or skip) to a position previously handed out by `position()`
    pub fn seek(&mut self, position: Position) {
        self.position = position;
    }

    fn consume_byte(&mut self) -> Option<u8> {
        let c = *self.source.get(self.position.offset)?;
        self.position.offset += 1;
        self.position.col += 1;
        if c == b'\n' {
            self.position.line += 1;
            self.position.col = 1;
        }
        Some(c)
    }

    /// `None` is the end of the source, not an error
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            let position = self.position;
            let c = self.consume_byte()?;
            // anything that isn't an instruction is a comment, so just keep reading
            if let Some(kind) = LexerTokenKind::from_byte(c) {
                return Some(Token { kind, position });
            }
        }
    }

    pub fn collect_tokens(&mut self) -> Vec<Token> {
        let mut v = vec![];
        while let Some(token) = self.next_token() {
            v.push(token);
        }
        v
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
