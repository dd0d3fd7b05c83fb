pub mod lexer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexerTokenKind {
    // `+`: Increment the byte at the `data pointer` by one
    Increment,
    // `-`: Decrement the byte at the `data pointer` by one
    Decrement,

    // `<`: Decrement the `data pointer` by one
    MoveLeft,
    // `>`: Increment the `data pointer` by one
    MoveRight,

    // `[`: If the byte at the `data pointer` is zero, then jump the `instruction pointer` forward to the instruction after the matching `]`
    LoopStart,
    // `]`: If the byte at the `data pointer` is non-zero then jump the `instruction pointer` back to the instruction after the matching `[`
    LoopEnd,

    // `,`: Read the next byte from the `input device` and write it to the `data pointer`
    Input,
    // `.`: Write the byte at the `data pointer` to the `output device`
    Output,
}

impl LexerTokenKind {
    /// Every other byte is a comment
    pub fn from_byte(c: u8) -> Option<LexerTokenKind> {
        match c {
            b'+' => Some(LexerTokenKind::Increment),
            b'-' => Some(LexerTokenKind::Decrement),
            b'<' => Some(LexerTokenKind::MoveLeft),
            b'>' => Some(LexerTokenKind::MoveRight),
            b'[' => Some(LexerTokenKind::LoopStart),
            b']' => Some(LexerTokenKind::LoopEnd),
            b',' => Some(LexerTokenKind::Input),
            b'.' => Some(LexerTokenKind::Output),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            LexerTokenKind::Increment => '+',
            LexerTokenKind::Decrement => '-',
            LexerTokenKind::MoveLeft => '<',
            LexerTokenKind::MoveRight => '>',
            LexerTokenKind::LoopStart => '[',
            LexerTokenKind::LoopEnd => ']',
            LexerTokenKind::Input => ',',
            LexerTokenKind::Output => '.',
        }
    }
}

/// A snapshot of the lexer cursor, cheap to copy so the parser can rewind to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /** 'raw' format / offset within the source (in bytes) */
    pub offset: usize,

    /** Human Readable positions in file */
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn start() -> Position {
        Position {
            offset: 0,
            line: 1,
            col: 1,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: LexerTokenKind,
    /// Where the symbol itself starts
    pub position: Position,
}
