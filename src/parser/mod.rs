use thiserror::Error;

use crate::lexer::Position;

pub mod parser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstKind {
    Increment,
    Decrement,

    MoveLeft,
    MoveRight,

    Input,
    Output,

    /// Only ever built once its closing `]` has been read, the body may be empty
    Loop(BasicBlock),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicBlock {
    pub instructions: Vec<AstKind>,
}

impl BasicBlock {
    /// Number of nodes in the block, counting loops themselves and everything inside them
    pub fn instruction_count(&self) -> usize {
        self.instructions
            .iter()
            .map(|instruction| match instruction {
                AstKind::Loop(body) => 1 + body.instruction_count(),
                _ => 1,
            })
            .sum()
    }
}

pub type Program = BasicBlock;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unexpected ']'")]
    UnexpectedLoopEnd { position: Position },

    /// A loop body ran into the end of the source
    #[error("Expected instruction or ']'")]
    ExpectedInstruction { position: Position },
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::UnexpectedLoopEnd { position } => *position,
            ParseError::ExpectedInstruction { position } => *position,
        }
    }
}
