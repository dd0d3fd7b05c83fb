use crate::lexer::{lexer::Lexer, LexerTokenKind};

use super::{AstKind, BasicBlock, ParseError, Program};

pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a [u8]) -> Parser<'a> {
        Parser {
            lexer: Lexer::new(source),
        }
    }

    /// Consume the next token only if it is `kind`, otherwise leave the lexer where it was
    fn expect_token(&mut self, kind: LexerTokenKind) -> bool {
        let backtrack = self.lexer.position();

        match self.lexer.next_token() {
            Some(token) if token.kind == kind => true,
            _ => {
                self.lexer.seek(backtrack);
                false
            }
        }
    }

    /// `Ok(None)` means we've hit the end of the source
    pub fn parse_instruction(&mut self) -> Result<Option<AstKind>, ParseError> {
        let Some(token) = self.lexer.next_token() else {
            return Ok(None);
        };

        Ok(Some(match token.kind {
            LexerTokenKind::Increment => AstKind::Increment,
            LexerTokenKind::Decrement => AstKind::Decrement,
            LexerTokenKind::MoveLeft => AstKind::MoveLeft,
            LexerTokenKind::MoveRight => AstKind::MoveRight,
            LexerTokenKind::Input => AstKind::Input,
            LexerTokenKind::Output => AstKind::Output,
            LexerTokenKind::LoopStart => AstKind::Loop(self.parse_loop_body()?),
            LexerTokenKind::LoopEnd => {
                return Err(ParseError::UnexpectedLoopEnd {
                    position: token.position,
                })
            }
        }))
    }

    fn parse_loop_body(&mut self) -> Result<BasicBlock, ParseError> {
        let mut instructions = vec![];

        loop {
            if self.expect_token(LexerTokenKind::LoopEnd) {
                break;
            }

            // nested errors are propagated as is, only running out of source is reported here
            match self.parse_instruction()? {
                Some(instruction) => instructions.push(instruction),
                None => {
                    return Err(ParseError::ExpectedInstruction {
                        position: self.lexer.position(),
                    })
                }
            }
        }

        Ok(BasicBlock { instructions })
    }

    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut instructions = vec![];

        while let Some(instruction) = self.parse_instruction()? {
            instructions.push(instruction);
        }

        Ok(BasicBlock { instructions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Position;

    fn parse(source: &str) -> Result<Program, ParseError> {
        Parser::new(source.as_bytes()).parse_program()
    }

    fn block(instructions: Vec<AstKind>) -> BasicBlock {
        BasicBlock { instructions }
    }

    #[test]
    fn test_simple_instructions() -> anyhow::Result<()> {
        let program = parse("++.")?;
        assert_eq!(
            program.instructions,
            [AstKind::Increment, AstKind::Increment, AstKind::Output]
        );

        let program = parse("<>,-")?;
        assert_eq!(
            program.instructions,
            [
                AstKind::MoveLeft,
                AstKind::MoveRight,
                AstKind::Input,
                AstKind::Decrement
            ]
        );
        Ok(())
    }

    #[test]
    fn test_empty_source() -> anyhow::Result<()> {
        assert_eq!(parse("")?, Program::default());
        assert_eq!(parse("just a comment")?, Program::default());
        Ok(())
    }

    #[test]
    fn test_clear_loop() -> anyhow::Result<()> {
        let program = parse("[-]")?;
        assert_eq!(
            program.instructions,
            [AstKind::Loop(block(vec![AstKind::Decrement]))]
        );
        Ok(())
    }

    #[test]
    fn test_empty_loop_is_kept() -> anyhow::Result<()> {
        let program = parse("[]")?;
        assert_eq!(program.instructions, [AstKind::Loop(BasicBlock::default())]);
        Ok(())
    }

    #[test]
    fn test_nested_loops() -> anyhow::Result<()> {
        let program = parse("+[>[-]<[]]")?;
        assert_eq!(
            program.instructions,
            [
                AstKind::Increment,
                AstKind::Loop(block(vec![
                    AstKind::MoveRight,
                    AstKind::Loop(block(vec![AstKind::Decrement])),
                    AstKind::MoveLeft,
                    AstKind::Loop(BasicBlock::default()),
                ])),
            ]
        );
        assert_eq!(program.instruction_count(), 7);
        Ok(())
    }

    #[test]
    fn test_unexpected_loop_end() {
        let err = parse("]").expect_err("must be a syntax error");
        assert_eq!(err.to_string(), "Unexpected ']'");
        assert_eq!(err.position(), Position::start());

        let err = parse("+[-]]").expect_err("must be a syntax error");
        assert!(matches!(err, ParseError::UnexpectedLoopEnd { .. }));
        assert_eq!(err.position().offset, 4);
    }

    #[test]
    fn test_unterminated_loop() {
        let err = parse("[+").expect_err("must be a syntax error");
        assert_eq!(err.to_string(), "Expected instruction or ']'");
        assert_eq!(err.position().offset, 2);

        for source in ["[", "[[]", "+[>[-]<", "[[[[+]]]"] {
            let err = parse(source).expect_err("must be a syntax error");
            assert!(matches!(err, ParseError::ExpectedInstruction { .. }), "{source}");
        }
    }

    #[test]
    fn test_first_error_wins() {
        // parsing stops at the stray `]`, the unterminated loop after it is never seen
        let err = parse("[+]][").expect_err("must be a syntax error");
        assert!(matches!(err, ParseError::UnexpectedLoopEnd { .. }));

        // inner loop is unterminated, the outer one doesn't override it
        let err = parse("[[").expect_err("must be a syntax error");
        assert_eq!(
            err,
            ParseError::ExpectedInstruction {
                position: Position {
                    offset: 2,
                    line: 1,
                    col: 3
                }
            }
        );
    }

    #[test]
    fn test_comments_do_not_change_tree() -> anyhow::Result<()> {
        let plain = parse("+[->+<].,")?;
        let commented = parse("inc +\n loop [ dec - right > inc + left < ] print . read ,\n")?;
        assert_eq!(plain, commented);
        Ok(())
    }

    #[test]
    fn test_instruction_count() -> anyhow::Result<()> {
        // one node per non-bracket symbol, plus one per bracket pair
        for (source, expected) in [("", 0), ("+-<>,.", 6), ("[]", 1), ("[[]]", 2), ("+[-[+]>]", 6)] {
            assert_eq!(parse(source)?.instruction_count(), expected, "{source}");
        }
        Ok(())
    }
}
