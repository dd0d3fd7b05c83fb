//! Translates Brainfuck into a standalone node.js script.
//!
//! The pipeline is lexer -> parser -> codegen, `translate` runs all of it.

extern crate thiserror;

pub mod codegen;
pub mod lexer;
pub mod parser;

use std::num::NonZeroUsize;

use codegen::javascript::JavaScriptGenerator;
use parser::{parser::Parser, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Number of cells on the generated program's tape
    pub tape_size: NonZeroUsize,
}

impl Options {
    pub const DEFAULT_TAPE_SIZE: NonZeroUsize = match NonZeroUsize::new(128) {
        Some(size) => size,
        None => unreachable!(),
    };
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tape_size: Self::DEFAULT_TAPE_SIZE,
        }
    }
}

/// Parsing, generating and dropping the tree each recurse once per loop level
pub const PIPELINE_STACK_SIZE: usize = 1 << 30;

/// Run `f` on a thread with `PIPELINE_STACK_SIZE` of stack so deeply nested loops don't overflow
pub fn with_pipeline_stack<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send,
    T: Send,
{
    let mut task = Some(f);
    let spawned = std::thread::scope(|scope| {
        let handle = std::thread::Builder::new()
            .name("bfjs-pipeline".to_string())
            .stack_size(PIPELINE_STACK_SIZE)
            .spawn_scoped(scope, || task.take().map(|f| f()));
        match handle {
            Ok(handle) => match handle.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            },
            Err(_) => None,
        }
    });

    match (spawned, task) {
        (Some(result), _) => result,
        // couldn't get the big stack, shallow programs still fit on ours
        (None, Some(f)) => f(),
        (None, None) => unreachable!("pipeline thread ran without producing a result"),
    }
}

/// Nothing is generated unless the whole source parses
pub fn translate(source: &[u8], options: &Options) -> Result<String, ParseError> {
    with_pipeline_stack(|| {
        let program = Parser::new(source).parse_program()?;
        Ok(JavaScriptGenerator::new(options.tape_size).generate(&program))
    })
}
