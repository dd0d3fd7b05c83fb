extern crate clap;

use std::{collections::HashSet, num::NonZeroUsize, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use bfjs::{
    codegen::javascript::JavaScriptGenerator,
    lexer::lexer::Lexer,
    parser::{parser::Parser as BfParser, ParseError},
    with_pipeline_stack, Options,
};
use clap::{Parser, ValueEnum};
use colored::Colorize;

/// Brainf**k to JavaScript (node.js) translator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The Brainf**k source to translate
    #[arg()]
    source: PathBuf,

    /// Where to write the generated JavaScript
    #[arg()]
    destination: PathBuf,

    /// Number of cells on the tape of the generated program
    #[arg(value_parser = parse_tape_size, default_value_t = Options::DEFAULT_TAPE_SIZE)]
    tape_size: NonZeroUsize,

    /// Print intermediate representations to stdout
    #[arg(short, long, value_enum)]
    dump: Vec<Dump>,

    /// Report each stage and how long it took on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Hash, PartialEq, Eq)]
enum Dump {
    /// Output the lexer
    Tokens,
    /// Output the ast
    Ast,
}

/// The instructions of `source` as their symbols, with every comment stripped
fn render_tokens(source: &[u8]) -> String {
    Lexer::new(source)
        .collect_tokens()
        .iter()
        .map(|token| token.kind.symbol())
        .collect()
}

fn parse_tape_size(value: &str) -> Result<NonZeroUsize, String> {
    value
        .parse::<NonZeroUsize>()
        .map_err(|_| "Expected number bigger than 0".to_string())
}

struct Log {
    verbose: bool,
}

impl Log {
    fn start(&self, stage: &str) -> Instant {
        if self.verbose {
            eprintln!("{}", format!("Starting {}", stage).blue());
        }
        Instant::now()
    }

    fn finish(&self, stage: &str, started: Instant) {
        if self.verbose {
            eprintln!(
                "{} {:.2?}",
                format!("Finished {} in", stage).green(),
                started.elapsed()
            );
        }
    }

    fn info(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", message);
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match with_pipeline_stack(|| run(args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{0:}: {1:#}", "Error".red(), e);
            if let Some(parse_error) = e.downcast_ref::<ParseError>() {
                eprintln!("  at {}", parse_error.position());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let log = Log {
        verbose: args.verbose,
    };
    let dumps: HashSet<Dump> = HashSet::from_iter(args.dump);
    let options = Options {
        tape_size: args.tape_size,
    };

    log.info(&format!("Translating {}", args.source.display()));

    let source = std::fs::read(&args.source).with_context(|| {
        format!(
            "Could not open file '{}' for reading",
            args.source.display()
        )
    })?;

    if dumps.contains(&Dump::Tokens) {
        let now = log.start("lexing");
        let symbols = render_tokens(&source);
        log.finish("lexing", now);

        println!("{}", symbols);
    }

    let now = log.start("parsing");
    let program = BfParser::new(&source)
        .parse_program()
        .context("ParsingError")?;
    log.finish("parsing", now);
    log.info(&format!(
        "Parsed {} instructions",
        program.instruction_count()
    ));

    if dumps.contains(&Dump::Ast) {
        println!("{:#?}", program);
    }

    let now = log.start("codegen");
    let generated = JavaScriptGenerator::new(options.tape_size).generate(&program);
    log.finish("codegen", now);

    std::fs::write(&args.destination, &generated).with_context(|| {
        format!(
            "Could not open file '{}' for writing",
            args.destination.display()
        )
    })?;
    log.info(&format!(
        "Wrote {} bytes to {}",
        generated.len(),
        args.destination.display()
    ));

    Ok(())
}
