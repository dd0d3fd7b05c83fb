use std::num::NonZeroUsize;

use crate::parser::{AstKind, BasicBlock, Program};

use super::CodeWriter;

/// Everything up to the tape size literal
const PRELUDE: &str = r#"const prompt = require('prompt-sync')({sigint: true});
const TapeSize = "#;

/// The runtime, ends by opening `main` where the generated body goes
const RUNTIME: &str = r#";
let inputBuffer = "";
let tape = new Array(TapeSize);
let index = 0;

function initializeTape() {
    for (let i = 0; i < TapeSize; ++i)
        tape[i] = 0;
}

function runInstructionGetChar() {
    // Block for another line whenever the buffer runs dry, like getchar
    while (inputBuffer.length === 0)
        inputBuffer = prompt("") + "\n";
    const character = inputBuffer[0];
    inputBuffer = inputBuffer.substring(1);
    const characterNumeric = character.charCodeAt(0);
    if (characterNumeric < 0 || characterNumeric > 255)
        throw Error("Character not ascii");
    tape[index] = characterNumeric;
}

function runInstructionPutChar() {
    process.stdout.write(String.fromCharCode(tape[index]));
}

function runInstructionInc() {
    let current = tape[index];
    tape[index] = (current + 1) % 256;
}

function runInstructionDec() {
    let current = tape[index];
    // % keeps the sign of the dividend, so normalize back into [0, 255]
    tape[index] = ((current - 1) % 256 + 256) % 256;
}

function runInstructionShl() {
    if (index == 0) {
        throw Error("Cannot move left when on the leftmost cell");
    }
    --index;
}

function runInstructionShr() {
    if (index == TapeSize - 1) {
        throw Error("Cannot move right when on the rightmost cell");
    }
    ++index;
}

function main() {
    initializeTape();
    // The generated code
"#;

const EPILOGUE: &str = r#"}

main();
process.exit();
"#;

/// Generated statements start inside `main`
const BASE_INDENT: usize = 1;

/// Translates a parsed program into a standalone node.js script
pub struct JavaScriptGenerator {
    tape_size: NonZeroUsize,
}

impl JavaScriptGenerator {
    pub fn new(tape_size: NonZeroUsize) -> Self {
        Self { tape_size }
    }

    pub fn generate(&self, program: &Program) -> String {
        let mut writer = CodeWriter::new(BASE_INDENT);

        writer.write_str(PRELUDE);
        writer.write_str(&self.tape_size.to_string());
        writer.write_str(RUNTIME);
        write_block(&mut writer, program);
        writer.write_str(EPILOGUE);

        writer.finish()
    }

    /// Only the statements for `program`, without the runtime around them
    pub fn generate_body(&self, program: &Program) -> String {
        let mut writer = CodeWriter::new(BASE_INDENT);
        write_block(&mut writer, program);
        writer.finish()
    }
}

fn write_block(writer: &mut CodeWriter, block: &BasicBlock) {
    for instruction in block.instructions.iter() {
        write_instruction(writer, instruction);
    }
}

fn write_instruction(writer: &mut CodeWriter, instruction: &AstKind) {
    match instruction {
        AstKind::Increment => writer.write_line("runInstructionInc();"),
        AstKind::Decrement => writer.write_line("runInstructionDec();"),
        AstKind::MoveLeft => writer.write_line("runInstructionShl();"),
        AstKind::MoveRight => writer.write_line("runInstructionShr();"),
        AstKind::Input => writer.write_line("runInstructionGetChar();"),
        AstKind::Output => writer.write_line("runInstructionPutChar();"),
        AstKind::Loop(body) => {
            // an empty body is still emitted as a loop, even though it can spin forever
            writer.write_line("while (tape[index]) {");
            writer.increase_indent();
            write_block(writer, body);
            writer.decrease_indent();
            writer.write_line("}");
        }
    }
}
