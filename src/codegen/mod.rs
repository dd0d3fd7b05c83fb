pub mod javascript;

/// Spaces per nesting level
pub const INDENT_WIDTH: usize = 4;

/// Accumulates generated source text, one indented line at a time
#[derive(Debug, Default)]
pub struct CodeWriter {
    output: String,
    indent: usize,
}

impl CodeWriter {
    pub fn new(indent: usize) -> Self {
        Self {
            output: String::new(),
            indent,
        }
    }

    /// Write text verbatim, without indentation or a trailing newline
    pub fn write_str(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub fn write_line(&mut self, line: &str) {
        for _ in 0..self.indent * INDENT_WIDTH {
            self.output.push(' ');
        }
        self.output.push_str(line);
        self.output.push('\n');
    }

    pub fn increase_indent(&mut self) {
        self.indent += 1;
    }

    pub fn decrease_indent(&mut self) {
        debug_assert!(self.indent > 0, "decrease_indent without a matching increase_indent");
        self.indent -= 1;
    }

    pub fn finish(self) -> String {
        self.output
    }
}
