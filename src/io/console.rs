use crate::application::StatementOutput;

/// Writes statements to standard output, one `println!` per statement.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleOutput;

impl StatementOutput for ConsoleOutput {
    fn write(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Keeps every written text in memory, in write order.
#[derive(Debug, Default, Clone)]
pub struct MemoryOutput {
    written: Vec<String>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written(&self) -> &[String] {
        &self.written
    }

    /// Everything written so far, joined with newlines.
    pub fn contents(&self) -> String {
        self.written.join("\n")
    }
}

impl StatementOutput for MemoryOutput {
    fn write(&mut self, text: &str) {
        self.written.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_output_keeps_order() {
        let mut output = MemoryOutput::new();
        output.write("first");
        output.write("second");

        assert_eq!(output.written(), &["first".to_string(), "second".to_string()]);
        assert_eq!(output.contents(), "first\nsecond");
    }
}
