//! Console implementation of the view boundary.

use super::View;
use std::io::{self, BufRead, Write};

/// Production view: prompts on stdout, reads lines from stdin.
#[derive(Debug, Default)]
pub struct ConsoleView;

impl ConsoleView {
    /// Create a console view.
    pub fn new() -> Self {
        Self
    }
}

impl View for ConsoleView {
    fn display_message(&mut self, message: &str) {
        println!("{}", message);
    }

    fn input_command(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            // EOF
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
