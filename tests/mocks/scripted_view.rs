//! Scripted view double: feeds pre-recorded input lines and captures every
//! displayed message, so the whole control loop runs without terminal I/O.

use contact_directory::View;
use std::collections::VecDeque;
use std::io;

/// A `View` that replays a script of input lines and records all output.
#[derive(Debug, Default)]
pub struct ScriptedView {
    inputs: VecDeque<String>,
    /// Everything passed to `display_message`, in order.
    pub outputs: Vec<String>,
}

impl ScriptedView {
    /// Build a view that will serve the given lines in order, then EOF.
    pub fn new(script: &[&str]) -> Self {
        Self {
            inputs: script.iter().map(|s| s.to_string()).collect(),
            outputs: Vec::new(),
        }
    }
}

impl View for ScriptedView {
    fn display_message(&mut self, message: &str) {
        self.outputs.push(message.to_string());
    }

    fn input_command(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.inputs.pop_front())
    }
}
