//! Terminal renderer: the plain-text demo transcript.
//!
//! Output is uncolored so it stays byte-identical whether or not stdout
//! is a terminal.

use crate::constants::TRANSCRIPT_TITLE;
use crate::models::Transcript;
use crate::output::OutputRenderer;

/// Plain-text transcript renderer.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, transcript: &Transcript) -> String {
        let mut output = String::new();

        output.push_str(&format!("=== {TRANSCRIPT_TITLE} ===\n"));
        output.push('\n');

        output.push_str(&format!("Number 1: {}\n", transcript.operands.a));
        output.push_str(&format!("Number 2: {}\n", transcript.operands.b));
        output.push('\n');

        for calculation in &transcript.calculations {
            output.push_str(&format!("{calculation}\n"));
        }

        output
    }
}
