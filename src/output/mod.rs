//! Output renderers.

pub mod terminal;

use crate::models::Transcript;

/// Trait for rendering a transcript to an output format.
pub trait OutputRenderer {
    /// Render the transcript to a string.
    fn render(&self, transcript: &Transcript) -> String;
}
