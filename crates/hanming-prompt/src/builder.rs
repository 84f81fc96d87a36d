//! Builder-style helper for constructing prompt text.
//!
//! Writing multi-line prompts inline is tedious and error-prone.
//! `PromptBuilder` offers a fluent API that lets you focus on the *content*
//! instead of newlines and separators. Every method returns `self`:
//!
//! ```rust
//! use hanming_prompt::builder::PromptBuilder;
//!
//! let text = PromptBuilder::new()
//!     .add_line("Generate a Chinese name for: Raymond (male, modern)")
//!     .add_blank_line()
//!     .add_line("Return JSON only:")
//!     .add_text("{}")
//!     .finalize();
//!
//! assert_eq!(text, "Generate a Chinese name for: Raymond (male, modern)\n\nReturn JSON only:\n{}");
//! ```
//!
//! The builder performs **no** smart formatting: whitespace is emitted exactly
//! as requested, which keeps the produced prompt byte-for-byte predictable.

use std::fmt::{Display, Write as _};

/// Fluent helper that owns a growing `String` buffer.
///
/// Call [`Self::finalize`] to obtain the assembled text.
#[derive(Debug, Default)]
pub struct PromptBuilder {
    buffer: String,
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        // Writing into a `String` cannot fail.
        let _ = writeln!(self.buffer, "{line}");
        self
    }

    /// Append text verbatim, without a trailing newline.
    pub fn add_text(mut self, text: impl Display) -> Self {
        let _ = write!(self.buffer, "{text}");
        self
    }

    /// Append `items` joined by `separator`, preceded by `prefix`.
    ///
    /// Nothing at all is written when `items` is empty, so optional clauses
    /// such as `, with preferences for: a, b` disappear cleanly.
    pub fn add_joined<I, T>(mut self, prefix: impl Display, items: I, separator: &str) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        let mut items = items.into_iter().peekable();
        if items.peek().is_none() {
            return self;
        }

        let _ = write!(self.buffer, "{prefix}");
        for (idx, item) in items.enumerate() {
            if idx > 0 {
                self.buffer.push_str(separator);
            }
            let _ = write!(self.buffer, "{item}");
        }
        self
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated text and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joined_clause_vanishes_when_empty() {
        let text = PromptBuilder::new()
            .add_text("(male, modern")
            .add_joined(", with preferences for: ", Vec::<&str>::new(), ", ")
            .add_text(")")
            .finalize();
        assert_eq!(text, "(male, modern)");
    }

    #[test]
    fn joined_clause_uses_separator() {
        let text = PromptBuilder::new()
            .add_joined(", with preferences for: ", ["Wise", "Brave", "Kind"], ", ")
            .finalize();
        assert_eq!(text, ", with preferences for: Wise, Brave, Kind");
    }
}
