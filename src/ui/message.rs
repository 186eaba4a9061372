use std::io::{self, Write};

/// A piece of user-facing text with in-place transforms.
///
/// Messages are transient: built, optionally transformed, shown, dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    content: String,
}

impl Message {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the content to stdout as one line.
    pub fn show(&self) {
        let mut out = io::stdout();
        let _ = writeln!(out, "{}", self.content);
    }

    /// Uppercase the first character, lowercase the rest. Empty content
    /// stays empty.
    pub fn capitalize(&mut self) {
        let mut chars = self.content.chars();
        if let Some(first) = chars.next() {
            let rebuilt: String = first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect();
            self.content = rebuilt;
        }
    }

    pub fn make_uppercase(&mut self) {
        self.content = self.content.to_uppercase();
    }

    pub fn make_lowercase(&mut self) {
        self.content = self.content.to_lowercase();
    }
}
