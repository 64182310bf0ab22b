//! Display surface abstraction
//!
//! The controller writes into whatever implements [`DisplaySurface`]. Front
//! ends hand it a handle to their text field; tests use [`TextBuffer`].

/// Handle to the single text field of a calculator
pub trait DisplaySurface {
    /// Current contents of the field
    fn text(&self) -> &str;

    /// Replace the contents of the field
    fn set_text(&mut self, text: String);

    /// Empty the field
    fn clear(&mut self) {
        self.set_text(String::new());
    }

    /// Append one character
    fn push(&mut self, ch: char) {
        let mut text = self.text().to_string();
        text.push(ch);
        self.set_text(text);
    }

    /// Remove the last character, if any
    fn pop(&mut self) -> Option<char> {
        let mut text = self.text().to_string();
        let removed = text.pop();
        if removed.is_some() {
            self.set_text(text);
        }
        removed
    }
}

/// In-memory display backed by a `String`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySurface for TextBuffer {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn clear(&mut self) {
        self.text.clear();
    }

    fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }
}
