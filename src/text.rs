// Text buffer for the editor program

/// Content a freshly mounted editor starts with
pub const DEFAULT_TEXT: &str =
    "Type your text here… \nThis is the SAME hardware, different software.";

/// A plain text value with metrics derived on demand.
///
/// Nothing derived is stored, so the counts can never disagree with the
/// content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    content: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        TextBuffer {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the whole buffer verbatim
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Number of maximal runs of non-whitespace chars
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}
