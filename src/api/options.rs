//! Purpose: Encode-side configuration for text output.
//! Exports: `EncodeOptions`, `TextStyle`.
//! Role: Plain options value passed to `encode_to_text_with`; holds no runtime state.
//! Invariants: `EncodeOptions::default()` reproduces `encode_to_text` output exactly.

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TextStyle {
    #[default]
    Compact,
    Pretty,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncodeOptions {
    pub style: TextStyle,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self {
            style: TextStyle::Compact,
        }
    }

    pub fn pretty() -> Self {
        Self::new().with_style(TextStyle::Pretty)
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self::new()
    }
}
