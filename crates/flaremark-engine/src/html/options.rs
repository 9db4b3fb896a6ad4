use serde::{Deserialize, Serialize};

/// How paragraph indentation is expressed in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleMode {
    /// A `style="..."` attribute on every paragraph.
    #[default]
    Inline,
    /// A generated `indentN` class, collected into the renderer's stylesheet.
    Class,
}

/// Rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    /// Spaces used to re-indent nested block content.
    pub indent_width: usize,
    pub style_mode: StyleMode,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            style_mode: StyleMode::Inline,
        }
    }
}
