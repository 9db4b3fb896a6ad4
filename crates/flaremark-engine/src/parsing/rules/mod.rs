//! # Grammar Rules
//!
//! Each rule is one self-contained production. The categories model where
//! in the grammar a rule may fire:
//!
//! | Category | Rules (highest priority first) |
//! |----------|--------------------------------|
//! | `Document` | [`HeaderRule`], [`ParagraphRule`] |
//! | `Text` | bold, underline, strikethrough, [`ItalicRule`] |
//!
//! [`DocumentRule`], [`TextRule`] and [`EscapeRule`] sit in no category and
//! are reached by direct dispatch only.
//!
//! ## Delimiters
//!
//! Every rule owns its delimiter constants; no other module hardcodes `#`,
//! `**` or `\`.

pub mod document;
pub mod escape;
pub mod header;
pub mod paragraph;
pub mod run;
pub mod spans;
pub mod text;

pub use document::DocumentRule;
pub use escape::EscapeRule;
pub use header::HeaderRule;
pub use paragraph::ParagraphRule;
pub use spans::{ItalicRule, SpanRule};
pub use text::TextRule;

use super::registry::{Category, Registry};

/// Block priorities. The paragraph rule matches everything, so anything
/// else in `Document` must outrank it.
pub const HEADER_PRIORITY: i32 = 10;
pub const PARAGRAPH_PRIORITY: i32 = 0;

/// Span priorities. Two-character delimiters must outrank italic, whose
/// single `*` or `_` would otherwise swallow `**` and `__`.
pub const BOLD_PRIORITY: i32 = 40;
pub const UNDERLINE_PRIORITY: i32 = 30;
pub const STRIKETHROUGH_PRIORITY: i32 = 20;
pub const ITALIC_PRIORITY: i32 = 10;

/// Builds the registry holding the full FlareMark grammar.
pub fn standard_registry() -> Registry {
    Registry::builder()
        .register_for(HeaderRule, &[Category::Document], HEADER_PRIORITY)
        .register_for(ParagraphRule, &[Category::Document], PARAGRAPH_PRIORITY)
        .register(DocumentRule)
        .register(EscapeRule)
        .register(TextRule)
        .register_for(SpanRule::BOLD, &[Category::Text], BOLD_PRIORITY)
        .register_for(SpanRule::UNDERLINE, &[Category::Text], UNDERLINE_PRIORITY)
        .register_for(
            SpanRule::STRIKETHROUGH,
            &[Category::Text],
            STRIKETHROUGH_PRIORITY,
        )
        .register_for(ItalicRule, &[Category::Text], ITALIC_PRIORITY)
        .build()
}
