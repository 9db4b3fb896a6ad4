//! # HTML Rendering
//!
//! Turns a parsed [`Node`](crate::ast::Node) tree into markup. The renderer
//! is stateful only in configuration and in the class registry it fills in
//! [`StyleMode::Class`] mode; output never depends on earlier calls.
//!
//! Text nodes are written verbatim. Escaping is the job of the rule that
//! produced them.

pub mod options;
pub mod renderer;

pub use options::{HtmlOptions, StyleMode};
pub use renderer::{HtmlRenderer, render};
