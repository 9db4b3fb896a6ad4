//! # flaremark-engine
//!
//! Converts FlareMark, a flat line-oriented markup, into HTML.
//!
//! ```text
//! text → parsing::parse_document → ast::Node → html::render → String
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use flaremark_engine::{HtmlOptions, parse_document, render, standard_registry};
//!
//! let registry = standard_registry();
//! let doc = parse_document(&registry, "### Title\n").unwrap();
//! assert_eq!(render(&doc, &HtmlOptions::default()), "<h3>Title</h3>\n");
//! ```

pub mod ast;
pub mod html;
pub mod parsing;

// Re-export key types for easier usage
pub use ast::{Node, Output};
pub use html::{HtmlOptions, HtmlRenderer, StyleMode, render};
pub use parsing::{MAX_NESTING, ParseError, Registry, parse_document, standard_registry};
