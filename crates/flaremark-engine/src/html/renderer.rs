use std::collections::BTreeMap;
use std::fmt::Write;

use crate::ast::Node;

use super::options::{HtmlOptions, StyleMode};

/// Points of left margin per space of paragraph indentation.
const MARGIN_PER_SPACE: usize = 5;

/// CSS declarations in insertion order.
pub type Declarations = Vec<(&'static str, String)>;

/// Converts node trees to HTML.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    options: HtmlOptions,
    /// Generated class name to its declarations, filled in class mode.
    classes: BTreeMap<String, Declarations>,
}

/// Renders `node` with a fresh renderer.
pub fn render(node: &Node, options: &HtmlOptions) -> String {
    HtmlRenderer::new(options.clone()).render(node)
}

impl HtmlRenderer {
    pub fn new(options: HtmlOptions) -> Self {
        Self {
            options,
            classes: BTreeMap::new(),
        }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }

    /// The classes generated so far, keyed by name.
    pub fn classes(&self) -> &BTreeMap<String, Declarations> {
        &self.classes
    }

    pub fn render(&mut self, node: &Node) -> String {
        match node {
            Node::Document(children) | Node::Group(children) => self.render_all(children),
            Node::Paragraph { children, indent } => self.render_paragraph(children, *indent),
            Node::Title { level, content } => {
                format!("<h{level}>{}</h{level}>\n", self.render_all(content))
            }
            Node::Tag { name, children } => {
                format!("<{name}>{}</{name}>", self.render_all(children))
            }
            Node::Text(value) => value.clone(),
            Node::LineBreak => "<br>".to_string(),
            Node::Error { message, .. } => format!(
                "<p class=\"error\" style=\"color: red;\">{}</p>",
                html_escape::encode_text(message)
            ),
        }
    }

    /// Renders the class registry as a stylesheet, one rule per line.
    pub fn stylesheet(&self) -> String {
        let mut css = String::new();
        for (name, declarations) in &self.classes {
            let _ = writeln!(css, ".{name} {{ {} }}", declarations_css(declarations));
        }
        css
    }

    /// Renders `node` as a complete HTML page titled `title`.
    ///
    /// In class mode the page carries the generated stylesheet.
    pub fn render_page(&mut self, node: &Node, title: &str) -> String {
        let body = self.render(node);
        let mut page = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
        page.push_str("<meta charset=\"utf-8\">\n");
        let _ = writeln!(page, "<title>{}</title>", html_escape::encode_text(title));
        if !self.classes.is_empty() {
            let _ = write!(page, "<style>\n{}</style>\n", self.stylesheet());
        }
        page.push_str("</head>\n<body>\n");
        page.push_str(&body);
        if !body.ends_with('\n') {
            page.push('\n');
        }
        page.push_str("</body>\n</html>\n");
        page
    }

    fn render_all(&mut self, nodes: &[Node]) -> String {
        nodes.iter().map(|node| self.render(node)).collect()
    }

    fn render_paragraph(&mut self, children: &[Node], indent: usize) -> String {
        if children.is_empty() {
            return "<br>\n".to_string();
        }
        let attribute = self.indent_attribute(indent);
        let body = self.render_all(children);
        format!(
            "<p {attribute}>\n{}\n</p>\n",
            indent_lines(&body, self.options.indent_width)
        )
    }

    fn indent_attribute(&mut self, level: usize) -> String {
        let declarations: Declarations =
            vec![("margin-left", format!("{}pt", level * MARGIN_PER_SPACE))];
        match self.options.style_mode {
            StyleMode::Inline => format!("style=\"{}\"", declarations_css(&declarations)),
            StyleMode::Class => {
                let name = format!("indent{level}");
                let attribute = format!("class=\"{name}\"");
                self.classes.entry(name).or_insert(declarations);
                attribute
            }
        }
    }
}

fn declarations_css(declarations: &Declarations) -> String {
    declarations
        .iter()
        .map(|(property, value)| format!("{property}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prefixes every line of `text` with `width` spaces.
fn indent_lines(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.split('\n')
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
