use crate::ast::{Node, Output};

/// Collects rule outputs into child nodes, merging consecutive characters
/// into a single escaped `Text` node.
#[derive(Debug, Default)]
pub struct TextRun {
    nodes: Vec<Node>,
    pending: String,
}

impl TextRun {
    pub fn push(&mut self, output: Output) {
        match output {
            Output::Character(c) => self.pending.push(c),
            Output::Node(Node::Text(text)) if text.is_empty() => {}
            Output::Node(node) => {
                self.flush();
                self.nodes.push(node);
            }
        }
    }

    pub fn finish(mut self) -> Vec<Node> {
        self.flush();
        self.nodes
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.pending);
        self.nodes.push(escaped_text(&text));
    }
}

/// Builds a `Text` node from raw source characters.
pub fn escaped_text(raw: &str) -> Node {
    Node::Text(html_escape::encode_text(raw).into_owned())
}
