//! # Document Tree
//!
//! The immutable output of a parse. Every node is built by a rule consumer
//! during a single `parse_document` call and never changed afterwards; each
//! child is owned by exactly one parent.
//!
//! Single raw characters are deliberately *not* a [`Node`] variant. A rule
//! that consumes one plain character returns [`Output::Character`], and the
//! caller merges runs of those into [`Node::Text`] before building its own
//! node. A `Node` tree therefore cannot carry an unmerged character into the
//! renderer.

/// A node of the parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// The root of a parsed document.
    Document(Vec<Node>),
    /// An ordered run of blocks, structurally identical to `Document`.
    Group(Vec<Node>),
    /// One line of inline content.
    Paragraph {
        children: Vec<Node>,
        /// Number of leading spaces on the source line.
        indent: usize,
    },
    /// A header line, `level` between 1 and 5 from the grammar.
    Title { level: usize, content: Vec<Node> },
    /// A generic inline wrapper such as `b` or `del`.
    Tag {
        name: &'static str,
        children: Vec<Node>,
    },
    /// Already-escaped markup, rendered verbatim.
    Text(String),
    LineBreak,
    /// A rule-local failure captured in place of the content it failed on.
    Error { message: String, detail: String },
}

impl Node {
    /// Returns the child nodes of container variants.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document(children)
            | Node::Group(children)
            | Node::Paragraph { children, .. }
            | Node::Title {
                content: children, ..
            }
            | Node::Tag { children, .. } => children,
            Node::Text(_) | Node::LineBreak | Node::Error { .. } => &[],
        }
    }

    /// Iterates over every `Error` node in the tree, depth first.
    pub fn errors(&self) -> impl Iterator<Item = &Node> + '_ {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            while let Some(node) = stack.pop() {
                stack.extend(node.children().iter().rev());
                if matches!(node, Node::Error { .. }) {
                    return Some(node);
                }
            }
            None
        })
    }
}

/// What a rule consumer hands back to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// A finished node.
    Node(Node),
    /// One plain character, still to be merged into a text run.
    Character(char),
}

impl Output {
    /// Finishes a lone result into a node, turning a character into text.
    pub fn into_node(self) -> Node {
        match self {
            Output::Node(node) => node,
            Output::Character(c) => Node::Text(c.to_string()),
        }
    }
}

impl From<Node> for Output {
    fn from(node: Node) -> Self {
        Output::Node(node)
    }
}
