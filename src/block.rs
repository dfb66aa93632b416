use crate::node::Node;

/// Inline formatting of a span. Links and images carry their target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link { target: String },
    Image { target: String },
}

/// A run of inline text with a single formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub content: String,
    pub kind: SpanKind,
}

impl Span {
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    pub fn link(content: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(
            content,
            SpanKind::Link {
                target: target.into(),
            },
        )
    }

    pub fn image(alt: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(
            alt,
            SpanKind::Image {
                target: target.into(),
            },
        )
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    /// URL of a link or image; `None` for every other kind.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Link { target } | SpanKind::Image { target } => Some(target),
            _ => None,
        }
    }

    /// Lower this span to a leaf node.
    ///
    /// Images become `<img src alt></img>` with an explicit closing tag.
    pub fn to_node(&self) -> Node {
        match &self.kind {
            SpanKind::Plain => Node::text(&self.content),
            SpanKind::Bold => Node::leaf("b", &self.content),
            SpanKind::Italic => Node::leaf("i", &self.content),
            SpanKind::Code => Node::leaf("code", &self.content),
            SpanKind::Link { target } => {
                Node::leaf("a", &self.content).with_attribute("href", target)
            }
            SpanKind::Image { target } => Node::leaf("img", "")
                .with_attribute("src", target)
                .with_attribute("alt", &self.content),
        }
    }
}

/// Lower a run of spans to sibling nodes.
pub fn spans_to_nodes(spans: &[Span]) -> Vec<Node> {
    spans.iter().map(Span::to_node).collect()
}

/// The structural type of a block, decided from its lines alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// A single list item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub content: Vec<Span>,
}

/// A list (ordered or unordered)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

/// Block-level elements parsed from Markdown, markup already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, content: Vec<Span> },
    /// Fenced block. The interior still goes through inline parsing.
    Code { content: Vec<Span> },
    Quote { content: Vec<Span> },
    List(List),
    Paragraph { content: Vec<Span> },
}

impl Block {
    pub fn block_type(&self) -> BlockType {
        match self {
            Block::Heading { .. } => BlockType::Heading,
            Block::Code { .. } => BlockType::Code,
            Block::Quote { .. } => BlockType::Quote,
            Block::List(List { ordered: false, .. }) => BlockType::UnorderedList,
            Block::List(List { ordered: true, .. }) => BlockType::OrderedList,
            Block::Paragraph { .. } => BlockType::Paragraph,
        }
    }
}
