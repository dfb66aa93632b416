use crate::error::NodeError;

/// HTML attributes in insertion order.
///
/// Inserting a key that is already present replaces its value but keeps
/// its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn write_html(&self, out: &mut String) {
        for (key, value) in &self.0 {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

/// An element of the HTML output tree.
///
/// The optional fields make a malformed tree representable so that
/// serialization can reject it; the constructors always fill them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text, or an element that holds a single value and never nests.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Attributes,
    },
    /// An element wrapping other nodes.
    Parent {
        tag: Option<String>,
        children: Option<Vec<Node>>,
        attributes: Attributes,
    },
}

impl Node {
    /// Untagged leaf; renders as its value verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Parent {
            tag: Some(tag.into()),
            children: Some(children),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes_mut().insert(key, value);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf { tag, .. } | Node::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Node::Leaf { attributes, .. } | Node::Parent { attributes, .. } => attributes,
        }
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            Node::Leaf { attributes, .. } | Node::Parent { attributes, .. } => attributes,
        }
    }

    /// Serialize the tree rooted at this node.
    pub fn to_html(&self) -> Result<String, NodeError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), NodeError> {
        match self {
            Node::Leaf {
                tag,
                value,
                attributes,
            } => {
                let value = value.as_deref().ok_or(NodeError::MissingLeafValue)?;
                match tag {
                    None => out.push_str(value),
                    Some(tag) => {
                        open_tag(tag, attributes, out);
                        out.push_str(value);
                        close_tag(tag, out);
                    }
                }
            }
            Node::Parent {
                tag,
                children,
                attributes,
            } => {
                let tag = tag.as_deref().ok_or(NodeError::MissingParentTag)?;
                let children = children.as_ref().ok_or(NodeError::MissingParentChildren)?;
                open_tag(tag, attributes, out);
                for child in children {
                    child.write_html(out)?;
                }
                close_tag(tag, out);
            }
        }
        Ok(())
    }
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    attributes.write_html(out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
