mod block;
mod config;
mod error;
mod html;
mod inline;
mod node;
mod parser;
pub mod site;

pub use block::{Block, BlockType, List, ListItem, Span, SpanKind};
pub use config::{Config, OutputConfig, PathsConfig};
pub use error::{NodeError, RenderError, SiteError};
pub use inline::{PatternMatch, image_matches, link_matches, text_to_spans};
pub use node::{Attributes, Node};
pub use parser::{block_type, markdown_to_blocks};

/// Parse markdown text into a vector of blocks.
pub fn parse(markdown: &str) -> Result<Vec<Block>, RenderError> {
    parser::parse(markdown)
}

/// Convert markdown to an HTML node tree rooted at a `<div>`.
pub fn markdown_to_node(markdown: &str) -> Result<Node, RenderError> {
    let blocks = parse(markdown)?;
    Ok(html::blocks_to_node(&blocks))
}

/// Convert markdown to an HTML string.
///
/// Fails without partial output if any span has an unbalanced delimiter.
pub fn render(markdown: &str) -> Result<String, RenderError> {
    let node = markdown_to_node(markdown)?;
    Ok(node.to_html()?)
}
