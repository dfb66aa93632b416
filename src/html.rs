use crate::block::{Block, List, spans_to_nodes};
use crate::node::Node;

/// Wrap every block in one `<div>` root.
pub fn blocks_to_node(blocks: &[Block]) -> Node {
    Node::parent("div", blocks.iter().map(block_to_node).collect())
}

pub fn block_to_node(block: &Block) -> Node {
    match block {
        Block::Heading { level, content } => {
            Node::parent(format!("h{level}"), spans_to_nodes(content))
        }
        Block::Code { content } => {
            Node::parent("pre", vec![Node::parent("code", spans_to_nodes(content))])
        }
        Block::Quote { content } => Node::parent("blockquote", spans_to_nodes(content)),
        Block::List(list) => list_to_node(list),
        Block::Paragraph { content } => Node::parent("p", spans_to_nodes(content)),
    }
}

fn list_to_node(list: &List) -> Node {
    let tag = if list.ordered { "ol" } else { "ul" };
    let items = list
        .items
        .iter()
        .map(|item| Node::parent("li", spans_to_nodes(&item.content)))
        .collect();
    Node::parent(tag, items)
}

#[cfg(test)]
mod tests {
    use crate::error::RenderError;
    use crate::render;
    use pretty_assertions::assert_eq;

    #[test]
    fn paragraph() {
        assert_eq!(
            render("Hello world").unwrap(),
            "<div><p>Hello world</p></div>"
        );
    }

    #[test]
    fn text_without_markup_is_one_paragraph() {
        let text = "nothing to see: here, (really) 42 > 41";
        assert_eq!(render(text).unwrap(), format!("<div><p>{text}</p></div>"));
    }

    #[test]
    fn empty_document() {
        assert_eq!(render("").unwrap(), "<div></div>");
    }

    #[test]
    fn heading_levels() {
        assert_eq!(render("# One").unwrap(), "<div><h1>One</h1></div>");
        assert_eq!(
            render("###### Six").unwrap(),
            "<div><h6>Six</h6></div>"
        );
    }

    #[test]
    fn bold_and_italic() {
        assert_eq!(render("**text**").unwrap(), "<div><p><b>text</b></p></div>");
        assert_eq!(render("*text*").unwrap(), "<div><p><i>text</i></p></div>");
    }

    #[test]
    fn inline_code() {
        assert_eq!(
            render("use `cargo` here").unwrap(),
            "<div><p>use <code>cargo</code> here</p></div>"
        );
    }

    #[test]
    fn link() {
        assert_eq!(
            render("[a](http://x)").unwrap(),
            r#"<div><p><a href="http://x">a</a></p></div>"#
        );
    }

    #[test]
    fn image_keeps_closing_tag() {
        assert_eq!(
            render("![alt](url)").unwrap(),
            r#"<div><p><img src="url" alt="alt"></img></p></div>"#
        );
    }

    #[test]
    fn quote() {
        assert_eq!(
            render("> quoted **words**\n> more").unwrap(),
            "<div><blockquote> quoted <b>words</b>\n more</blockquote></div>"
        );
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            render("* one\n- *two*").unwrap(),
            "<div><ul><li>one</li><li><i>two</i></li></ul></div>"
        );
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            render("1. one\n2. two").unwrap(),
            "<div><ol><li>one</li><li>two</li></ol></div>"
        );
    }

    #[test]
    fn misnumbered_list_is_paragraph() {
        assert_eq!(
            render("1. a\n2. b\n2. c").unwrap(),
            "<div><p>1. a\n2. b\n2. c</p></div>"
        );
    }

    #[test]
    fn code_block_contents_are_inline_parsed() {
        assert_eq!(
            render("```\nlet *x* = 1;\n```").unwrap(),
            "<div><pre><code>let <i>x</i> = 1;</code></pre></div>"
        );
    }

    #[test]
    fn odd_backticks_fail() {
        assert!(matches!(
            render("one\n\nsome `code"),
            Err(RenderError::UnbalancedDelimiter { delimiter: "`", .. })
        ));
    }

    #[test]
    fn full_document() {
        let markdown = "### H3 Heading\n\n\
                        ```\n# some code\nint i = 0\n```\n\n\
                        [example link](http://example.com)\n\n\
                        Some plain text.\n";
        assert_eq!(
            render(markdown).unwrap(),
            "<div><h3>H3 Heading</h3>\
             <pre><code># some code\nint i = 0</code></pre>\
             <p><a href=\"http://example.com\">example link</a></p>\
             <p>Some plain text.</p></div>"
        );
    }

    #[test]
    fn mixed_blocks() {
        let markdown = "# Title\n\n\
                        > a quote\n\n\
                        * first\n* second\n\n\
                        1. one\n2. two\n\n\
                        A paragraph with ![pic](p.png).";
        assert_eq!(
            render(markdown).unwrap(),
            "<div><h1>Title</h1>\
             <blockquote> a quote</blockquote>\
             <ul><li>first</li><li>second</li></ul>\
             <ol><li>one</li><li>two</li></ol>\
             <p>A paragraph with <img src=\"p.png\" alt=\"pic\"></img>.</p></div>"
        );
    }
}
