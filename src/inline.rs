use std::ops::Range;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::block::{Span, SpanKind};
use crate::error::RenderError;

/// Tokenize inline markdown into spans.
///
/// Passes run in a fixed order and each only touches plain spans left by
/// the previous one. `**` has to go before `*`, otherwise every bold
/// marker would be read as two italic markers.
pub fn text_to_spans(text: &str) -> Result<Vec<Span>, RenderError> {
    let spans = vec![Span::plain(text)];
    let spans = split_delimiter(spans, "**", SpanKind::Bold)?;
    let spans = split_delimiter(spans, "*", SpanKind::Italic)?;
    let spans = split_delimiter(spans, "`", SpanKind::Code)?;
    let spans = split_links(spans);
    let spans = split_images(spans);

    log::trace!("tokenized {} bytes into {} spans", text.len(), spans.len());
    Ok(spans)
}

/// Split every plain span on `delimiter`.
///
/// Pieces alternate plain/styled starting with plain; empty pieces are
/// dropped. An odd number of delimiters fails the whole call.
pub fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<Span>, RenderError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let parts: Vec<&str> = span.content.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(RenderError::UnbalancedDelimiter {
                delimiter,
                count: parts.len() - 1,
            });
        }

        for (index, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_kind = if index % 2 == 1 {
                kind.clone()
            } else {
                SpanKind::Plain
            };
            out.push(Span::new(part, part_kind));
        }
    }

    Ok(out)
}

/// One `[label](target)` or `![label](target)` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch<'a> {
    /// Byte range of the whole pattern, `!` included for images.
    pub range: Range<usize>,
    pub label: &'a str,
    pub target: &'a str,
}

impl<'a> PatternMatch<'a> {
    fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        let whole = caps.get(0)?;
        Some(Self {
            range: whole.range(),
            label: caps.get(1)?.as_str(),
            target: caps.get(2)?.as_str(),
        })
    }
}

fn image_pattern() -> &'static Regex {
    static IMAGE: OnceLock<Regex> = OnceLock::new();
    IMAGE.get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("invalid image regex"))
}

fn link_pattern() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("invalid link regex"))
}

/// All `![alt](src)` occurrences, left to right.
pub fn image_matches(text: &str) -> impl Iterator<Item = PatternMatch<'_>> {
    image_pattern()
        .captures_iter(text)
        .filter_map(|caps| PatternMatch::from_captures(&caps))
}

/// All `[label](href)` occurrences whose `[` is not preceded by `!`.
pub fn link_matches(text: &str) -> LinkMatches<'_> {
    LinkMatches { text, pos: 0 }
}

/// Iterator behind [`link_matches`].
///
/// The regex crate has no lookbehind, so a candidate directly after `!`
/// is skipped and the search resumes one byte past its `[`.
pub struct LinkMatches<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for LinkMatches<'a> {
    type Item = PatternMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos <= self.text.len() {
            let caps = link_pattern().captures_at(self.text, self.pos)?;
            let found = PatternMatch::from_captures(&caps)?;
            let start = found.range.start;

            if start > 0 && self.text.as_bytes()[start - 1] == b'!' {
                // `[` is one byte, so this stays on a char boundary.
                self.pos = start + 1;
                continue;
            }

            self.pos = found.range.end;
            return Some(found);
        }
        None
    }
}

fn find_links(text: &str) -> Vec<PatternMatch<'_>> {
    link_matches(text).collect()
}

fn find_images(text: &str) -> Vec<PatternMatch<'_>> {
    image_matches(text).collect()
}

fn split_links(spans: Vec<Span>) -> Vec<Span> {
    split_matches(spans, find_links, |label, target| Span::link(label, target))
}

fn split_images(spans: Vec<Span>) -> Vec<Span> {
    split_matches(spans, find_images, |alt, target| Span::image(alt, target))
}

/// Cut every plain span around the matches `find` reports, turning each
/// match into a span built by `make`.
fn split_matches<F, M>(spans: Vec<Span>, find: F, make: M) -> Vec<Span>
where
    F: for<'a> Fn(&'a str) -> Vec<PatternMatch<'a>>,
    M: Fn(&str, &str) -> Span,
{
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let text = span.content.as_str();
        let mut cursor = 0;
        for found in find(text) {
            if found.range.start > cursor {
                out.push(Span::plain(&text[cursor..found.range.start]));
            }
            out.push(make(found.label, found.target));
            cursor = found.range.end;
        }
        if cursor < text.len() {
            out.push(Span::plain(&text[cursor..]));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bold(s: &str) -> Span {
        Span::new(s, SpanKind::Bold)
    }

    fn italic(s: &str) -> Span {
        Span::new(s, SpanKind::Italic)
    }

    fn code(s: &str) -> Span {
        Span::new(s, SpanKind::Code)
    }

    #[test]
    fn plain_text_is_one_span() {
        assert_eq!(
            text_to_spans("nothing special here").unwrap(),
            vec![Span::plain("nothing special here")]
        );
    }

    #[test]
    fn empty_text_has_no_spans() {
        assert_eq!(text_to_spans("").unwrap(), Vec::<Span>::new());
    }

    #[test]
    fn bold_is_split_before_italic() {
        assert_eq!(text_to_spans("**text**").unwrap(), vec![bold("text")]);
    }

    #[test]
    fn delimiter_split_alternates() {
        let spans = split_delimiter(
            vec![Span::plain("This is text with a `code block` word")],
            "`",
            SpanKind::Code,
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("This is text with a "),
                code("code block"),
                Span::plain(" word"),
            ]
        );
    }

    #[test]
    fn delimiter_split_drops_empty_parts() {
        let spans =
            split_delimiter(vec![Span::plain("`a``b`")], "`", SpanKind::Code).unwrap();
        assert_eq!(spans, vec![code("a"), code("b")]);
    }

    #[test]
    fn delimiter_split_leaves_styled_spans_alone() {
        let spans = split_delimiter(
            vec![bold("a*b"), Span::plain("*c*")],
            "*",
            SpanKind::Italic,
        )
        .unwrap();
        assert_eq!(spans, vec![bold("a*b"), italic("c")]);
    }

    #[test]
    fn odd_backticks_are_unbalanced() {
        assert_eq!(
            text_to_spans("a `b` c `d").unwrap_err(),
            RenderError::UnbalancedDelimiter {
                delimiter: "`",
                count: 3
            }
        );
    }

    #[test]
    fn odd_asterisks_are_unbalanced() {
        assert!(matches!(
            text_to_spans("a *b"),
            Err(RenderError::UnbalancedDelimiter { delimiter: "*", .. })
        ));
    }

    #[test]
    fn all_inline_styles() {
        let text = "This is **text** with an *italic* word and a `code block` and an \
                    ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a \
                    [link](https://boot.dev)";
        assert_eq!(
            text_to_spans(text).unwrap(),
            vec![
                Span::plain("This is "),
                bold("text"),
                Span::plain(" with an "),
                italic("italic"),
                Span::plain(" word and a "),
                code("code block"),
                Span::plain(" and an "),
                Span::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
                Span::plain(" and a "),
                Span::link("link", "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn extracts_images() {
        let text = "![rick roll](https://i.imgur.com/aKaOqIh.gif) and ![obi wan](https://i.imgur.com/fJRm4Vk.jpeg)";
        let found: Vec<_> = image_matches(text).map(|m| (m.label, m.target)).collect();
        assert_eq!(
            found,
            vec![
                ("rick roll", "https://i.imgur.com/aKaOqIh.gif"),
                ("obi wan", "https://i.imgur.com/fJRm4Vk.jpeg"),
            ]
        );
    }

    #[test]
    fn link_matches_skip_images() {
        let text = "[to boot dev](https://www.boot.dev) and ![img](x.png) and [to youtube](https://youtube.com)";
        let found: Vec<_> = link_matches(text).map(|m| (m.label, m.target)).collect();
        assert_eq!(
            found,
            vec![
                ("to boot dev", "https://www.boot.dev"),
                ("to youtube", "https://youtube.com"),
            ]
        );
    }

    #[test]
    fn link_matches_can_restart() {
        let text = "[a](b)";
        assert_eq!(link_matches(text).count(), 1);
        assert_eq!(link_matches(text).count(), 1);
    }

    #[test]
    fn link_inside_image_label_is_found_after_skipping_bang() {
        let found: Vec<_> = link_matches("![a [b](c)").map(|m| m.label).collect();
        assert_eq!(found, vec!["b"]);
    }

    #[test]
    fn link_split_keeps_surrounding_text() {
        assert_eq!(
            text_to_spans("see [a](http://x) now").unwrap(),
            vec![
                Span::plain("see "),
                Span::link("a", "http://x"),
                Span::plain(" now"),
            ]
        );
    }

    #[test]
    fn image_only() {
        assert_eq!(
            text_to_spans("![alt](url)").unwrap(),
            vec![Span::image("alt", "url")]
        );
    }

    #[test]
    fn adjacent_links() {
        assert_eq!(
            text_to_spans("[a](1)[b](2)").unwrap(),
            vec![Span::link("a", "1"), Span::link("b", "2")]
        );
    }

    #[test]
    fn link_text_inside_bold_stays_bold() {
        assert_eq!(
            text_to_spans("**[a](b)**").unwrap(),
            vec![bold("[a](b)")]
        );
    }
}
