use crate::block::{Block, BlockType, List, ListItem};
use crate::error::RenderError;
use crate::inline::text_to_spans;

const FENCE: &str = "```";

/// Split a document into trimmed, non-empty blocks.
///
/// Any run of two or more newlines separates blocks.
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block. Rules are tried in order and the first match wins.
pub fn block_type(block: &str) -> BlockType {
    if heading_level(block).is_some() {
        BlockType::Heading
    } else if is_code(block) {
        BlockType::Code
    } else if block.lines().all(|line| line.starts_with('>')) {
        BlockType::Quote
    } else if block.lines().all(|line| unordered_marker(line).is_some()) {
        BlockType::UnorderedList
    } else if block
        .lines()
        .enumerate()
        .all(|(index, line)| ordered_marker(line, index + 1).is_some())
    {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}

/// Parse markdown text into a list of blocks
pub fn parse(markdown: &str) -> Result<Vec<Block>, RenderError> {
    markdown_to_blocks(markdown)
        .into_iter()
        .enumerate()
        .map(|(index, block)| {
            let kind = block_type(block);
            log::debug!("block {index}: {kind:?}");
            parse_block(block, kind)
        })
        .collect()
}

fn parse_block(block: &str, kind: BlockType) -> Result<Block, RenderError> {
    match kind {
        BlockType::Heading => {
            // Classification already guaranteed a level.
            let level = heading_level(block).unwrap_or(1);
            let content = text_to_spans(&block[usize::from(level) + 1..])?;
            Ok(Block::Heading { level, content })
        }
        BlockType::Code => {
            let lines: Vec<&str> = block.lines().collect();
            let interior = lines[1..lines.len() - 1].join("\n");
            Ok(Block::Code {
                content: text_to_spans(&interior)?,
            })
        }
        BlockType::Quote => {
            let text = block
                .lines()
                .map(|line| line.strip_prefix('>').unwrap_or(line))
                .collect::<Vec<_>>()
                .join("\n");
            Ok(Block::Quote {
                content: text_to_spans(&text)?,
            })
        }
        BlockType::UnorderedList => {
            let items = block
                .lines()
                .map(|line| list_item(unordered_marker(line).unwrap_or(line)))
                .collect::<Result<_, _>>()?;
            Ok(Block::List(List {
                ordered: false,
                items,
            }))
        }
        BlockType::OrderedList => {
            let items = block
                .lines()
                .enumerate()
                .map(|(index, line)| list_item(ordered_marker(line, index + 1).unwrap_or(line)))
                .collect::<Result<_, _>>()?;
            Ok(Block::List(List {
                ordered: true,
                items,
            }))
        }
        BlockType::Paragraph => Ok(Block::Paragraph {
            content: text_to_spans(block)?,
        }),
    }
}

fn list_item(text: &str) -> Result<ListItem, RenderError> {
    Ok(ListItem {
        content: text_to_spans(text)?,
    })
}

/// `1`–`6` hashes, a space, then at least one more character on the line.
fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }

    let mut rest = block[hashes..].chars();
    match (rest.next(), rest.next()) {
        (Some(' '), Some(c)) if c != '\n' => u8::try_from(hashes).ok(),
        _ => None,
    }
}

fn is_code(block: &str) -> bool {
    block.lines().nth(1).is_some() && block.starts_with(FENCE) && block.ends_with(FENCE)
}

/// Text after a `* ` or `- ` marker.
fn unordered_marker(line: &str) -> Option<&str> {
    line.strip_prefix("* ").or_else(|| line.strip_prefix("- "))
}

/// Text after the `n. ` marker, where `n` is the 1-based line number.
fn ordered_marker(line: &str, number: usize) -> Option<&str> {
    line.strip_prefix(&format!("{number}. "))
}
