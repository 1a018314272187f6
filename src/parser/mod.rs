//! Splitter for flat inline Markdown.
//!
//! Recognized syntax, applied in this order:
//!
//! - `` `code` ``
//! - `![alt](url)` images
//! - `[text](url)` links
//! - `**bold**`
//! - `_italic_`
//!
//! Each step only splits spans that are still plain text, so styles never nest.
//! An `_` with a letter or digit on both sides is literal, so `snake_case`
//! words stay plain text.

mod inline;

pub use inline::{
    extract_markdown_images, extract_markdown_links, image, link, split_nodes_image,
    split_nodes_link,
};

use crate::convert::text_nodes_to_html_nodes;
use crate::error::{ParseError, Result};
use crate::htmlnode::HtmlNode;
use crate::textnode::{TextNode, TextType};

/// Delimiters that never open or close inside a word.
const WORD_BOUND_DELIMITERS: &[&str] = &["_"];

fn is_intraword(text: &str, start: usize, len: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[start + len..].chars().next();
    matches!((before, after), (Some(b), Some(a)) if b.is_alphanumeric() && a.is_alphanumeric())
}

/// Split `text` at every occurrence of `delimiter` that may open or close a span.
fn split_on_delimiter<'a>(text: &'a str, delimiter: &str) -> Vec<&'a str> {
    let word_bound = WORD_BOUND_DELIMITERS.contains(&delimiter);

    let mut parts = Vec::new();
    let mut last = 0;
    for (start, _) in text.match_indices(delimiter) {
        if word_bound && is_intraword(text, start, delimiter.len()) {
            continue;
        }
        parts.push(&text[last..start]);
        last = start + delimiter.len();
    }
    parts.push(&text[last..]);
    parts
}

/// Split plain text nodes on a paired delimiter such as `**`.
///
/// Text between each pair of delimiters becomes a node of `text_type`.
/// Empty segments are dropped and nodes that are not plain text pass through.
/// `_` inside a word is not a delimiter.
pub fn split_nodes_delimiter(
    nodes: &[TextNode],
    delimiter: &str,
    text_type: TextType,
) -> std::result::Result<Vec<TextNode>, ParseError> {
    if delimiter.is_empty() {
        return Ok(nodes.to_vec());
    }

    let mut result = Vec::with_capacity(nodes.len());

    for node in nodes {
        if node.text_type != TextType::Text {
            result.push(node.clone());
            continue;
        }

        let parts = split_on_delimiter(&node.text, delimiter);
        if parts.len() % 2 == 0 {
            tracing::debug!(delimiter, text = %node.text, "Unclosed inline delimiter");
            return Err(ParseError::UnclosedDelimiter {
                delimiter: delimiter.to_string(),
            });
        }

        for (i, part) in parts.iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                result.push(TextNode::text(*part));
            } else {
                result.push(TextNode::new(*part, text_type));
            }
        }
    }

    Ok(result)
}

/// Split a run of inline Markdown into styled text nodes.
pub fn text_to_textnodes(text: &str) -> std::result::Result<Vec<TextNode>, ParseError> {
    let nodes = vec![TextNode::text(text)];
    let nodes = split_nodes_delimiter(&nodes, "`", TextType::Code)?;
    let nodes = split_nodes_image(&nodes);
    let nodes = split_nodes_link(&nodes);
    let nodes = split_nodes_delimiter(&nodes, "**", TextType::Bold)?;
    let nodes = split_nodes_delimiter(&nodes, "_", TextType::Italic)?;

    tracing::trace!(node_count = nodes.len(), "Split inline text");
    Ok(nodes)
}

/// Split a run of inline Markdown and convert each span to an HTML leaf.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    let nodes = text_to_textnodes(text)?;
    Ok(text_nodes_to_html_nodes(&nodes)?)
}
