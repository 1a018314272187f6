//! Conversion from text spans to HTML leaves.

use crate::error::ConvertError;
use crate::htmlnode::{HtmlNode, LeafNode, Props};
use crate::textnode::{TextNode, TextType};

/// Convert a text node to the equivalent HTML leaf.
///
/// | kind   | tag    | value  | props                 |
/// |--------|--------|--------|-----------------------|
/// | text   | none   | text   | none                  |
/// | bold   | `b`    | text   | none                  |
/// | italic | `i`    | text   | none                  |
/// | code   | `code` | text   | none                  |
/// | link   | `a`    | text   | `href`                |
/// | image  | `img`  | none   | `src`, `alt`          |
pub fn text_node_to_html_node(node: &TextNode) -> Result<LeafNode, ConvertError> {
    tracing::trace!(text_type = %node.text_type, "Converting text node");

    let leaf = match node.text_type {
        TextType::Text => LeafNode::raw(node.text.as_str()),
        TextType::Bold => LeafNode::new("b", node.text.as_str()),
        TextType::Italic => LeafNode::new("i", node.text.as_str()),
        TextType::Code => LeafNode::new("code", node.text.as_str()),
        TextType::Link => {
            let url = required_url(node)?;
            LeafNode::new("a", node.text.as_str()).with_props(Props::from([(
                "href".to_string(),
                url.to_string(),
            )]))
        }
        TextType::Image => {
            let url = required_url(node)?;
            LeafNode::void("img").with_props(Props::from([
                ("src".to_string(), url.to_string()),
                ("alt".to_string(), node.text.clone()),
            ]))
        }
    };

    Ok(leaf)
}

/// Convert a sequence of text nodes, stopping at the first failure.
pub fn text_nodes_to_html_nodes(nodes: &[TextNode]) -> Result<Vec<HtmlNode>, ConvertError> {
    nodes
        .iter()
        .map(|node| text_node_to_html_node(node).map(HtmlNode::from))
        .collect()
}

fn required_url(node: &TextNode) -> Result<&str, ConvertError> {
    node.url.as_deref().ok_or_else(|| {
        tracing::debug!(text = %node.text, text_type = %node.text_type, "Text node is missing its url");
        ConvertError::MissingUrl(node.text_type)
    })
}
