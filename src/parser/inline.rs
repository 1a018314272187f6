//! Image and link recognition for inline Markdown.

use crate::textnode::{TextNode, TextType};
use nom::{
    branch::alt,
    bytes::complete::{is_not, take_while},
    character::complete::char,
    combinator::{opt, recognize},
    multi::many0,
    sequence::{delimited, pair, preceded},
    IResult,
};

/// Parse `[text]` with no nested brackets.
fn bracketed(input: &str) -> IResult<&str, &str> {
    delimited(char('['), take_while(|c: char| c != '[' && c != ']'), char(']'))(input)
}

/// Parse `(url)`, allowing one level of balanced parentheses in the url.
fn parenthesized(input: &str) -> IResult<&str, &str> {
    let nested = recognize(delimited(char('('), opt(is_not("()")), char(')')));
    delimited(char('('), recognize(many0(alt((is_not("()"), nested)))), char(')'))(input)
}

/// Parse an image (`![alt](url)`).
pub fn image(input: &str) -> IResult<&str, (&str, &str)> {
    preceded(char('!'), pair(bracketed, parenthesized))(input)
}

/// Parse a link (`[text](url)`).
pub fn link(input: &str) -> IResult<&str, (&str, &str)> {
    pair(bracketed, parenthesized)(input)
}

/// A recognized image or link and its byte range in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Embed<'a> {
    start: usize,
    end: usize,
    text: &'a str,
    url: &'a str,
}

fn find_embeds(input: &str, kind: TextType) -> Vec<Embed<'_>> {
    let marker = if kind == TextType::Image { '!' } else { '[' };

    let mut embeds = Vec::new();
    let mut offset = 0;

    while let Some(found) = input[offset..].find(marker) {
        let start = offset + found;

        // `[` directly after `!` belongs to an image
        if kind == TextType::Link && input[..start].ends_with('!') {
            offset = start + marker.len_utf8();
            continue;
        }

        let parsed = match kind {
            TextType::Image => image(&input[start..]),
            _ => link(&input[start..]),
        };

        match parsed {
            Ok((rest, (text, url))) => {
                let end = input.len() - rest.len();
                embeds.push(Embed {
                    start,
                    end,
                    text,
                    url,
                });
                offset = end;
            }
            Err(_) => offset = start + marker.len_utf8(),
        }
    }

    embeds
}

/// Extract `(alt, url)` pairs for every image in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    find_embeds(text, TextType::Image)
        .into_iter()
        .map(|e| (e.text.to_string(), e.url.to_string()))
        .collect()
}

/// Extract `(text, url)` pairs for every link in `text`, skipping images.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    find_embeds(text, TextType::Link)
        .into_iter()
        .map(|e| (e.text.to_string(), e.url.to_string()))
        .collect()
}

fn split_nodes_embedded(nodes: &[TextNode], kind: TextType) -> Vec<TextNode> {
    let mut result = Vec::with_capacity(nodes.len());

    for node in nodes {
        if node.text_type != TextType::Text {
            result.push(node.clone());
            continue;
        }

        let mut last = 0;
        for embed in find_embeds(&node.text, kind) {
            let before = &node.text[last..embed.start];
            if !before.is_empty() {
                result.push(TextNode::text(before));
            }
            result.push(TextNode::with_url(embed.text, kind, embed.url));
            last = embed.end;
        }

        let after = &node.text[last..];
        if !after.is_empty() {
            result.push(TextNode::text(after));
        }
    }

    result
}

/// Split plain text nodes around images.
pub fn split_nodes_image(nodes: &[TextNode]) -> Vec<TextNode> {
    split_nodes_embedded(nodes, TextType::Image)
}

/// Split plain text nodes around links.
pub fn split_nodes_link(nodes: &[TextNode]) -> Vec<TextNode> {
    split_nodes_embedded(nodes, TextType::Link)
}
