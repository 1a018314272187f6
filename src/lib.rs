//! # sitegen-nodes
//!
//! The node model of a static site generator: semantic text spans, a renderable
//! HTML tree, and the conversion between them.
//!
//! ## Pipeline
//!
//! 1. Inline Markdown is split into [`TextNode`]s, each tagged with a [`TextType`]
//! 2. Each text node is converted to a [`LeafNode`]
//! 3. Leaves are collected under a [`ParentNode`] and rendered with [`Render::to_html`]
//!
//! ## Quick Start
//!
//! ```rust
//! use sitegen_nodes::{render_inline, RenderConfig};
//!
//! let html = render_inline("Some **bold** and a [link](https://example.com)", &RenderConfig::default()).unwrap();
//! assert_eq!(html, r#"<p>Some <b>bold</b> and a <a href="https://example.com">link</a></p>"#);
//! ```
//!
//! Trees can also be built by hand:
//!
//! ```rust
//! use sitegen_nodes::{LeafNode, ParentNode, Render};
//!
//! let node = ParentNode::new(
//!     "p",
//!     vec![
//!         LeafNode::new("b", "Bold text").into(),
//!         LeafNode::raw("Normal text").into(),
//!     ],
//! );
//! assert_eq!(node.to_html().unwrap(), "<p><b>Bold text</b>Normal text</p>");
//! ```
//!
//! ## Inline Syntax
//!
//! - Code: `` `code` ``
//! - Bold: `**bold**`
//! - Italic: `_italic_`
//! - Link: `[text](url)`
//! - Image: `![alt](url)`
//!
//! Styles do not nest. Text and attribute values are not escaped.
//!
//! ## Features
//!
//! - `wasm`: Enable WebAssembly bindings (requires `wasm-bindgen`)

pub mod config;
pub mod convert;
pub mod error;
pub mod htmlnode;
pub mod parser;
pub mod textnode;

// WASM module (only with feature)
#[cfg(feature = "wasm")]
pub mod wasm;

// Convenience re-exports
pub use config::{RenderConfig, VoidStyle};
pub use convert::{text_node_to_html_node, text_nodes_to_html_nodes};
pub use error::{ConfigError, ConvertError, Error, HtmlError, ParseError, Result};
pub use htmlnode::{is_void_element, props_to_html, HtmlNode, LeafNode, ParentNode, Props, Render};
pub use parser::{
    extract_markdown_images, extract_markdown_links, split_nodes_delimiter, split_nodes_image,
    split_nodes_link, text_to_children, text_to_textnodes,
};
pub use textnode::{TextNode, TextType};

/// Split, convert, and render inline Markdown in one step.
///
/// The children are wrapped in `config.wrapper_tag`.
///
/// # Example
///
/// ```rust
/// use sitegen_nodes::{render_inline, RenderConfig};
///
/// let html = render_inline("_hi_", &RenderConfig::default()).unwrap();
/// assert_eq!(html, "<p><i>hi</i></p>");
/// ```
pub fn render_inline(text: &str, config: &RenderConfig) -> Result<String> {
    let children = text_to_children(text)?;
    let node = ParentNode::new(config.wrapper_tag.as_str(), children);
    Ok(node.to_html_with(config.void_style)?)
}
