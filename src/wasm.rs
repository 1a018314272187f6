//! WebAssembly bindings for JavaScript/TypeScript.

#![cfg(feature = "wasm")]

use crate::config::{RenderConfig, VoidStyle};
use crate::parser::text_to_textnodes;
use wasm_bindgen::prelude::*;

/// Render inline Markdown to HTML.
///
/// # Arguments
///
/// * `input` - The inline Markdown text.
/// * `options` - Optional configuration object.
#[wasm_bindgen(js_name = renderInline)]
pub fn render_inline(input: &str, options: Option<RenderOptions>) -> Result<String, JsError> {
    let config = options.map(|o| o.to_render_config()).unwrap_or_default();
    crate::render_inline(input, &config).map_err(|e| JsError::new(&e.to_string()))
}

/// Count the styled spans in inline Markdown.
///
/// Useful for debugging how text is split.
#[wasm_bindgen(js_name = countSpans)]
pub fn count_spans(input: &str) -> Result<usize, JsError> {
    let nodes = text_to_textnodes(input).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(nodes.len())
}

/// Configuration options for rendering.
#[wasm_bindgen]
pub struct RenderOptions {
    wrapper_tag: String,
    xhtml: bool,
}

#[wasm_bindgen]
impl RenderOptions {
    /// Create a new options object with defaults.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            wrapper_tag: "p".to_string(),
            xhtml: false,
        }
    }

    /// Set the element wrapped around the output.
    #[wasm_bindgen(js_name = setWrapperTag)]
    pub fn set_wrapper_tag(&mut self, tag: &str) {
        self.wrapper_tag = tag.to_string();
    }

    /// Close void elements XHTML style (`<img />`).
    #[wasm_bindgen(js_name = setXhtml)]
    pub fn set_xhtml(&mut self, xhtml: bool) {
        self.xhtml = xhtml;
    }

    fn to_render_config(&self) -> RenderConfig {
        RenderConfig {
            wrapper_tag: self.wrapper_tag.clone(),
            void_style: if self.xhtml {
                VoidStyle::Xhtml
            } else {
                VoidStyle::Html
            },
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the library version.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
