//! Semantic inline text spans.

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inline style of a text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TextType {
    /// Plain text
    Text,
    /// Bold text
    Bold,
    /// Italic text
    Italic,
    /// Inline code
    Code,
    /// A hyperlink, requires a url
    Link,
    /// An image, requires a url; the text is the alt text
    Image,
}

impl TextType {
    /// All kinds, in declaration order.
    pub const ALL: [TextType; 6] = [
        Self::Text,
        Self::Bold,
        Self::Italic,
        Self::Code,
        Self::Link,
        Self::Image,
    ];

    /// Get the canonical lowercase name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Code => "code",
            Self::Link => "link",
            Self::Image => "image",
        }
    }

    /// Check if nodes of this kind carry a url.
    pub fn requires_url(self) -> bool {
        matches!(self, Self::Link | Self::Image)
    }
}

impl fmt::Display for TextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextType {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "bold" => Ok(Self::Bold),
            "italic" => Ok(Self::Italic),
            "code" => Ok(Self::Code),
            "link" => Ok(Self::Link),
            "image" => Ok(Self::Image),
            _ => Err(ConvertError::InvalidTextType(s.to_string())),
        }
    }
}

impl TryFrom<String> for TextType {
    type Error = ConvertError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TextType> for String {
    fn from(value: TextType) -> Self {
        value.as_str().to_string()
    }
}

/// A span of text tagged with its inline style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    pub text: String,
    pub text_type: TextType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl TextNode {
    /// Create a node without a url.
    pub fn new(text: impl Into<String>, text_type: TextType) -> Self {
        Self {
            text: text.into(),
            text_type,
            url: None,
        }
    }

    /// Create a node that points at `url`.
    pub fn with_url(text: impl Into<String>, text_type: TextType, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_type,
            url: Some(url.into()),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, TextType::Text)
    }
}

impl fmt::Display for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TextNode({}, {}, {})",
            self.text,
            self.text_type,
            self.url.as_deref().unwrap_or("None")
        )
    }
}
