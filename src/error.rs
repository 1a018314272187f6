//! Error types for the sitegen-nodes library.

use crate::textnode::TextType;
use thiserror::Error;

/// Result type alias for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Html(#[from] HtmlError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while rendering an HTML node tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HtmlError {
    #[error("invalid HTML: no children")]
    NoChildren,

    #[error("invalid HTML: no tag")]
    NoTag,

    #[error("invalid HTML: leaf node has no value")]
    NoValue,

    #[error("invalid HTML: void element `{tag}` cannot have a value")]
    VoidWithValue { tag: String },
}

/// Errors raised while converting text nodes to HTML nodes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("invalid text type: `{0}`")]
    InvalidTextType(String),

    #[error("invalid text node: `{0}` requires a url")]
    MissingUrl(TextType),
}

/// Errors raised while splitting inline Markdown into text nodes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid Markdown syntax: unclosed delimiter `{delimiter}`")]
    UnclosedDelimiter { delimiter: String },
}

/// Errors raised while loading render configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Toml(String),
}
