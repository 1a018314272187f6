//! Renderable HTML node tree.
//!
//! A tree is built from two node kinds:
//!
//! - [`LeafNode`]: an element (or bare text) holding literal content
//! - [`ParentNode`]: an element holding child nodes, rendered recursively
//!
//! Both implement [`Render`], which provides `to_html` and `props_to_html`.
//! Attribute values are written as given; no escaping is performed.

use crate::error::HtmlError;
use indexmap::IndexMap;
use serde::Deserialize;

/// Element attributes, kept in insertion order.
pub type Props = IndexMap<String, String>;

/// Elements that never have content or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Check if `tag` names a void element.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_ascii_lowercase().as_str())
}

/// How void elements are closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoidStyle {
    /// `<img src="a.png">`
    #[default]
    Html,
    /// `<img src="a.png" />`
    Xhtml,
}

/// Render attributes as ` key="value"` pairs.
pub fn props_to_html(props: Option<&Props>) -> String {
    let mut out = String::new();
    write_props(props, &mut out);
    out
}

fn write_props(props: Option<&Props>, out: &mut String) {
    for (key, value) in props.into_iter().flatten() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

fn write_open_tag(tag: &str, props: Option<&Props>, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    write_props(props, out);
    out.push('>');
}

fn write_close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// A node that can be rendered to HTML markup.
pub trait Render {
    /// Attributes of this node.
    fn props(&self) -> Option<&Props>;

    /// Append this node's markup to `out`.
    fn write_html(&self, out: &mut String, style: VoidStyle) -> Result<(), HtmlError>;

    /// Render this node and its descendants with the default void style.
    fn to_html(&self) -> Result<String, HtmlError> {
        self.to_html_with(VoidStyle::default())
    }

    /// Render this node and its descendants.
    fn to_html_with(&self, style: VoidStyle) -> Result<String, HtmlError> {
        let mut out = String::new();
        self.write_html(&mut out, style)?;
        Ok(out)
    }

    /// Render this node's attributes.
    fn props_to_html(&self) -> String {
        props_to_html(self.props())
    }
}

/// An element with literal content and no children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    /// Element name; `None` or empty renders the bare value
    pub tag: Option<String>,
    /// Literal content; may only be absent on void elements
    pub value: Option<String>,
    pub props: Option<Props>,
}

impl LeafNode {
    /// Create an element leaf.
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            props: None,
        }
    }

    /// Create a leaf that renders as bare text.
    pub fn raw(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            props: None,
        }
    }

    /// Create a void element leaf such as `img` or `br`.
    pub fn void(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: None,
            props: None,
        }
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = Some(props);
        self
    }

    /// Append one attribute.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props
            .get_or_insert_with(Props::new)
            .insert(key.into(), value.into());
        self
    }
}

impl Render for LeafNode {
    fn props(&self) -> Option<&Props> {
        self.props.as_ref()
    }

    fn write_html(&self, out: &mut String, style: VoidStyle) -> Result<(), HtmlError> {
        // An empty tag renders like an absent one
        let Some(tag) = self.tag.as_deref().filter(|t| !t.is_empty()) else {
            let value = self.value.as_deref().ok_or_else(|| {
                tracing::debug!("Bare leaf node has no value");
                HtmlError::NoValue
            })?;
            out.push_str(value);
            return Ok(());
        };

        if is_void_element(tag) {
            if self.value.as_deref().is_some_and(|v| !v.is_empty()) {
                tracing::debug!(tag, "Void element carries a value");
                return Err(HtmlError::VoidWithValue {
                    tag: tag.to_string(),
                });
            }
            out.push('<');
            out.push_str(tag);
            write_props(self.props.as_ref(), out);
            out.push_str(match style {
                VoidStyle::Html => ">",
                VoidStyle::Xhtml => " />",
            });
            return Ok(());
        }

        let value = self.value.as_deref().ok_or_else(|| {
            tracing::debug!(tag, "Leaf node has no value");
            HtmlError::NoValue
        })?;
        write_open_tag(tag, self.props.as_ref(), out);
        out.push_str(value);
        write_close_tag(tag, out);
        Ok(())
    }
}

/// An element containing other nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentNode {
    /// Element name; required and non-empty for rendering
    pub tag: Option<String>,
    /// Child nodes; required for rendering, may be empty
    pub children: Option<Vec<HtmlNode>>,
    pub props: Option<Props>,
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            children: Some(children),
            props: None,
        }
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = Some(props);
        self
    }

    /// Append one attribute.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props
            .get_or_insert_with(Props::new)
            .insert(key.into(), value.into());
        self
    }
}

impl Render for ParentNode {
    fn props(&self) -> Option<&Props> {
        self.props.as_ref()
    }

    fn write_html(&self, out: &mut String, style: VoidStyle) -> Result<(), HtmlError> {
        let Some(children) = self.children.as_ref() else {
            tracing::debug!(tag = ?self.tag, "Parent node has no children");
            return Err(HtmlError::NoChildren);
        };
        let Some(tag) = self.tag.as_deref().filter(|t| !t.is_empty()) else {
            tracing::debug!(child_count = children.len(), "Parent node has no tag");
            return Err(HtmlError::NoTag);
        };

        write_open_tag(tag, self.props.as_ref(), out);
        for child in children {
            child.write_html(out, style)?;
        }
        write_close_tag(tag, out);
        Ok(())
    }
}

/// Any node of an HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf(leaf) => leaf.tag.as_deref(),
            Self::Parent(parent) => parent.tag.as_deref(),
        }
    }
}

impl Render for HtmlNode {
    fn props(&self) -> Option<&Props> {
        match self {
            Self::Leaf(leaf) => leaf.props(),
            Self::Parent(parent) => parent.props(),
        }
    }

    fn write_html(&self, out: &mut String, style: VoidStyle) -> Result<(), HtmlError> {
        match self {
            Self::Leaf(leaf) => leaf.write_html(out, style),
            Self::Parent(parent) => parent.write_html(out, style),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(node: LeafNode) -> Self {
        Self::Leaf(node)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(node: ParentNode) -> Self {
        Self::Parent(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn link_props() -> Props {
        Props::from([
            ("href".to_string(), "https://www.google.com".to_string()),
            ("target".to_string(), "_blank".to_string()),
        ])
    }

    #[test]
    fn test_props_none() {
        let node = LeafNode::new("a", "text value");
        assert_eq!(node.props_to_html(), "");
        assert_eq!(props_to_html(None), "");
    }

    #[test]
    fn test_props_empty() {
        let node = LeafNode::new("a", "text value").with_props(Props::new());
        assert_eq!(node.props_to_html(), "");
    }

    #[test]
    fn test_props_dict() {
        let node = LeafNode::new("a", "text value").with_props(link_props());
        assert_eq!(
            node.props_to_html(),
            r#" href="https://www.google.com" target="_blank""#
        );
    }

    #[test]
    fn test_props_keep_insertion_order() {
        let node = LeafNode::new("div", "x")
            .with_prop("z", "1")
            .with_prop("a", "2")
            .with_prop("m", "3");
        let html = node.props_to_html();
        assert_eq!(html, r#" z="1" a="2" m="3""#);
        assert_eq!(html.matches("=\"").count(), 3);
    }

    #[test]
    fn test_props_not_escaped() {
        let node = LeafNode::new("a", "x").with_prop("title", "a<b>&c");
        assert_eq!(node.props_to_html(), r#" title="a<b>&c""#);
    }

    #[test]
    fn test_leaf_to_html_p() {
        let node = LeafNode::new("p", "Hello, world!");
        assert_eq!(node.to_html().unwrap(), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_leaf_to_html_a() {
        let node = LeafNode::new("a", "Click me!").with_prop("href", "https://www.google.com");
        assert_eq!(
            node.to_html().unwrap(),
            r#"<a href="https://www.google.com">Click me!</a>"#
        );
    }

    #[test]
    fn test_leaf_to_html_no_tag() {
        let node = LeafNode::raw("Hello, world!");
        assert_eq!(node.to_html().unwrap(), "Hello, world!");
    }

    #[test]
    fn test_leaf_without_value() {
        let node = LeafNode {
            tag: Some("p".to_string()),
            value: None,
            props: None,
        };
        assert_eq!(node.to_html(), Err(HtmlError::NoValue));

        let bare = LeafNode::default();
        assert_eq!(bare.to_html(), Err(HtmlError::NoValue));
    }

    #[test]
    fn test_leaf_empty_value() {
        let node = LeafNode::new("b", "");
        assert_eq!(node.to_html().unwrap(), "<b></b>");
    }

    #[test]
    fn test_void_element_styles() {
        let node = LeafNode::void("img")
            .with_prop("src", "a.png")
            .with_prop("alt", "A");
        assert_eq!(node.to_html().unwrap(), r#"<img src="a.png" alt="A">"#);
        assert_eq!(
            node.to_html_with(VoidStyle::Xhtml).unwrap(),
            r#"<img src="a.png" alt="A" />"#
        );
        assert_eq!(LeafNode::void("br").to_html().unwrap(), "<br>");
    }

    #[test]
    fn test_void_element_with_value() {
        let node = LeafNode::new("br", "text");
        assert_eq!(
            node.to_html(),
            Err(HtmlError::VoidWithValue {
                tag: "br".to_string()
            })
        );
        assert_eq!(LeafNode::new("hr", "").to_html().unwrap(), "<hr>");
    }

    #[test]
    fn test_is_void_element() {
        assert!(is_void_element("img"));
        assert!(is_void_element("BR"));
        assert!(!is_void_element("a"));
        assert!(!is_void_element("p"));
    }

    #[test]
    fn test_to_html_with_children() {
        let child = LeafNode::new("span", "child");
        let parent = ParentNode::new("div", vec![child.into()]);
        assert_eq!(parent.to_html().unwrap(), "<div><span>child</span></div>");
    }

    #[test]
    fn test_to_html_with_grandchildren() {
        let grandchild = LeafNode::new("b", "grandchild");
        let child = ParentNode::new("span", vec![grandchild.into()]);
        let parent = ParentNode::new("div", vec![child.into()]);
        assert_eq!(
            parent.to_html().unwrap(),
            "<div><span><b>grandchild</b></span></div>"
        );
    }

    #[test]
    fn test_to_html_many_children() {
        let node = ParentNode::new(
            "p",
            vec![
                LeafNode::new("b", "Bold text").into(),
                LeafNode::raw("Normal text").into(),
                LeafNode::new("i", "italic text").into(),
                LeafNode::raw("Normal text").into(),
            ],
        );
        assert_eq!(
            node.to_html().unwrap(),
            "<p><b>Bold text</b>Normal text<i>italic text</i>Normal text</p>"
        );
    }

    #[test]
    fn test_parent_with_props() {
        let node = ParentNode::new("nav", vec![LeafNode::raw("x").into()]).with_prop("class", "menu");
        assert_eq!(node.to_html().unwrap(), r#"<nav class="menu">x</nav>"#);
    }

    #[test]
    fn test_parent_concatenates_child_html() {
        let children: Vec<HtmlNode> = vec![
            LeafNode::new("code", "x").into(),
            LeafNode::raw(" and ").into(),
            LeafNode::void("img").with_prop("src", "y.png").into(),
        ];
        let expected: String = children.iter().map(|c| c.to_html().unwrap()).collect();
        let node = ParentNode::new("p", children);
        assert_eq!(node.to_html().unwrap(), format!("<p>{expected}</p>"));
    }

    #[test]
    fn test_deep_nesting() {
        let mut node: HtmlNode = LeafNode::raw("core").into();
        for _ in 0..200 {
            node = ParentNode::new("div", vec![node]).into();
        }
        let html = node.to_html().unwrap();
        assert!(html.starts_with("<div><div>"));
        assert_eq!(html.matches("</div>").count(), 200);
    }

    #[test]
    fn test_parent_no_children() {
        let node = ParentNode {
            tag: Some("p".to_string()),
            children: None,
            props: None,
        };
        let err = node.to_html().unwrap_err();
        assert_eq!(err, HtmlError::NoChildren);
        assert_eq!(err.to_string(), "invalid HTML: no children");
    }

    #[test]
    fn test_parent_no_tag() {
        let node = ParentNode {
            tag: None,
            children: Some(vec![LeafNode::raw("x").into()]),
            props: None,
        };
        let err = node.to_html().unwrap_err();
        assert_eq!(err, HtmlError::NoTag);
        assert_eq!(err.to_string(), "invalid HTML: no tag");
    }

    #[test]
    fn test_parent_empty_tag() {
        let node = ParentNode::new("", vec![LeafNode::raw("x").into()]);
        assert_eq!(node.to_html(), Err(HtmlError::NoTag));
    }

    #[test]
    fn test_leaf_empty_tag_renders_bare_value() {
        let node = LeafNode::new("", "x");
        assert_eq!(node.to_html().unwrap(), "x");
    }

    #[test]
    fn test_parent_missing_both_reports_children() {
        assert_eq!(ParentNode::default().to_html(), Err(HtmlError::NoChildren));
    }

    #[test]
    fn test_parent_empty_children() {
        let node = ParentNode::new("ul", Vec::new());
        assert_eq!(node.to_html().unwrap(), "<ul></ul>");
    }

    #[test]
    fn test_error_in_child_aborts_render() {
        let node = ParentNode::new(
            "div",
            vec![
                LeafNode::raw("ok").into(),
                ParentNode {
                    tag: None,
                    children: Some(Vec::new()),
                    props: None,
                }
                .into(),
            ],
        );
        assert_eq!(node.to_html(), Err(HtmlError::NoTag));
    }

    #[test]
    fn test_html_node_tag() {
        let node: HtmlNode = LeafNode::new("b", "x").into();
        assert_eq!(node.tag(), Some("b"));
        let node: HtmlNode = LeafNode::raw("x").into();
        assert_eq!(node.tag(), None);
    }
}
