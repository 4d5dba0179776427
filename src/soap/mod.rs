//! Minimal SOAP 1.1 document/literal binding.
//!
//! Only what the Comodo SSL service needs: named parameters are wrapped in
//! an envelope, and the operation's `return` element is handed back as a
//! generic [`XmlNode`] tree for the operation modules to interpret.
//! Namespace prefixes are dropped when reading; every name is a local name.

mod envelope;
mod reader;

pub use envelope::{encode_request, SOAP_ENV_NS};
pub use reader::{parse_document, parse_response, parse_wsdl, ServiceDescriptor};

use crate::error::{ComodoError, Result};

/// An element read from (or echoed back to) the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    /// Local name, without namespace prefix.
    pub name: String,
    /// Attributes as `(local name, value)`.
    pub attributes: Vec<(String, String)>,
    /// Character content. Whitespace between child elements is discarded.
    pub text: String,
    /// Child elements in document order.
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// Create an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a leaf element with text content.
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    /// Append a child element.
    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    /// First child with the given local name.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children with the given local name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text of the first child with the given local name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|c| c.text.as_str())
    }

    /// Attribute value by local name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Depth-first search for a descendant (or self) with the given name.
    pub fn find(&self, name: &str) -> Option<&XmlNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    /// Parse the element's text as an integer.
    pub fn as_i64(&self) -> Result<i64> {
        self.text.trim().parse().map_err(|_| {
            ComodoError::malformed(format!(
                "<{}> is not an integer: '{}'",
                self.name, self.text
            ))
        })
    }
}

/// A value passed as an operation parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Text content, escaped on output.
    Text(String),
    /// Integer content.
    Int(i64),
    /// Nested parameters.
    Struct(Vec<Param>),
    /// An element previously returned by the service, echoed back under the
    /// parameter's name.
    Node(XmlNode),
}

/// A named operation parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Element name.
    pub name: &'static str,
    /// Element content.
    pub value: Value,
}

impl Param {
    /// Text parameter.
    pub fn text(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: Value::Text(value.into()),
        }
    }

    /// Integer parameter.
    pub fn int(name: &'static str, value: impl Into<i64>) -> Self {
        Self {
            name,
            value: Value::Int(value.into()),
        }
    }

    /// Structured parameter.
    pub fn structure(name: &'static str, fields: Vec<Param>) -> Self {
        Self {
            name,
            value: Value::Struct(fields),
        }
    }

    /// Echo of a node the service returned earlier.
    pub fn node(name: &'static str, node: XmlNode) -> Self {
        Self {
            name,
            value: Value::Node(node),
        }
    }
}
