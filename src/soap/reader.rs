//! Response envelope and WSDL decoding.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use url::Url;

use super::XmlNode;
use crate::error::{ComodoError, Result};

/// Namespace used when the WSDL does not declare one.
pub const DEFAULT_NAMESPACE: &str = "http://ssl.ws.epki.comodo.com/";

/// Where and how to reach the service, as advertised by its WSDL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    /// SOAP endpoint requests are POSTed to.
    pub endpoint: Url,
    /// Target namespace the operation elements are qualified with.
    pub namespace: String,
}

impl ServiceDescriptor {
    /// Descriptor derived from the WSDL URL alone.
    pub fn from_wsdl_url(wsdl_url: &Url) -> Self {
        let mut endpoint = wsdl_url.clone();
        endpoint.set_query(None);
        Self {
            endpoint,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

/// Parse an XML document into an element tree.
pub fn parse_document(xml: &str) -> Result<XmlNode> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => stack.push(start_node(&e)?),
            Ok(Event::Empty(e)) => {
                let node = start_node(&e)?;
                attach(&mut stack, &mut root, node);
            }
            Ok(Event::End(_)) => {
                let mut node = stack
                    .pop()
                    .ok_or_else(|| ComodoError::xml("unbalanced end tag"))?;
                if !node.children.is_empty() && node.text.trim().is_empty() {
                    node.text.clear();
                }
                attach(&mut stack, &mut root, node);
            }
            Ok(Event::Text(t)) => {
                if let Some(node) = stack.last_mut() {
                    let text = t.unescape().map_err(|e| ComodoError::xml(e.to_string()))?;
                    node.text.push_str(&text);
                }
            }
            Ok(Event::CData(c)) => {
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ComodoError::xml(format!(
                    "at byte {}: {}",
                    reader.error_position(),
                    e
                )))
            }
        }
    }

    if !stack.is_empty() {
        return Err(ComodoError::xml("unexpected end of document"));
    }
    root.ok_or_else(|| ComodoError::xml("document has no root element"))
}

fn start_node(e: &BytesStart<'_>) -> Result<XmlNode> {
    let mut node = XmlNode::new(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
    for attr in e.attributes() {
        let attr = attr.map_err(|err| ComodoError::xml(err.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| ComodoError::xml(err.to_string()))?
            .into_owned();
        node.attributes.push((key, value));
    }
    Ok(node)
}

fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => {
            if root.is_none() {
                *root = Some(node);
            }
        }
    }
}

/// Extract the `return` element of `operation` from a response envelope.
///
/// A `Fault` in the body is reported as [`ComodoError::SoapFault`].
pub fn parse_response(xml: &str, operation: &str) -> Result<XmlNode> {
    let envelope = parse_document(xml)?;
    if envelope.name != "Envelope" {
        return Err(ComodoError::malformed(format!(
            "expected SOAP Envelope, got <{}>",
            envelope.name
        )));
    }

    let body = envelope
        .child("Body")
        .ok_or_else(|| ComodoError::malformed("SOAP envelope has no Body"))?;

    if let Some(fault) = body.child("Fault") {
        return Err(ComodoError::soap_fault(
            fault.child_text("faultcode").unwrap_or_default().trim(),
            fault.child_text("faultstring").unwrap_or_default().trim(),
        ));
    }

    let wrapper = body
        .children
        .first()
        .ok_or_else(|| ComodoError::malformed("SOAP body is empty"))?;

    let expected = format!("{operation}Response");
    if wrapper.name != expected {
        tracing::warn!(
            "Expected <{}> in SOAP body, found <{}>",
            expected,
            wrapper.name
        );
    }

    wrapper.child("return").cloned().ok_or_else(|| {
        ComodoError::malformed(format!("<{}> has no return element", wrapper.name))
    })
}

/// Read the service address and target namespace from a WSDL document.
pub fn parse_wsdl(xml: &str, wsdl_url: &Url) -> Result<ServiceDescriptor> {
    let definitions = parse_document(xml)?;
    if definitions.name != "definitions" {
        return Err(ComodoError::malformed(format!(
            "expected WSDL definitions, got <{}>",
            definitions.name
        )));
    }

    let fallback = ServiceDescriptor::from_wsdl_url(wsdl_url);

    let namespace = match definitions.attribute("targetNamespace") {
        Some(ns) => ns.to_string(),
        None => {
            tracing::warn!("WSDL has no targetNamespace, using {}", DEFAULT_NAMESPACE);
            fallback.namespace
        }
    };

    let endpoint = match definitions
        .find("address")
        .and_then(|address| address.attribute("location"))
    {
        Some(location) => wsdl_url.join(location)?,
        None => {
            tracing::warn!("WSDL has no soap:address, using {}", fallback.endpoint);
            fallback.endpoint
        }
    };

    Ok(ServiceDescriptor {
        endpoint,
        namespace,
    })
}
