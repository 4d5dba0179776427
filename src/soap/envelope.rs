//! Request envelope encoding.

use quick_xml::escape::escape;

use super::{Param, Value, XmlNode};

/// SOAP 1.1 envelope namespace.
pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Encode a document/literal request for `operation` in namespace `tns`.
///
/// The operation element is qualified with `tns`; parameters are unqualified.
pub fn encode_request(tns: &str, operation: &str, params: &[Param]) -> String {
    let mut out = String::with_capacity(512);
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    out.push_str(&format!(
        r#"<soapenv:Envelope xmlns:soapenv="{}" xmlns:tns="{}">"#,
        SOAP_ENV_NS,
        escape(tns)
    ));
    out.push_str("<soapenv:Header/><soapenv:Body>");
    out.push_str(&format!("<tns:{operation}>"));
    for param in params {
        write_param(&mut out, param);
    }
    out.push_str(&format!("</tns:{operation}>"));
    out.push_str("</soapenv:Body></soapenv:Envelope>");
    out
}

fn write_param(out: &mut String, param: &Param) {
    let name = param.name;
    match &param.value {
        Value::Text(text) => {
            out.push_str(&format!("<{name}>{}</{name}>", escape(text.as_str())));
        }
        Value::Int(n) => {
            out.push_str(&format!("<{name}>{n}</{name}>"));
        }
        Value::Struct(fields) => {
            out.push_str(&format!("<{name}>"));
            for field in fields {
                write_param(out, field);
            }
            out.push_str(&format!("</{name}>"));
        }
        Value::Node(node) => write_node_as(out, name, node),
    }
}

fn write_node_as(out: &mut String, name: &str, node: &XmlNode) {
    out.push_str(&format!("<{name}>"));
    if node.children.is_empty() {
        out.push_str(&escape(node.text.as_str()));
    }
    for child in &node.children {
        write_node_as(out, &child.name, child);
    }
    out.push_str(&format!("</{name}>"));
}
