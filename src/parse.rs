use crate::endpoint::{join_path, Endpoint};
use std::io::Read;
use xmltree::{Element, XMLNode};

pub const WADL_NS: &str = "http://wadl.dev.java.net/2009/02";

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Xml(xmltree::ParseError),
    /// The document does not have exactly one root element.
    RootElements(usize),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<xmltree::ParseError> for Error {
    fn from(e: xmltree::ParseError) -> Self {
        Error::Xml(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self {
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Xml(e) => write!(f, "XML error: {}", e),
            Error::RootElements(n) => {
                write!(f, "XML error: expected one root element, found {}", n)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Xml(e) => Some(e),
            Error::RootElements(_) => None,
        }
    }
}

fn is_wadl(element: &Element, name: &str) -> bool {
    element.name == name && element.namespace.as_deref() == Some(WADL_NS)
}

fn attribute<'a>(element: &'a Element, name: &str) -> &'a str {
    element
        .attributes
        .get(name)
        .map(|s| s.as_str())
        .unwrap_or("")
}

/// All descendants of `root` in document order, not including `root` itself.
fn descendants(root: &Element) -> Vec<&Element> {
    fn walk<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
        for node in &element.children {
            if let Some(child) = node.as_element() {
                out.push(child);
                walk(child, out);
            }
        }
    }

    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

fn parse_methods(resource_element: &Element) -> Vec<&str> {
    let mut methods = Vec::new();

    for method_node in &resource_element.children {
        if let Some(element) = method_node.as_element() {
            if is_wadl(element, "method") {
                methods.push(attribute(element, "name"));
            }
        }
    }

    methods
}

#[test]
fn test_parse_methods_direct_children_only() {
    let xml = r#"
        <resource xmlns="http://wadl.dev.java.net/2009/02" path="users">
            <method name="GET"/>
            <resource path="{id}">
                <method name="DELETE"/>
            </resource>
            <method/>
            <method name="POST"/>
        </resource>
    "#;
    let element = Element::parse(xml.as_bytes()).unwrap();
    assert_eq!(parse_methods(&element), vec!["GET", "", "POST"]);
}

#[test]
fn test_parse_methods_foreign_namespace() {
    let xml = r#"
        <resource xmlns="http://wadl.dev.java.net/2009/02" xmlns:x="urn:other" path="users">
            <x:method name="GET"/>
            <method name="PUT"/>
        </resource>
    "#;
    let element = Element::parse(xml.as_bytes()).unwrap();
    assert_eq!(parse_methods(&element), vec!["PUT"]);
}

fn parse_base(root: &Element) -> &str {
    descendants(root)
        .into_iter()
        .find(|e| is_wadl(e, "resources"))
        .map(|e| attribute(e, "base"))
        .unwrap_or("")
}

#[test]
fn test_parse_base_first_resources_wins() {
    let xml = r#"
        <application xmlns="http://wadl.dev.java.net/2009/02">
            <resources base="http://one/"/>
            <resources base="http://two/"/>
        </application>
    "#;
    let root = Element::parse(xml.as_bytes()).unwrap();
    assert_eq!(parse_base(&root), "http://one/");
}

#[test]
fn test_parse_base_missing() {
    let xml = r#"
        <application xmlns="http://wadl.dev.java.net/2009/02">
            <resources/>
        </application>
    "#;
    let root = Element::parse(xml.as_bytes()).unwrap();
    assert_eq!(parse_base(&root), "");

    let root = Element::parse(r#"<application xmlns="http://wadl.dev.java.net/2009/02"/>"#.as_bytes()).unwrap();
    assert_eq!(parse_base(&root), "");
}

/// Flatten a parsed WADL document into its endpoints.
///
/// Every `resource` element anywhere below the root contributes one endpoint
/// per `method` element among its direct children, in document order.
pub fn endpoints(root: &Element) -> Vec<Endpoint> {
    let base = parse_base(root);
    log::debug!("Using base {:?}", base);

    let mut endpoints = Vec::new();

    for resource in descendants(root)
        .into_iter()
        .filter(|e| is_wadl(e, "resource"))
    {
        let path = attribute(resource, "path");
        for name in parse_methods(resource) {
            endpoints.push(Endpoint::new(name, join_path(base, path)));
        }
    }

    endpoints
}

pub fn extract<R: Read>(reader: R) -> Result<Vec<Endpoint>, Error> {
    let mut roots = Element::parse_all(reader)
        .map_err(Error::Xml)?
        .into_iter()
        .filter_map(|node| match node {
            XMLNode::Element(e) => Some(e),
            _ => None,
        })
        .collect::<Vec<_>>();
    if roots.len() != 1 {
        return Err(Error::RootElements(roots.len()));
    }
    let root = roots.remove(0);

    let endpoints = endpoints(&root);
    log::info!("Found {} endpoints", endpoints.len());

    Ok(endpoints)
}

pub fn extract_file<P: AsRef<std::path::Path>>(path: P) -> Result<Vec<Endpoint>, Error> {
    let file = std::fs::File::open(path).map_err(Error::Io)?;
    extract(std::io::BufReader::new(file))
}

pub fn extract_string(s: &str) -> Result<Vec<Endpoint>, Error> {
    extract(s.as_bytes())
}

pub fn extract_bytes(bytes: &[u8]) -> Result<Vec<Endpoint>, Error> {
    extract(bytes)
}

/// Extract the endpoints from the file at `path`, never failing.
///
/// A failure is printed on stdout and yields an empty list. The error is
/// handed back as well so callers can pick an exit status.
pub fn extract_or_report<P: AsRef<std::path::Path>>(
    path: P,
) -> (Vec<Endpoint>, Option<crate::Error>) {
    match extract_file(path) {
        Ok(endpoints) => (endpoints, None),
        Err(e) => {
            let e = crate::Error::from(e);
            println!("{}", e);
            (Vec::new(), Some(e))
        }
    }
}

#[test]
fn test_endpoints_nested() {
    let xml = r#"
        <application xmlns="http://wadl.dev.java.net/2009/02">
            <resources base="http://api.example.com/">
                <resource path="users">
                    <method name="GET"/>
                    <resource path="{id}">
                        <method name="GET"/>
                        <method name="DELETE"/>
                    </resource>
                    <method name="POST"/>
                </resource>
            </resources>
        </application>
    "#;
    let root = Element::parse(xml.as_bytes()).unwrap();
    assert_eq!(
        endpoints(&root),
        vec![
            Endpoint::new("GET", "http://api.example.com/users"),
            Endpoint::new("POST", "http://api.example.com/users"),
            Endpoint::new("GET", "http://api.example.com/{id}"),
            Endpoint::new("DELETE", "http://api.example.com/{id}"),
        ]
    );
}

#[test]
fn test_endpoints_root_is_not_searched() {
    let xml = r#"
        <resource xmlns="http://wadl.dev.java.net/2009/02" path="top">
            <method name="GET"/>
        </resource>
    "#;
    let root = Element::parse(xml.as_bytes()).unwrap();
    assert!(endpoints(&root).is_empty());
}
