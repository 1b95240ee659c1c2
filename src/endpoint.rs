/// An HTTP endpoint described by a WADL document.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Endpoint {
    /// The HTTP method, verbatim from the `name` attribute of the `method` element.
    pub method: String,

    /// The full path: the base of the document joined with the resource path.
    pub path: String,
}

impl Endpoint {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Endpoint {
            method: method.into(),
            path: path.into(),
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Join a resource path onto the base of a `resources` element.
///
/// An empty base leaves the resource path untouched. Otherwise slashes on
/// the seam are collapsed so that exactly one separates the two halves.
pub fn join_path(base: &str, path: &str) -> String {
    if base.is_empty() {
        path.to_string()
    } else {
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[test]
fn test_join_path() {
    assert_eq!(
        join_path("http://api.example.com/", "users"),
        "http://api.example.com/users"
    );
    assert_eq!(join_path("http://x/v1", "/items/"), "http://x/v1/items/");
    assert_eq!(join_path("http://x/v1//", "//items"), "http://x/v1/items");
    assert_eq!(join_path("http://x/v1", ""), "http://x/v1/");
}

#[test]
fn test_join_path_empty_base() {
    assert_eq!(join_path("", "users"), "users");
    assert_eq!(join_path("", "/users/"), "/users/");
    assert_eq!(join_path("", ""), "");
}

#[test]
fn test_endpoint_display() {
    let endpoint = Endpoint::new("GET", "http://api.example.com/users");
    assert_eq!(endpoint.to_string(), "GET http://api.example.com/users");
}
