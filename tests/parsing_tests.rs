use wadl_dump::{extract_file, Endpoint};

#[test]
fn extract_sample_wadl() {
    let endpoints = extract_file("tests/sample-wadl.xml").unwrap();

    let expected = vec![
        ("GET", "http://api.example.com/v1/widgets"),
        ("POST", "http://api.example.com/v1/widgets"),
        ("GET", "http://api.example.com/v1/{widgetId}"),
        ("PUT", "http://api.example.com/v1/{widgetId}"),
        ("PATCH", "http://api.example.com/v1/{widgetId}"),
        ("DELETE", "http://api.example.com/v1/{widgetId}"),
        ("HEAD", "http://api.example.com/v1/parts/"),
        ("OPTIONS", "http://api.example.com/v1/parts/"),
        ("GET", "http://api.example.com/v1/status"),
    ]
    .into_iter()
    .map(|(method, path)| Endpoint::new(method, path))
    .collect::<Vec<_>>();

    assert_eq!(endpoints, expected);
}

#[test]
fn extract_sample_wadl_twice() {
    let first = extract_file("tests/sample-wadl.xml").unwrap();
    let second = extract_file("tests/sample-wadl.xml").unwrap();
    assert_eq!(first, second);
}

#[test]
fn extract_missing_file() {
    assert!(extract_file("tests/does-not-exist.xml").is_err());
}
