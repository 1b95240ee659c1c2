use std::process::Command;
use tempfile::TempDir;

fn wadl_dump(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_wadl-dump"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute wadl-dump")
}

#[test]
fn test_cli_lists_endpoints() {
    let output = wadl_dump(&["tests/sample-wadl.xml"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 9);
    assert!(stdout.contains("[GET]"));
    assert!(stdout.contains(" http://api.example.com/v1/widgets"));
    assert!(stdout.contains("\u{1b}["));
}

#[test]
fn test_cli_parse_error_on_stdout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.wadl");
    std::fs::write(&path, "<application><resources></application>").unwrap();

    let output = wadl_dump(&[path.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Error parsing WADL file: "));
    assert_eq!(lines[1], "No endpoints found or error in parsing.");
}

#[test]
fn test_cli_fetch_error_on_stdout() {
    let output = wadl_dump(&["http://"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Error fetching WADL file from URL: "));
    assert_eq!(lines[1], "Failed to retrieve WADL from URL.");
}

#[test]
fn test_cli_strict_exit_status() {
    let output = wadl_dump(&["--strict", "tests/does-not-exist.xml"]);
    assert!(!output.status.success());

    let output = wadl_dump(&["--strict", "tests/sample-wadl.xml"]);
    assert!(output.status.success());
}
