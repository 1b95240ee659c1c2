use crate::endpoint::Endpoint;
use colored::{Color, ColoredString, Colorize};
use std::collections::HashMap;
use std::io::Write;

pub const NO_ENDPOINTS: &str = "No endpoints found or error in parsing.";

pub const DEFAULT_COLOR: Color = Color::BrightWhite;

lazy_static::lazy_static! {
    static ref METHOD_COLORS: HashMap<&'static str, Color> = {
        let mut m = HashMap::new();
        m.insert("GET", Color::BrightGreen);
        m.insert("POST", Color::BrightBlue);
        m.insert("PUT", Color::BrightYellow);
        m.insert("DELETE", Color::BrightRed);
        m.insert("PATCH", Color::BrightMagenta);
        m.insert("HEAD", Color::BrightCyan);
        m
    };
}

/// The display color for an HTTP method. Lookup is case sensitive.
pub fn method_color(method: &str) -> Color {
    METHOD_COLORS.get(method).copied().unwrap_or(DEFAULT_COLOR)
}

pub fn colored_method(method: &str) -> ColoredString {
    format!("[{}]", method).color(method_color(method))
}

/// Write one line per endpoint, or a notice if there are none.
pub fn render<W: Write>(endpoints: &[Endpoint], out: &mut W) -> std::io::Result<()> {
    if endpoints.is_empty() {
        return writeln!(out, "{}", NO_ENDPOINTS);
    }

    for endpoint in endpoints {
        writeln!(out, "{} {}", colored_method(&endpoint.method), endpoint.path)?;
    }

    Ok(())
}
