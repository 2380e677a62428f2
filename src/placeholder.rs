//! Last-resort placeholder artifact for jobs whose sources are all
//! unreachable: a fixed-size sky-blue rectangle with the destination's
//! file stem as a text label, written as an SVG document at the sibling
//! path (same base name, `.svg` extension).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Canvas width and height of the generated placeholder, in pixels.
const CANVAS_SIZE: u32 = 300;

/// Background fill for the placeholder rectangle.
const FILL_COLOR: &str = "#87CEEB";

/// Sibling path for a destination's placeholder.
pub fn placeholder_path(dest: &Path) -> PathBuf {
    dest.with_extension("svg")
}

/// Render the placeholder document with the given text label.
pub fn render_svg(label: &str) -> String {
    format!(
        r#"<svg width="{size}" height="{size}" xmlns="http://www.w3.org/2000/svg">
  <rect width="100%" height="100%" fill="{fill}" />
  <text x="{center}" y="{center}" font-family="Arial" font-size="24" fill="black" text-anchor="middle" alignment-baseline="middle">{label}</text>
</svg>
"#,
        size = CANVAS_SIZE,
        fill = FILL_COLOR,
        center = CANVAS_SIZE / 2,
        label = escape_xml(label),
    )
}

/// Write the placeholder for `dest` and return the path it was written to.
pub fn write_placeholder(dest: &Path) -> io::Result<PathBuf> {
    let label = dest
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let path = placeholder_path(dest);
    fs::write(&path, render_svg(&label))?;
    Ok(path)
}

/// Minimal XML escaping for the text label.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
