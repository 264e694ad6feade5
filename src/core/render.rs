use std::ffi::OsStr;
use std::io::{self, Write};

/// Indentation added per level of depth.
pub const INDENT_STEP: &str = "  ";

/// Names are written as their raw bytes, so non-UTF-8 names survive unchanged.
pub fn write_line<W: Write>(
    writer: &mut W,
    indent: &str,
    name: impl AsRef<OsStr>,
) -> io::Result<()> {
    writer.write_all(indent.as_bytes())?;
    writer.write_all(name.as_ref().as_encoded_bytes())?;
    writer.write_all(b"\n")
}

pub fn nested_indent(indent: &str) -> String {
    let mut next = String::with_capacity(indent.len() + INDENT_STEP.len());
    next.push_str(indent);
    next.push_str(INDENT_STEP);
    next
}
