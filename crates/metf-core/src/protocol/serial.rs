//! Reassembly of serial output drained from the device.
//!
//! Long lines printed by the device under test can reach the client split
//! across several delimiter-separated segments. When a line prefix is known,
//! any segment that does not start with it is a continuation of the line
//! before it.

/// Split `body` on `delimiter` and glue continuation segments back together.
///
/// The first segment always opens a line. With `prefix`, a segment opens a
/// new line only if it starts with the prefix; otherwise it is appended to
/// the previous line. Without `prefix`, every segment is its own line and the
/// empty tail left by a trailing delimiter is dropped.
pub fn reassemble_lines(body: &str, delimiter: &str, prefix: Option<&str>) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut segments = body.split(delimiter).peekable();

    while let Some(segment) = segments.next() {
        let is_tail = segments.peek().is_none();
        match (prefix, lines.last_mut()) {
            (Some(prefix), Some(last)) if !segment.starts_with(prefix) => {
                last.push_str(segment);
            }
            (None, Some(_)) if segment.is_empty() && is_tail => {}
            _ => lines.push(segment.to_string()),
        }
    }

    lines
}
