// crates/extract_docs/src/scanner.rs

use doc_marker::DOC_MARKER;

/// Returns the text following the marker if `line` is a documentation line.
///
/// A line qualifies when its first marker is preceded only by spaces or
/// tabs. Anything else in front of the marker (code, other comments) means
/// the marker is embedded and the line is skipped.
pub fn marked_text(line: &[u8]) -> Option<&[u8]> {
    let marker = DOC_MARKER.as_bytes();
    let index = find_subslice(line, marker)?;
    if line[..index].iter().all(|&b| b == b' ' || b == b'\t') {
        Some(&line[index + marker.len()..])
    } else {
        log::trace!("embedded marker skipped: {}", String::from_utf8_lossy(line));
        None
    }
}

/// Appends every documentation line of `content` to `doc`, each terminated
/// by `\n`, and returns how many lines were appended.
///
/// Lines are split on `\n` only, so a `\r` before it is kept as content.
pub fn append_marked_lines(content: &[u8], doc: &mut String) -> usize {
    let mut appended = 0;
    for line in content.split(|&b| b == b'\n') {
        if let Some(text) = marked_text(line) {
            doc.push_str(&String::from_utf8_lossy(text));
            doc.push('\n');
            appended += 1;
        }
    }
    appended
}

/// Collects the documentation lines of a single file's content.
pub fn extract_marked_lines(content: &[u8]) -> String {
    let mut doc = String::new();
    append_marked_lines(content, &mut doc);
    doc
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
