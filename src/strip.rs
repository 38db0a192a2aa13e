// HTML → plain text stripping.
//
// Undoes `render` for documents it produced (or hand edits of them). This is
// line-oriented slicing, not HTML parsing: everything through the body
// marker on the first line is dropped, the closing lines are dropped, and
// every remaining line loses a fixed-width tail.

use crate::render::UNCHECKED_BOX;

/// Marker opening the note body. Everything up to and including it is dropped.
pub(crate) const BODY_MARKER: &str = r#"<p dir="ltr">"#;

/// Checked checklist marker, as written by the app.
pub(crate) const CHECKED_MARKER: &str = "[V] ";

/// Paragraph close on a line of its own: always the case for checklists,
/// and for plain text only when the note is empty.
const PARAGRAPH_CLOSE_LINE: &str = "</p>\n";

/// Number of characters trimmed from the end of every content line.
///
/// Covers `<br>\n` on item lines and `</p>\n` on the last plain-text line.
/// The trim is unconditional: a line ending any other way loses its last
/// five characters anyway. Kept fixed for compatibility with the Color Note
/// format.
pub const LINE_SUFFIX_LENGTH: usize = 5;

/// Recover plain text from a rendered note.
///
/// Each content line is written back followed by a single `\n`. In
/// checklist mode a leading `[ ] ` or `[V] ` marker is removed first.
///
/// # Examples
///
/// ```
/// use colornote::{render, strip, Note};
///
/// let note = Note::new().with_items(["milk", "eggs"]).with_checklist(true);
/// assert_eq!(strip(&render(&note), true), "milk\neggs\n");
/// ```
pub fn strip(html: &str, checklist: bool) -> String {
    let mut lines: Vec<String> = html
        .split_inclusive('\n')
        .map(|line| match line.strip_suffix("\r\n") {
            Some(rest) => format!("{rest}\n"),
            None => line.to_string(),
        })
        .collect();

    if lines.is_empty() {
        return String::new();
    }

    let body = match lines[0].split_once(BODY_MARKER) {
        Some((_, rest)) => rest.to_string(),
        None => String::new(),
    };
    lines[0] = body;

    // Closing `</body></html>` line.
    lines.pop();
    // In plain text the last item shares the `</p>` line, so a bare close
    // only belongs to the suffix when nothing precedes it.
    let bare_close = lines.last().is_some_and(|line| line == PARAGRAPH_CLOSE_LINE);
    if bare_close && (checklist || lines.len() == 1) {
        lines.pop();
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(lines = lines.len(), checklist, "stripping note");

    let mut out = String::new();
    for line in &lines {
        let mut text = line.as_str();
        if checklist {
            text = strip_checkbox(text);
        }
        out.push_str(trim_line_suffix(text));
        out.push('\n');
    }
    out
}

fn strip_checkbox(line: &str) -> &str {
    line.strip_prefix(UNCHECKED_BOX)
        .or_else(|| line.strip_prefix(CHECKED_MARKER))
        .unwrap_or(line)
}

/// Drop the last `LINE_SUFFIX_LENGTH` characters, whatever they are.
fn trim_line_suffix(line: &str) -> &str {
    match line.char_indices().rev().nth(LINE_SUFFIX_LENGTH - 1) {
        Some((idx, _)) => &line[..idx],
        None => "",
    }
}
