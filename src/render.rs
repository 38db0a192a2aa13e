// Note → HTML rendering.
//
// Produces the fragment the Color Note app imports: a fixed head carrying
// the UTF-8 declaration and the title, one `<p dir="ltr">` paragraph holding
// the items, and a fixed suffix. Item text is written as-is, without
// escaping.

use crate::note::{Note, LINE_BREAK};

/// Markup before the title.
pub(crate) const PREAMBLE_START: &str =
    r#"<html><head><meta http-equiv="Content-Type" content="text/html;charset=UTF-8"/><title>"#;

/// Markup between the title and the first item.
pub(crate) const PREAMBLE_END: &str = r#"</title></head><body><p dir="ltr">"#;

/// Markup after the last item.
pub(crate) const SUFFIX: &str = "</p>\n</body></html>";

/// Prefix of an unchecked checklist entry.
pub(crate) const UNCHECKED_BOX: &str = "[ ] ";

/// Render a note as a Color Note HTML document.
///
/// # Examples
///
/// ```
/// use colornote::{render, Note};
///
/// let note = Note::new().with_title("Shopping").with_items(["milk"]).with_checklist(true);
/// let html = render(&note);
/// assert!(html.contains("<title>Shopping</title>"));
/// assert!(html.contains("[ ] milk<br>\n"));
/// ```
pub fn render(note: &Note) -> String {
    let mut out = String::with_capacity(
        PREAMBLE_START.len()
            + note.title.len()
            + PREAMBLE_END.len()
            + note
                .items
                .iter()
                .map(|i| UNCHECKED_BOX.len() + i.len() + LINE_BREAK.len())
                .sum::<usize>()
            + SUFFIX.len(),
    );

    out.push_str(PREAMBLE_START);
    out.push_str(&note.title);
    out.push_str(PREAMBLE_END);

    for item in &note.items {
        if note.checklist {
            out.push_str(UNCHECKED_BOX);
            out.push_str(item);
            out.push_str(LINE_BREAK);
        } else {
            out.push_str(item);
        }
    }

    out.push_str(SUFFIX);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        items = note.items.len(),
        checklist = note.checklist,
        bytes = out.len(),
        "rendered note"
    );

    out
}
