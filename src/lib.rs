// colornote — plain text to Color Note HTML, and back.
//
// Architecture:
//   text → collect_items → Note → render → HTML
//   HTML → strip → text
//
// The HTML is the fixed fragment the Color Note mobile app imports: a head
// declaring UTF-8 and the title, and one `<p dir="ltr">` paragraph holding
// either `<br>`-separated lines or `[ ] item<br>` checklist entries.

mod error;
mod note;
mod render;
mod strip;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::ColorNoteError;
pub use note::{collect_items, Note, DEFAULT_TITLE};
pub use render::render;
pub use strip::{strip, LINE_SUFFIX_LENGTH};

/// Convert redirected text input into a rendered note.
///
/// Shorthand for [`collect_items`] followed by [`render`].
///
/// # Examples
///
/// ```
/// let html = colornote::convert("a\nb\n", "Notes", false);
/// assert!(html.contains("<p dir=\"ltr\">a<br>\nb</p>"));
/// ```
pub fn convert(input: &str, title: &str, checklist: bool) -> String {
    let note = Note::new()
        .with_title(title)
        .with_items(collect_items(input, checklist))
        .with_checklist(checklist);
    render(&note)
}
