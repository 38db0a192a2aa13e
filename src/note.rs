// Note model and input-item collection.
//
// A note is a title, an ordered list of items and a checklist flag. Items
// collected from redirected input carry their own `<br>` separators in
// plain-text mode; items given on the command line are used verbatim.

/// Title used when none is given.
pub const DEFAULT_TITLE: &str = "Untitled Note";

/// Line break appended between plain-text paragraphs.
pub(crate) const LINE_BREAK: &str = "<br>\n";

/// A note ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Contents of the `<title>` element. Not escaped.
    pub title: String,
    /// Note content, one entry per line, in order.
    pub items: Vec<String>,
    /// Render as an unchecked checklist instead of plain text.
    pub checklist: bool,
}

impl Default for Note {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            items: Vec::new(),
            checklist: false,
        }
    }
}

impl Note {
    /// Create an empty plain-text note titled "Untitled Note".
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the note title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the note items.
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether the note renders as a checklist.
    pub fn with_checklist(mut self, checklist: bool) -> Self {
        self.checklist = checklist;
        self
    }
}

/// Split redirected input into note items.
///
/// Each line loses its terminator. In plain-text mode every item but the
/// last gets `<br>\n` re-appended, so paragraphs stay separated without a
/// trailing break at the end of the note. Checklist items are left bare;
/// the checklist renderer adds its own break per item.
///
/// ```
/// assert_eq!(colornote::collect_items("a\nb\n", false), ["a<br>\n", "b"]);
/// assert_eq!(colornote::collect_items("a\nb\n", true), ["a", "b"]);
/// ```
pub fn collect_items(input: &str, checklist: bool) -> Vec<String> {
    let lines: Vec<&str> = input.lines().collect();
    let last = lines.len().saturating_sub(1);

    let items: Vec<String> = lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if !checklist && i < last {
                format!("{line}{LINE_BREAK}")
            } else {
                line.to_string()
            }
        })
        .collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(count = items.len(), checklist, "collected items");

    items
}
