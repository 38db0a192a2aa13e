// Command line front end.
//
// Parsing never exits the process: it returns an `Invocation` and the
// binary decides what to print and which status to exit with. All file and
// stream I/O happens in `run`.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, CommandFactory, Parser};
use tracing::debug;

use crate::{collect_items, render, strip, ColorNoteError, Note, DEFAULT_TITLE};

const ABOUT: &str = "\
Build notes for the Color Note app from terminal input.

Pipe a directory listing (or any text) in, redirect the HTML out, and send
the file to your phone. With --strip, turn such a note back into text.";

const EXAMPLES: &str = "\
Examples:
    ls ~/music | colornote -l -t \"Music List\" > mlist.html
    colornote --list -i list.txt -o list.html --title=\"Shopping\"
    cat ~/docs/article.txt | colornote > article.html";

#[derive(Debug, Parser)]
#[command(
    name = "colornote",
    about = ABOUT,
    after_help = EXAMPLES,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
struct Args {
    /// Print this help text
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    help: bool,

    /// Print version and author info
    #[arg(long = "version", action = ArgAction::SetTrue)]
    version: bool,

    /// The title of your note
    #[arg(short, long, value_name = "TEXT", default_value = DEFAULT_TITLE)]
    title: String,

    /// Format the resultant HTML as a checklist
    #[arg(short = 'l', long = "list")]
    list: bool,

    /// Read from this file instead of standard input
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Write to this file instead of standard output
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Strip HTML from a note, leaving plain text
    #[arg(short, long)]
    strip: bool,

    /// Note items; when given, input is not read
    #[arg(value_name = "ITEMS", num_args = 1.., trailing_var_arg = true)]
    items: Vec<String>,
}

/// Direction of the conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Text → HTML (default).
    #[default]
    Render,
    /// HTML → text.
    Strip,
}

/// Settings for one run, fixed once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Note title, written into `<title>` as-is.
    pub title: String,
    /// Render (or strip) a checklist rather than plain text.
    pub checklist: bool,
    /// Render or strip.
    pub mode: Mode,
    /// `None` reads standard input.
    pub input: Option<PathBuf>,
    /// `None` writes standard output.
    pub output: Option<PathBuf>,
    /// Items from the command line, used verbatim.
    pub items: Vec<String>,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print this help text and exit successfully.
    Help(String),
    /// Print this version text and exit successfully.
    Version(String),
    /// Convert a note.
    Run(Config),
}

/// Parse a full argument list, program name first.
pub fn parse_args<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(args)?;

    if args.help {
        return Ok(Invocation::Help(help_text()));
    }
    if args.version {
        return Ok(Invocation::Version(version_text()));
    }

    Ok(Invocation::Run(Config {
        title: args.title,
        checklist: args.list,
        mode: if args.strip { Mode::Strip } else { Mode::Render },
        input: args.input,
        output: args.output,
        items: args.items,
    }))
}

/// Usage, options and examples.
pub fn help_text() -> String {
    Args::command().render_help().to_string()
}

/// Program version and author.
pub fn version_text() -> String {
    let mut text = format!("colornote, version {}", env!("CARGO_PKG_VERSION"));
    let authors = env!("CARGO_PKG_AUTHORS");
    if !authors.is_empty() {
        text.push('\n');
        text.push_str(&authors.replace(':', "\n"));
    }
    text
}

/// Convert one note as configured.
///
/// The input is opened before anything else so that a bad `-i` path leaves
/// the output untouched. The output is opened only once the whole document
/// is ready.
pub fn run(config: &Config) -> Result<(), ColorNoteError> {
    let mut input = open_input(config.input.as_deref())?;

    let document = match config.mode {
        Mode::Strip => {
            let html = read_all(&mut input)?;
            debug!(bytes = html.len(), checklist = config.checklist, "stripping note");
            strip(&html, config.checklist)
        }
        Mode::Render => {
            let items = if config.items.is_empty() {
                let text = read_all(&mut input)?;
                collect_items(&text, config.checklist)
            } else {
                debug!(count = config.items.len(), "using items from arguments");
                config.items.clone()
            };
            let note = Note::new()
                .with_title(config.title.as_str())
                .with_items(items)
                .with_checklist(config.checklist);
            render(&note)
        }
    };

    write_output(config.output.as_deref(), &document)
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>, ColorNoteError> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "opening input");
            let file = File::open(path).map_err(|source| ColorNoteError::InputOpen {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(file))
        }
        None => {
            debug!("reading standard input");
            Ok(Box::new(io::stdin()))
        }
    }
}

fn read_all(input: &mut dyn Read) -> Result<String, ColorNoteError> {
    let mut text = String::new();
    input.read_to_string(&mut text).map_err(ColorNoteError::Read)?;
    Ok(text)
}

fn write_output(path: Option<&Path>, document: &str) -> Result<(), ColorNoteError> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), bytes = document.len(), "writing output");
            let mut file = File::create(path).map_err(|source| ColorNoteError::OutputOpen {
                path: path.to_path_buf(),
                source,
            })?;
            file.write_all(document.as_bytes()).map_err(ColorNoteError::Write)?;
            file.flush().map_err(ColorNoteError::Write)
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(document.as_bytes()).map_err(ColorNoteError::Write)?;
            stdout.flush().map_err(ColorNoteError::Write)
        }
    }
}
