//! # Document Reader
//!
//! Turns an uploaded file into plain text for the document transposer.
//!
//! ## Supported Formats
//! - `.txt` - decoded as UTF-8
//! - `.docx` - `word/document.xml` is read from the archive and the text of each
//!   paragraph is joined with `\n`
//!
//! Anything else is rejected with [`ChordError::UnsupportedFormat`]. A file that
//! has a supported extension but cannot be decoded gives
//! [`ChordError::UnreadableFile`].

use crate::error::{ChordError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use std::path::Path;
use tracing::debug;

/// Output name used when the text did not come from a file
pub const PASTED_OUTPUT_NAME: &str = "transposed_chords.txt";

const DOCX_BODY: &str = "word/document.xml";

/// Lowercased extension of a file name, or an empty string
fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Decode a file into plain text based on its extension
///
/// # Example
/// ```
/// use chordshift::read_document;
///
/// let text = read_document("chart.TXT", "G D Em C".as_bytes()).unwrap();
/// assert_eq!(text, "G D Em C");
/// assert!(read_document("chart.pdf", b"").is_err());
/// ```
pub fn read_document(file_name: &str, bytes: &[u8]) -> Result<String> {
    let extension = extension_of(file_name);
    debug!(file_name, extension = %extension, size = bytes.len(), "reading document");

    match extension.as_str() {
        "txt" => String::from_utf8(bytes.to_vec())
            .map_err(|e| ChordError::unreadable(file_name, e)),
        "docx" => read_docx(bytes).map_err(|reason| ChordError::unreadable(file_name, reason)),
        _ => Err(ChordError::UnsupportedFormat {
            name: file_name.to_string(),
            extension,
        }),
    }
}

fn read_docx(bytes: &[u8]) -> std::result::Result<String, String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| e.to_string())?;
    let mut body = Vec::new();
    archive
        .by_name(DOCX_BODY)
        .map_err(|e| format!("{}: {}", DOCX_BODY, e))?
        .read_to_end(&mut body)
        .map_err(|e| e.to_string())?;

    let paragraphs = docx_paragraphs(&body)?;
    Ok(paragraphs.join("\n"))
}

/// Collect the text of every `w:p` in a WordprocessingML body.
///
/// Paragraphs nested inside another one (text boxes) are emitted when they close,
/// so they come before the paragraph that contains them.
fn docx_paragraphs(xml: &[u8]) -> std::result::Result<Vec<String>, String> {
    let mut reader = Reader::from_reader(xml);
    reader.trim_text(false);

    let mut buf = Vec::new();
    let mut paragraphs = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut run_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"p" => open.push(String::new()),
                b"r" => run_depth += 1,
                b"t" => in_text = run_depth > 0,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"p" => paragraphs.push(String::new()),
                b"tab" if run_depth > 0 => push_text(&mut open, "\t"),
                b"br" | b"cr" if run_depth > 0 => push_text(&mut open, "\n"),
                _ => {}
            },
            Ok(Event::Text(ref t)) if in_text => {
                let text = t.unescape().map_err(|e| e.to_string())?;
                push_text(&mut open, &text);
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    if let Some(paragraph) = open.pop() {
                        paragraphs.push(paragraph);
                    }
                }
                b"r" => run_depth = run_depth.saturating_sub(1),
                b"t" => in_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(format!(
                    "XML error at position {}: {}",
                    reader.buffer_position(),
                    e
                ))
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

fn push_text(open: &mut [String], text: &str) {
    if let Some(paragraph) = open.last_mut() {
        paragraph.push_str(text);
    }
}

/// File name to offer when saving a transposed document.
///
/// `Some("song.docx")` gives `"song_transposed.txt"`; pasted text (`None`) gives
/// [`PASTED_OUTPUT_NAME`].
pub fn suggested_output_name(input_name: Option<&str>) -> String {
    input_name
        .and_then(|name| Path::new(name).file_stem())
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(|stem| format!("{}_transposed.txt", stem))
        .unwrap_or_else(|| PASTED_OUTPUT_NAME.to_string())
}
