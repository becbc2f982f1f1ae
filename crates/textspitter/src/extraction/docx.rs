//! DOCX (Office Open XML) paragraph extraction.
//!
//! A DOCX file is a ZIP archive; the document body lives in
//! `word/document.xml`. Extraction streams that entry with quick-xml,
//! collecting the `w:t` runs of each `w:p` paragraph and joining paragraphs
//! with newlines, in document order.

use crate::error::Result;
#[cfg(feature = "office")]
use crate::error::TextSpitterError;

/// Extract paragraph text from DOCX bytes.
///
/// # Errors
///
/// Returns [`TextSpitterError::Parsing`] when the bytes are not a readable
/// ZIP archive, the archive has no `word/document.xml`, or the document XML
/// is malformed.
#[cfg(feature = "office")]
pub fn parse_docx(content: &[u8]) -> Result<String> {
    use quick_xml::Reader;
    use quick_xml::events::Event;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    let mut archive = ZipArchive::new(Cursor::new(content))
        .map_err(|e| TextSpitterError::parsing_with_source("failed to open DOCX as ZIP", e))?;

    let mut document_xml = Vec::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| {
            TextSpitterError::parsing_with_source("DOCX archive has no word/document.xml", e)
        })?
        .read_to_end(&mut document_xml)
        .map_err(|e| TextSpitterError::parsing_with_source("failed to read word/document.xml", e))?;

    let mut reader = Reader::from_reader(document_xml.as_slice());
    reader.config_mut().check_end_names = false;

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Ok(Event::End(e)) => {
                let name = e.local_name();
                if name.as_ref() == b"t" {
                    in_text_run = false;
                } else if name.as_ref() == b"p" {
                    paragraphs.push(std::mem::take(&mut current));
                }
            }
            Ok(Event::Text(t)) if in_text_run => {
                current.push_str(&String::from_utf8_lossy(t.as_ref()));
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(TextSpitterError::parsing_with_source(
                    "malformed word/document.xml",
                    e,
                ));
            }
        }
        buf.clear();
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(not(feature = "office"))]
pub fn parse_docx(_content: &[u8]) -> Result<String> {
    Err(crate::error::TextSpitterError::parsing(
        "DOCX support not compiled in; rebuild with the 'office' feature enabled",
    ))
}
