//! Format dispatch and the top-level extraction entry points.
//!
//! Dispatch is a single-shot, stateless decision over the handle's
//! extension and filename:
//!
//! 1. extensions with a dedicated reader (`pdf`, `docx`, `txt`/`text`,
//!    `csv`) win outright;
//! 2. programming-language extensions go through the source-code reader;
//! 3. otherwise the MIME subtype is consulted, and text-like subtypes also
//!    go through the source-code reader.
//!
//! Anything else logs an error and yields an empty string - an unsupported
//! format is not a fatal failure.

use std::path::Path;

use tracing::{error, info};

use crate::core::formats::{EXTENSION_READERS, ReaderKind, is_programming_language_file};
use crate::core::handle::{FileHandle, FileInput};
use crate::core::mime::{guess_subtype, is_text_subtype};
use crate::error::Result;

/// Invoke the reader operation selected by classification.
fn invoke(handle: &mut FileHandle, kind: ReaderKind) -> Result<String> {
    match kind {
        ReaderKind::Pdf => handle.pdf_read(),
        ReaderKind::Docx => handle.docx_read(),
        ReaderKind::Text => handle.text_read(),
        ReaderKind::Csv => handle.csv_read(),
        ReaderKind::Code => handle.code_read(),
    }
}

/// Dispatch a resolved handle to the matching reader operation.
///
/// Callable repeatedly on the same handle; stream-backed handles depend on
/// the underlying stream supporting rewind for repeated reads.
///
/// # Errors
///
/// Only construction-time and I/O errors surface; format parse failures
/// degrade to an empty string with a logged event.
pub fn load(handle: &mut FileHandle) -> Result<String> {
    let file_type = handle.file_ext().to_lowercase();

    if let Some(kind) = EXTENSION_READERS.get(file_type.as_str()) {
        return invoke(handle, *kind);
    }

    if is_programming_language_file(&file_type) {
        info!("Processing programming language file: {}", handle.file_name());
        return invoke(handle, ReaderKind::Code);
    }

    let subtype = guess_subtype(handle.file_name());
    if is_text_subtype(&subtype) {
        info!("Processing text-based file by mime type: {}", subtype);
        return invoke(handle, ReaderKind::Code);
    }

    error!(
        "You are using an incorrect file format for file submissions. Please upload a \
         .pdf/.docx/.txt/.csv file or a supported programming language file (.py, .js, \
         .java, .cpp, etc.). Unsupported mime type: {}",
        subtype
    );
    Ok(String::new())
}

/// Extract text from any accepted input shape.
///
/// This is the primary call contract: it resolves the input into a
/// [`FileHandle`] and runs the dispatcher.
///
/// ```rust
/// use textspitter::{FileInput, extract};
///
/// # fn main() -> textspitter::Result<()> {
/// let text = extract(
///     Some(FileInput::Bytes(b"hello".to_vec())),
///     Some("greeting.txt"),
/// )?;
/// assert_eq!(text, "hello");
/// # Ok(())
/// # }
/// ```
pub fn extract(file_obj: Option<FileInput>, file_name: Option<&str>) -> Result<String> {
    let mut handle = FileHandle::new(file_obj, file_name)?;
    load(&mut handle)
}

/// Extract text from a file on disk.
pub fn extract_file(path: impl AsRef<Path>) -> Result<String> {
    extract(Some(FileInput::Path(path.as_ref().to_path_buf())), None)
}

/// Extract text from in-memory bytes. The filename supplies the extension
/// used for format dispatch.
pub fn extract_bytes(content: impl Into<Vec<u8>>, file_name: &str) -> Result<String> {
    extract(Some(FileInput::Bytes(content.into())), Some(file_name))
}
