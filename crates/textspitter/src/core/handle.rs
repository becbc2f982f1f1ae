//! Input resolution and the file reader operations.
//!
//! [`FileHandle`] normalizes every accepted input shape (file-system path,
//! named or anonymous seekable stream, raw bytes) into a resolved source plus
//! a filename and a lowercase extension, and exposes the format-specific
//! reader operations. Each reader operation calls [`FileHandle::get_contents`]
//! first, so all of them work uniformly over every source shape.
//!
//! The filename is mandatory information: a handle can only be constructed
//! when an extension is derivable, because the dispatcher needs it for format
//! classification.

use std::fmt;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

use tracing::error;

use crate::error::{Result, TextSpitterError};
use crate::extraction::docx;
use crate::extraction::pdf::PdfReader;
use crate::extraction::text::{CODE_CASCADE, TEXT_CASCADE, decode_with_cascade};

/// A readable, rewindable byte stream.
///
/// Blanket-implemented for every `Read + Seek` type. Rewind failures during
/// [`FileHandle::get_contents`] are ignored, so a `Seek` implementation that
/// always errors is acceptable for one-shot streams.
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek> ReadSeek for T {}

/// An extraction input, resolved once at [`FileHandle`] construction.
///
/// This replaces runtime probing of the input object: callers state the shape
/// of their input explicitly, and the compiler rules out everything else.
pub enum FileInput {
    /// A file-system path. Filename and extension come from the path itself.
    Path(PathBuf),
    /// A seekable byte stream that carries its own filename, e.g. an upload
    /// wrapper or a named temporary file.
    NamedStream {
        name: String,
        stream: Box<dyn ReadSeek>,
    },
    /// An anonymous seekable byte stream. Requires the `file_name` argument.
    Stream(Box<dyn ReadSeek>),
    /// Raw in-memory bytes. Requires the `file_name` argument.
    Bytes(Vec<u8>),
}

impl fmt::Debug for FileInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileInput::Path(p) => f.debug_tuple("Path").field(p).finish(),
            FileInput::NamedStream { name, .. } => {
                f.debug_struct("NamedStream").field("name", name).finish_non_exhaustive()
            }
            FileInput::Stream(_) => f.write_str("Stream(..)"),
            FileInput::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
        }
    }
}

/// The resolved byte source backing a [`FileHandle`].
enum FileSource {
    Path(PathBuf),
    Stream(Box<dyn ReadSeek>),
    Bytes(Vec<u8>),
}

impl fmt::Debug for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSource::Path(p) => f.debug_tuple("Path").field(p).finish(),
            FileSource::Stream(_) => f.write_str("Stream(..)"),
            FileSource::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
        }
    }
}

/// Normalized representation of an extraction input.
///
/// Created once per extraction call; the source identity is fixed at
/// construction. Stream-backed handles are rewound before every read, so
/// repeated reads work as long as the underlying stream supports seeking.
#[derive(Debug)]
pub struct FileHandle {
    source: FileSource,
    file_name: String,
    file_ext: String,
}

/// Extension of a plain filename string: the substring after the last dot,
/// or the whole string when it contains none.
fn ext_from_name(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

/// Basename of a path-like string, falling back to the string itself.
fn basename(name: &str) -> String {
    Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string())
}

impl FileHandle {
    /// Resolve an input into a handle.
    ///
    /// Resolution order:
    ///
    /// 1. `file_name` given and `file_obj` absent: treat `file_name` as a
    ///    path.
    /// 2. `file_obj` is a path: filename and extension come from the path.
    /// 3. `file_obj` is a named stream: its embedded name wins, even when
    ///    `file_name` is also given.
    /// 4. `file_obj` is an anonymous stream or raw bytes: `file_name` names
    ///    the data while `file_obj` stays the byte source.
    ///
    /// # Errors
    ///
    /// Returns [`TextSpitterError::Configuration`] when neither argument is
    /// given, or when a stream/bytes input has no filename to derive an
    /// extension from.
    pub fn new(file_obj: Option<FileInput>, file_name: Option<&str>) -> Result<Self> {
        match (file_obj, file_name) {
            (None, None) => Err(TextSpitterError::configuration(
                "Either 'file_obj' or 'filename' must be provided.",
            )),
            (None, Some(name)) => Ok(Self {
                source: FileSource::Path(PathBuf::from(name)),
                file_name: basename(name),
                file_ext: ext_from_name(name),
            }),
            (Some(FileInput::Path(path)), _) => {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let file_ext = path
                    .extension()
                    .map(|e| e.to_string_lossy().to_lowercase())
                    .unwrap_or_default();
                Ok(Self {
                    source: FileSource::Path(path),
                    file_name,
                    file_ext,
                })
            }
            (Some(FileInput::NamedStream { name, stream }), _) => Ok(Self {
                source: FileSource::Stream(stream),
                file_ext: ext_from_name(&name),
                file_name: name,
            }),
            (Some(FileInput::Stream(stream)), Some(name)) => Ok(Self {
                source: FileSource::Stream(stream),
                file_name: name.to_string(),
                file_ext: ext_from_name(name),
            }),
            (Some(FileInput::Bytes(bytes)), Some(name)) => Ok(Self {
                source: FileSource::Bytes(bytes),
                file_name: name.to_string(),
                file_ext: ext_from_name(name),
            }),
            (Some(FileInput::Stream(_)), None) | (Some(FileInput::Bytes(_)), None) => {
                Err(TextSpitterError::configuration(
                    "Your file object does not carry a name. A 'filename' with an extension \
                     is required for mime-typing stream and byte inputs.",
                ))
            }
        }
    }

    /// Filename including extension.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Lowercase extension without the dot.
    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    /// Read the complete byte content, regardless of source shape.
    ///
    /// Path sources are opened for binary read; streams are rewound first
    /// (rewind failures are silently ignored, so already-consumed or
    /// non-seekable streams read from their current position) and drained;
    /// byte sources are returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`TextSpitterError::Io`] when the path or stream read fails.
    pub fn get_contents(&mut self) -> Result<Vec<u8>> {
        match &mut self.source {
            FileSource::Path(path) => Ok(std::fs::read(path)?),
            FileSource::Stream(stream) => {
                let _ = stream.rewind();
                let mut buf = Vec::new();
                stream.read_to_end(&mut buf)?;
                Ok(buf)
            }
            FileSource::Bytes(bytes) => Ok(bytes.clone()),
        }
    }

    /// Extract text from PDF content.
    ///
    /// Tries the primary parser (page-by-page extraction, concatenated in
    /// page order) and falls back to the secondary parser on any failure.
    /// When both fail the result degrades to an empty string; two log events
    /// name the failures.
    pub fn pdf_read(&mut self) -> Result<String> {
        let contents = self.get_contents()?;
        Ok(PdfReader::new().read(&contents, &self.file_name))
    }

    /// Extract text from DOCX content: every paragraph's text, joined by
    /// newlines, in document order. Parse failures degrade to an empty
    /// string plus an error-level event.
    pub fn docx_read(&mut self) -> Result<String> {
        let contents = self.get_contents()?;
        match docx::parse_docx(&contents) {
            Ok(text) => Ok(text),
            Err(e) => {
                error!("Error reading DOCX file {}: {}", self.file_name, e);
                Ok(String::new())
            }
        }
    }

    /// Decode text content: UTF-8 first, then Latin-1.
    pub fn text_read(&mut self) -> Result<String> {
        let contents = self.get_contents()?;
        Ok(decode_with_cascade(&contents, TEXT_CASCADE, "text file", &self.file_name))
    }

    /// Decode CSV content with the same cascade as [`FileHandle::text_read`].
    /// The raw decoded text is returned without any structural CSV parsing.
    pub fn csv_read(&mut self) -> Result<String> {
        let contents = self.get_contents()?;
        Ok(decode_with_cascade(&contents, TEXT_CASCADE, "CSV file", &self.file_name))
    }

    /// Decode source-code content with the wider cascade: UTF-8, UTF-8 with
    /// BOM, Latin-1, Windows-1252.
    pub fn code_read(&mut self) -> Result<String> {
        let contents = self.get_contents()?;
        Ok(decode_with_cascade(&contents, CODE_CASCADE, "code file", &self.file_name))
    }
}
