//! textspitter - Document Text Extraction Library
//!
//! textspitter spits out plain text from your document files. It normalizes
//! heterogeneous inputs (file paths, in-memory buffers, seekable streams, raw
//! bytes) into a single reading contract and dispatches to a format-specific
//! reader by file extension, programming-language-extension membership, and
//! MIME subtype, in that order.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use textspitter::extract_file;
//!
//! # fn main() -> textspitter::Result<()> {
//! let text = extract_file("document.pdf")?;
//! println!("Extracted {} characters", text.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Resolver/Reader** (`core::handle`): resolves any accepted input shape
//!   into a [`FileHandle`] and exposes the format-specific reader operations
//! - **Dispatcher** (`core::loader`): picks the reader operation for a handle
//! - **Extraction** (`extraction`): pure byte-to-text parsers (PDF, DOCX,
//!   encoding cascades)
//!
//! Format parse failures degrade to an empty string plus an error-level
//! `tracing` event; only construction and I/O errors are returned to the
//! caller. The library never installs a `tracing` subscriber - wire one up in
//! your application to observe extraction events.

#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod extraction;

pub use error::{Result, TextSpitterError};

pub use core::handle::{FileHandle, FileInput, ReadSeek};
pub use core::loader::{extract, extract_bytes, extract_file, load};

pub use core::formats::is_programming_language_file;
pub use core::mime::guess_subtype;
