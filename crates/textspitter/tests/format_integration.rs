//! End-to-end extraction tests across input shapes and formats.

use std::io::Cursor;

use textspitter::{FileHandle, FileInput, TextSpitterError, extract, extract_bytes, extract_file, load};

#[test]
fn test_extract_txt_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "Hello CLI world").unwrap();

    assert_eq!(extract_file(&path).unwrap(), "Hello CLI world");
}

#[test]
fn test_extract_txt_utf8_round_trip() {
    let s = "Simple text with Ümlauts and accents éàç.";
    assert_eq!(extract_bytes(s.as_bytes().to_vec(), "notes.txt").unwrap(), s);
}

#[test]
fn test_extract_txt_latin1_round_trip() {
    let s = "caf\u{e9} r\u{e9}sum\u{e9} \u{b1}\u{a7}\u{b0}";
    let latin1: Vec<u8> = s.chars().map(|c| c as u8).collect();
    assert_eq!(extract_bytes(latin1, "legacy_export.txt").unwrap(), s);
}

#[test]
fn test_extract_csv_is_raw_passthrough() {
    let text = extract_bytes(b"name,age\nAlice,30\nBob,25".to_vec(), "data.csv").unwrap();
    assert_eq!(text, "name,age\nAlice,30\nBob,25");
}

#[test]
fn test_extract_source_code_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("script.py");
    std::fs::write(&path, "print('hello')\n").unwrap();

    assert_eq!(extract_file(&path).unwrap(), "print('hello')\n");
}

#[test]
fn test_extract_from_stream() {
    let stream = Cursor::new(b"streamed text content".to_vec());
    let text = extract(Some(FileInput::Stream(Box::new(stream))), Some("upload.txt")).unwrap();
    assert_eq!(text, "streamed text content");
}

#[test]
fn test_extract_from_named_stream() {
    let stream = Cursor::new(b"named stream content".to_vec());
    let text = extract(
        Some(FileInput::NamedStream {
            name: "spooled.txt".to_string(),
            stream: Box::new(stream),
        }),
        None,
    )
    .unwrap();
    assert_eq!(text, "named stream content");
}

#[test]
fn test_extract_unsupported_format_returns_empty_not_error() {
    let text = extract_bytes(b"\x00\x01\x02binary soup".to_vec(), "unknown.xyz").unwrap();
    assert_eq!(text, "");
}

#[test]
fn test_extract_bytes_without_filename_is_configuration_error() {
    let err = extract(Some(FileInput::Bytes(b"content".to_vec())), None).unwrap_err();
    assert!(matches!(err, TextSpitterError::Configuration { .. }));
    assert!(err.to_string().contains("'filename' with an extension is required"));
}

#[test]
fn test_extract_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nonexistent.txt");
    let err = extract_file(&missing).unwrap_err();
    assert!(matches!(err, TextSpitterError::Io(_)));
}

#[test]
fn test_load_repeatable_on_seekable_stream() {
    let stream = Cursor::new(b"read me twice".to_vec());
    let mut handle =
        FileHandle::new(Some(FileInput::Stream(Box::new(stream))), Some("again.txt")).unwrap();
    assert_eq!(load(&mut handle).unwrap(), "read me twice");
    assert_eq!(load(&mut handle).unwrap(), "read me twice");
}

#[cfg(feature = "office")]
mod docx {
    use super::*;
    use std::io::Write;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
            .collect();
        write!(
            writer,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
        )
        .unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_extract_docx_paragraphs() {
        let docx = build_docx(&["First paragraph.", "Second paragraph."]);
        let text = extract_bytes(docx, "test.docx").unwrap();
        assert_eq!(text, "First paragraph.\nSecond paragraph.");
    }

    #[test]
    fn test_extract_docx_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contract.docx");
        std::fs::write(&path, build_docx(&["Clause one.", "Clause two."])).unwrap();

        assert_eq!(extract_file(&path).unwrap(), "Clause one.\nClause two.");
    }

    #[test]
    fn test_extract_corrupt_docx_degrades_to_empty() {
        let text = extract_bytes(b"fake docx data".to_vec(), "broken.docx").unwrap();
        assert_eq!(text, "");
    }
}

#[cfg(feature = "pdf")]
mod pdf {
    use super::*;

    #[test]
    fn test_extract_corrupt_pdf_degrades_to_empty() {
        let text = extract_bytes(b"fake pdf data".to_vec(), "broken.pdf").unwrap();
        assert_eq!(text, "");
    }
}
