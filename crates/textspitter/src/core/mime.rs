//! MIME subtype guessing.
//!
//! The dispatcher only ever looks at the subtype (the portion after the `/`),
//! so that is all this module exposes. Guessing goes through `mime_guess`
//! first and falls back to a fixed extension table for types the guesser
//! does not know; unrecognized extensions resolve to `octet-stream`.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::path::Path;

pub const OCTET_STREAM_SUBTYPE: &str = "octet-stream";
pub const DOCX_SUBTYPE: &str = "vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Extension-to-subtype fallback for extensions `mime_guess` has no entry
/// for.
static EXT_SUBTYPE_FALLBACK: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert("docx", DOCX_SUBTYPE);
    m.insert("doc", "msword");
    m.insert("pdf", "pdf");

    m.insert("txt", "plain");
    m.insert("text", "plain");
    m.insert("csv", "csv");
    m.insert("md", "markdown");

    m.insert("py", "x-python");
    m.insert("js", "javascript");
    m.insert("mjs", "javascript");
    m.insert("java", "x-java-source");
    m.insert("c", "x-c");
    m.insert("h", "x-c");
    m.insert("cpp", "x-c++");
    m.insert("cc", "x-c++");
    m.insert("hpp", "x-c++");
    m.insert("rb", "x-ruby");
    m.insert("go", "x-go");
    m.insert("rs", "x-rust");
    m.insert("sh", "x-sh");

    m.insert("html", "html");
    m.insert("htm", "html");
    m.insert("css", "css");
    m.insert("json", "json");
    m.insert("xml", "xml");
    m.insert("yaml", "x-yaml");
    m.insert("yml", "x-yaml");
    m.insert("toml", "toml");

    m
});

/// Subtypes the dispatcher treats as text-like on the MIME fallback tier.
pub static TEXT_MIME_SUBTYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut set = HashSet::new();
    set.insert("plain");
    set.insert("javascript");
    set.insert("x-python");
    set.insert("x-c");
    set.insert("x-java-source");
    set.insert("x-c++");
    set.insert("html");
    set.insert("css");
    set.insert("json");
    set.insert("xml");
    set
});

/// Best-effort MIME subtype guess for a filename or path.
pub fn guess_subtype(name: &str) -> String {
    if let Some(mime) = mime_guess::from_path(name).first() {
        if let Some((_, subtype)) = mime.essence_str().split_once('/') {
            return subtype.to_string();
        }
    }

    let ext = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    EXT_SUBTYPE_FALLBACK
        .get(ext.as_str())
        .copied()
        .unwrap_or(OCTET_STREAM_SUBTYPE)
        .to_string()
}

/// Whether the dispatcher should treat this subtype as text-like.
pub fn is_text_subtype(subtype: &str) -> bool {
    TEXT_MIME_SUBTYPES.contains(subtype)
}
