//! Format classification tables.
//!
//! Two fixed registries drive the dispatcher: the extension-to-reader table
//! for the formats with dedicated readers, and the programming-language
//! extension set for everything that should go through the source-code
//! decode cascade.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Reader operation selected by format classification.
///
/// Each variant corresponds to one reader operation on
/// [`FileHandle`](crate::FileHandle); the dispatcher maps a classified
/// handle through this enum in a single `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderKind {
    Pdf,
    Docx,
    Text,
    Csv,
    Code,
}

/// Extensions with a dedicated reader operation.
pub static EXTENSION_READERS: Lazy<HashMap<&'static str, ReaderKind>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("pdf", ReaderKind::Pdf);
    m.insert("docx", ReaderKind::Docx);
    m.insert("txt", ReaderKind::Text);
    m.insert("text", ReaderKind::Text);
    m.insert("csv", ReaderKind::Csv);
    m
});

/// Source, markup, config, and data-interchange extensions routed through
/// the source-code reader.
pub static PROGRAMMING_LANGUAGE_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut set = HashSet::new();

    // Language sources
    for ext in [
        "py", "pyw", "pyi", "js", "mjs", "cjs", "ts", "tsx", "jsx", "java", "kt", "kts", "scala",
        "groovy", "go", "rs", "c", "h", "cpp", "cc", "cxx", "hpp", "hxx", "cs", "rb", "erb", "php",
        "swift", "dart", "elm", "ex", "exs", "erl", "hrl", "hs", "jl", "nim", "zig", "lua", "r",
        "pl", "pm", "m", "clj", "cljs", "vb", "fs", "fsx", "asm", "s",
    ] {
        set.insert(ext);
    }

    // Shell and scripting
    for ext in ["sh", "bash", "zsh", "fish", "ps1", "bat", "cmd", "sql"] {
        set.insert(ext);
    }

    // Markup and web
    for ext in [
        "html", "htm", "xhtml", "css", "scss", "sass", "less", "vue", "svelte", "md", "markdown",
        "rst", "adoc", "tex",
    ] {
        set.insert(ext);
    }

    // Config and data interchange
    for ext in [
        "json", "yaml", "yml", "toml", "ini", "cfg", "conf", "xml", "xsl", "proto", "graphql", "tf",
    ] {
        set.insert(ext);
    }

    set
});

/// Case-insensitive membership test against the programming-language
/// extension set.
pub fn is_programming_language_file(extension: &str) -> bool {
    PROGRAMMING_LANGUAGE_EXTENSIONS.contains(extension.to_lowercase().as_str())
}
