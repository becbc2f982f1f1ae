//! PDF text extraction with a two-tier parser fallback.
//!
//! Two parser capabilities are tried in fixed order: `lopdf` first
//! (page-by-page extraction, concatenated in page order), then `pdf-extract`
//! (whole-document extraction, empty chunks skipped). Whether a backend is
//! present is decided when the [`PdfReader`] is constructed, not by catching
//! failures at call time. When both backends fail, extraction degrades to an
//! empty string and each failure is named in a log event.

use tracing::{error, warn};

use crate::error::Result;
#[cfg(feature = "pdf")]
use crate::error::TextSpitterError;

/// A PDF parsing capability: bytes in, per-page text out.
pub trait PdfParser {
    fn name(&self) -> &'static str;

    /// Extract per-page text, in page order. A backend without page
    /// boundaries returns the whole document as a single chunk.
    fn extract_pages(&self, content: &[u8]) -> Result<Vec<String>>;
}

/// Primary backend: `lopdf`, one chunk per page.
#[cfg(feature = "pdf")]
pub struct LopdfBackend;

#[cfg(feature = "pdf")]
impl PdfParser for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract_pages(&self, content: &[u8]) -> Result<Vec<String>> {
        let doc = lopdf::Document::load_mem(content)
            .map_err(|e| TextSpitterError::parsing(format!("failed to load PDF: {}", e)))?;

        let mut pages = Vec::new();
        for (page_num, _object_id) in doc.get_pages() {
            let text = doc.extract_text(&[page_num]).map_err(|e| {
                TextSpitterError::parsing(format!(
                    "failed to extract text from page {}: {}",
                    page_num, e
                ))
            })?;
            pages.push(text);
        }
        Ok(pages)
    }
}

/// Secondary backend: `pdf-extract`. No page boundaries, so the document
/// comes back as a single chunk.
#[cfg(feature = "pdf")]
pub struct PdfExtractBackend;

#[cfg(feature = "pdf")]
impl PdfParser for PdfExtractBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract_pages(&self, content: &[u8]) -> Result<Vec<String>> {
        let text = pdf_extract::extract_text_from_mem(content)
            .map_err(|e| TextSpitterError::parsing(format!("pdf-extract failed: {}", e)))?;
        Ok(vec![text])
    }
}

/// Two-tier PDF reader. Backend availability is fixed at construction.
pub struct PdfReader {
    primary: Option<Box<dyn PdfParser>>,
    secondary: Option<Box<dyn PdfParser>>,
}

impl PdfReader {
    /// Reader over the compiled-in backends.
    pub fn new() -> Self {
        #[cfg(feature = "pdf")]
        {
            Self {
                primary: Some(Box::new(LopdfBackend)),
                secondary: Some(Box::new(PdfExtractBackend)),
            }
        }
        #[cfg(not(feature = "pdf"))]
        {
            Self {
                primary: None,
                secondary: None,
            }
        }
    }

    /// Reader over caller-supplied backends, tried in the given order.
    pub fn with_parsers(primary: Box<dyn PdfParser>, secondary: Box<dyn PdfParser>) -> Self {
        Self {
            primary: Some(primary),
            secondary: Some(secondary),
        }
    }

    /// Run the fallback chain over the given bytes.
    ///
    /// Never fails: an unreadable document yields an empty string, with the
    /// primary failure logged at warn level and the terminal failure at
    /// error level.
    pub fn read(&self, content: &[u8], file_name: &str) -> String {
        let (Some(primary), Some(secondary)) = (&self.primary, &self.secondary) else {
            error!(
                "No PDF parser available for {}; rebuild with the 'pdf' feature enabled",
                file_name
            );
            return String::new();
        };

        let primary_err = match primary.extract_pages(content) {
            Ok(pages) => return pages.concat(),
            Err(e) => e,
        };

        warn!(
            "{} failed ({}), trying {} for PDF: {}",
            primary.name(),
            primary_err,
            secondary.name(),
            file_name
        );

        match secondary.extract_pages(content) {
            Ok(pages) => pages
                .into_iter()
                .filter(|page| !page.is_empty())
                .collect(),
            Err(secondary_err) => {
                error!(
                    "Both {} and {} failed for PDF {}: {}",
                    primary.name(),
                    secondary.name(),
                    file_name,
                    secondary_err
                );
                String::new()
            }
        }
    }
}

impl Default for PdfReader {
    fn default() -> Self {
        Self::new()
    }
}
