pub mod pdftotext;

use crate::error::Plan2BoardError;
use serde::{Deserialize, Serialize};

/// Line bounding box in PDF points, used to place room markers on a
/// rendered page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BBox {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

/// One positioned text line from the PDF's coordinate layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineSpan {
    pub page_number: usize,
    pub line_index: usize,
    pub text: String,
    pub bbox: BBox,
}

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
    pub line_spans: Vec<LineSpan>,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, Plan2BoardError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Concatenate all page text into one lowercase blob, pages in order.
/// Room detection runs against this blob.
pub fn text_blob(pages: &[PageContent]) -> String {
    let mut blob = String::new();
    for page in pages {
        for line in &page.lines {
            if !blob.is_empty() {
                blob.push(' ');
            }
            blob.push_str(line);
        }
    }
    blob.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: usize, lines: &[&str]) -> PageContent {
        PageContent {
            page_number: number,
            lines: lines.iter().map(|s| s.to_string()).collect(),
            line_spans: vec![],
        }
    }

    #[test]
    fn test_text_blob_joins_pages_in_order_lowercased() {
        let pages = vec![
            page(1, &["KITCHEN", "Living Room"]),
            page(2, &["Bedroom 1"]),
        ];
        assert_eq!(text_blob(&pages), "kitchen living room bedroom 1");
    }

    #[test]
    fn test_text_blob_empty_pages() {
        assert_eq!(text_blob(&[]), "");
        assert_eq!(text_blob(&[page(1, &[])]), "");
    }
}
