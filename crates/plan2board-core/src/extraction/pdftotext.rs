use crate::error::Plan2BoardError;
use crate::extraction::{BBox, LineSpan, PageContent, PdfExtractor};
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Runs two passes over the document: `pdftotext -layout` for the plain
/// text room detection works on, and `pdftotext -bbox-layout` for line
/// coordinates so detected rooms can be marked on a rendered page.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, Plan2BoardError> {
        // Write PDF bytes to a temp file
        let mut tmpfile = tempfile::NamedTempFile::new()
            .map_err(|e| Plan2BoardError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| Plan2BoardError::Extraction(e.to_string()))?;
        let tmp_path = tmpfile.path().to_path_buf();

        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(&tmp_path)
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Plan2BoardError::PdftotextNotFound
                } else {
                    Plan2BoardError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(Plan2BoardError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        let spans = extract_line_spans(&tmp_path)?;

        // pdftotext uses form feed \x0c as page separator
        let pages: Vec<PageContent> = text
            .split('\x0c')
            .enumerate()
            .map(|(i, page_text)| {
                let page_number = i + 1;
                let lines: Vec<String> = page_text.lines().map(|l| l.to_string()).collect();
                let line_spans = spans
                    .iter()
                    .filter(|s| s.page_number == page_number)
                    .cloned()
                    .collect();
                PageContent {
                    page_number,
                    lines,
                    line_spans,
                }
            })
            .filter(|p| !p.lines.is_empty() || p.page_number == 1)
            .collect();

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

fn extract_line_spans(pdf_path: &std::path::Path) -> Result<Vec<LineSpan>, Plan2BoardError> {
    let output = Command::new("pdftotext")
        .arg("-bbox-layout")
        .arg(pdf_path)
        .arg("-")
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Plan2BoardError::PdftotextNotFound
            } else {
                Plan2BoardError::Extraction(format!("pdftotext -bbox-layout failed: {}", e))
            }
        })?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        return Err(Plan2BoardError::PdftotextFailed { code, stderr });
    }

    let xml = String::from_utf8_lossy(&output.stdout);
    Ok(parse_bbox_xml(&xml))
}

/// Parse pdftotext's -bbox-layout XML into positioned line spans.
/// Line indices count non-empty lines per page in document order.
fn parse_bbox_xml(xml: &str) -> Vec<LineSpan> {
    let mut out: Vec<LineSpan> = Vec::new();
    let mut current_page: Option<usize> = None;
    let mut line_index = 0usize;
    let mut current_bbox: Option<BBox> = None;
    let mut current_words: Vec<String> = Vec::new();

    for raw in xml.lines() {
        let line = raw.trim();

        if line.starts_with("<page ") {
            current_page = parse_attr_usize(line, "number");
            line_index = 0;
            continue;
        }

        if line.starts_with("<line ") {
            current_bbox = parse_bbox(line);
            current_words.clear();
            continue;
        }

        if line.starts_with("<word ") {
            if let Some(word_text) = parse_word_text(line) {
                let w = decode_xml_entities(&word_text).trim().to_string();
                if !w.is_empty() {
                    current_words.push(w);
                }
            }
            continue;
        }

        if line.starts_with("</line>") {
            if let (Some(page_number), Some(bbox)) = (current_page, current_bbox.take()) {
                let text = current_words.join(" ");
                if !text.is_empty() {
                    out.push(LineSpan {
                        page_number,
                        line_index,
                        text,
                        bbox,
                    });
                    line_index += 1;
                }
            }
            current_words.clear();
        }
    }

    out
}

fn parse_attr_usize(tag: &str, name: &str) -> Option<usize> {
    parse_attr(tag, name)?.parse().ok()
}

fn parse_attr_f32(tag: &str, name: &str) -> Option<f32> {
    parse_attr(tag, name)?.parse().ok()
}

fn parse_attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{}=\"", name);
    let start = tag.find(&needle)? + needle.len();
    let rest = &tag[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

fn parse_bbox(line_tag: &str) -> Option<BBox> {
    Some(BBox {
        x_min: parse_attr_f32(line_tag, "xMin")?,
        y_min: parse_attr_f32(line_tag, "yMin")?,
        x_max: parse_attr_f32(line_tag, "xMax")?,
        y_max: parse_attr_f32(line_tag, "yMax")?,
    })
}

fn parse_word_text(word_tag: &str) -> Option<String> {
    let start = word_tag.find('>')? + 1;
    let end = word_tag.rfind("</word>")?;
    Some(word_tag[start..end].to_string())
}

fn decode_xml_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}
