use plan2board_core::detect;
use plan2board_core::error::Plan2BoardError;
use plan2board_core::extraction::{self, pdftotext::PdftotextExtractor, PdfExtractor};
use serde::Serialize;
use std::path::PathBuf;

use crate::output;

#[derive(Serialize)]
struct ExtractReport {
    page_count: usize,
    room_counts: Vec<detect::RoomCount>,
}

/// Extraction-only pass: show what the text layer actually contains,
/// before any standards are applied.
pub fn run(plan_file: PathBuf, output_format: &str) -> Result<(), Plan2BoardError> {
    let pdf_bytes = std::fs::read(&plan_file)?;
    let extractor = PdftotextExtractor::new();
    let pages = extractor.extract_pages(&pdf_bytes)?;

    let blob = extraction::text_blob(&pages);
    let room_counts = detect::detect_rooms(&blob)?;

    let report = ExtractReport {
        page_count: pages.len(),
        room_counts,
    };

    match output_format {
        "json" => output::json::print(&report)?,
        _ => {
            println!("{} page(s) extracted\n", report.page_count);
            println!("Room-name occurrences:");
            for rc in &report.room_counts {
                println!("  {:<10} {}", rc.key, rc.count);
            }
        }
    }

    Ok(())
}
