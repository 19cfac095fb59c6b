use plan2board_core::error::Plan2BoardError;
use plan2board_core::export;
use plan2board_core::extraction::pdftotext::PdftotextExtractor;
use plan2board_core::standards::{builtin, load_standards};
use std::path::PathBuf;

use crate::output;

pub fn run(
    plan_file: PathBuf,
    standards_file: Option<PathBuf>,
    output_format: &str,
    bom_csv: Option<PathBuf>,
    io_csv: Option<PathBuf>,
    show_markers: bool,
) -> Result<(), Plan2BoardError> {
    // Load standards before touching the PDF; a bad table fails the
    // whole command up front.
    let standards = match standards_file {
        Some(path) => load_standards(&path)?,
        None => builtin::default_standards()?,
    };

    let pdf_bytes = std::fs::read(&plan_file)?;
    let extractor = PdftotextExtractor::new();
    let survey = plan2board_core::survey_pdf(&pdf_bytes, &extractor, &standards)?;

    if let Some(path) = bom_csv {
        std::fs::write(&path, export::bom_csv(&survey.bom)?)?;
        eprintln!("Bill of materials written to {}", path.display());
    }

    if let Some(path) = io_csv {
        std::fs::write(&path, export::io_csv(&survey.io_map)?)?;
        eprintln!("Draft I/O map written to {}", path.display());
    }

    match output_format {
        "json" => output::json::print(&survey)?,
        _ => output::table::print(&survey, show_markers),
    }

    Ok(())
}
