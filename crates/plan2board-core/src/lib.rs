pub mod aggregate;
pub mod assign;
pub mod detect;
pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod standards;

use assign::IoEntry;
use detect::{RoomCount, RoomMarker};
use error::Plan2BoardError;
use extraction::PdfExtractor;
use model::{BillOfMaterials, RoomInstance};
use serde::{Deserialize, Serialize};
use standards::StandardsTable;

/// Everything the survey of one floor-plan PDF produced. Recomputed
/// from scratch per document; nothing persists between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSurvey {
    pub page_count: usize,
    /// Occurrence count per room type, including zero-count types.
    pub room_counts: Vec<RoomCount>,
    /// Named room instances with their standard device quantities.
    pub rooms: Vec<RoomInstance>,
    pub bom: BillOfMaterials,
    /// Draft channel assignment, one entry per physical device unit.
    pub io_map: Vec<IoEntry>,
    /// Per-occurrence page positions for marker overlay rendering.
    pub markers: Vec<RoomMarker>,
}

/// Main API entry point: survey a floor-plan PDF against a standards
/// table.
///
/// The standards table is loaded by the caller before any document is
/// read; a load failure fails the whole operation up front instead of
/// emptying every lookup.
pub fn survey_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    standards: &StandardsTable,
) -> Result<PlanSurvey, Plan2BoardError> {
    // Extract text from PDF, pages in order
    let pages = extractor.extract_pages(pdf_bytes)?;

    // One lowercase blob for the whole document
    let blob = extraction::text_blob(&pages);

    // Count room-name occurrences and locate them for markers
    let room_counts = detect::detect_rooms(&blob)?;
    let markers = detect::find_markers(&pages)?;

    // Expand counts into room instances and aggregate
    let rooms = aggregate::build_rooms(&room_counts, standards);
    let bom = aggregate::build_bom(&rooms);
    let io_map = assign::assign_channels(&rooms);

    Ok(PlanSurvey {
        page_count: pages.len(),
        room_counts,
        rooms,
        bom,
        io_map,
        markers,
    })
}
