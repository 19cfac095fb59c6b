use crate::error::Plan2BoardError;
use crate::standards::{parse_standards_str, StandardsTable};

const DEFAULT_STANDARDS_JSON: &str = include_str!("../../../../standards/default.json");

/// Load the built-in standards table shipped with the crate.
pub fn default_standards() -> Result<StandardsTable, Plan2BoardError> {
    parse_standards_str(DEFAULT_STANDARDS_JSON)
}
