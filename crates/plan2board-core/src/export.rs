use crate::assign::IoEntry;
use crate::error::Plan2BoardError;
use crate::model::BillOfMaterials;

/// Render the bill of materials as CSV with header `Device,Quantity`.
/// All device kinds are listed, including zero quantities.
pub fn bom_csv(bom: &BillOfMaterials) -> Result<String, Plan2BoardError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Device", "Quantity"])?;
    for (kind, quantity) in bom.rows() {
        let quantity = quantity.to_string();
        writer.write_record([kind.bom_label(), quantity.as_str()])?;
    }
    finish(writer)
}

/// Render the draft I/O map as CSV with header `Room,Device,Channel`.
/// One row per physical device unit; the channel field is empty for
/// bus devices.
pub fn io_csv(entries: &[IoEntry]) -> Result<String, Plan2BoardError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Room", "Device", "Channel"])?;
    for entry in entries {
        writer.write_record([entry.room.as_str(), entry.device.label(), entry.channel.as_str()])?;
    }
    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, Plan2BoardError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| Plan2BoardError::CsvExport(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Plan2BoardError::CsvExport(e.to_string()))
}
