use plan2board_core::model::DeviceKind;
use plan2board_core::PlanSurvey;

pub fn print(survey: &PlanSurvey, show_markers: bool) {
    if survey.rooms.is_empty() {
        println!("No rooms with a defined standard were detected.");
        let detected: Vec<&str> = survey
            .room_counts
            .iter()
            .filter(|c| c.count > 0)
            .map(|c| c.key.as_str())
            .collect();
        if !detected.is_empty() {
            println!(
                "Detected room types without a standard: {}",
                detected.join(", ")
            );
        }
        return;
    }

    // Devices per room
    println!("=== Devices per room ===\n");
    let max_label = survey
        .rooms
        .iter()
        .map(|r| r.label.len())
        .max()
        .unwrap_or(10);
    for room in &survey.rooms {
        for kind in DeviceKind::ALL {
            let quantity = room.quantities.get(kind);
            if quantity == 0 {
                continue;
            }
            println!(
                "  {:<width$}  {:<20} {}",
                room.label,
                kind.bom_label(),
                quantity,
                width = max_label
            );
        }
    }
    println!();

    // Bill of materials
    println!("=== Bill of materials ===\n");
    for (kind, quantity) in survey.bom.rows() {
        println!("  {:<20} {}", kind.bom_label(), quantity);
    }
    println!();

    // Draft I/O map
    println!("=== Draft I/O map ===\n");
    let max_room = survey
        .io_map
        .iter()
        .map(|e| e.room.len())
        .max()
        .unwrap_or(10);
    for entry in &survey.io_map {
        println!(
            "  {:<rw$}  {:<20} {}",
            entry.room,
            entry.device.label(),
            entry.channel,
            rw = max_room
        );
    }

    if show_markers {
        println!();
        println!("=== Room markers ===\n");
        if survey.markers.is_empty() {
            println!("  (no positioned text lines matched)");
        }
        for marker in &survey.markers {
            println!(
                "  p{} line {:<3} {:<10} \"{}\" at ({:.1}, {:.1})",
                marker.page_number,
                marker.line_index,
                marker.room_key,
                marker.matched_text,
                marker.bbox.x_min,
                marker.bbox.y_min
            );
        }
    }
}
