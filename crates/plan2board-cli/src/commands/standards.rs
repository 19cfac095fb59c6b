use plan2board_core::error::Plan2BoardError;
use plan2board_core::model::DeviceKind;
use plan2board_core::standards::builtin;
use std::path::Path;

pub fn list() -> Result<(), Plan2BoardError> {
    let table = builtin::default_standards()?;

    println!("Built-in room standards:\n");
    for (key, quantities) in table.iter() {
        println!("  {:<10} {} device(s)", key, quantities.total());
    }
    println!("\nUse `plan2board standards show <room>` for the full breakdown.");
    Ok(())
}

pub fn show(room: &str) -> Result<(), Plan2BoardError> {
    let table = builtin::default_standards()?;

    let Some(quantities) = table.get(room) else {
        let known: Vec<&str> = table.room_keys().collect();
        return Err(Plan2BoardError::StandardsInvalid(format!(
            "no standard defined for '{}'. Known room types: {}",
            room,
            known.join(", ")
        )));
    };

    println!("Standard for '{}':\n", room);
    for kind in DeviceKind::ALL {
        println!("  {:<20} {}", kind.bom_label(), quantities.get(kind));
    }
    println!("\n  {:<20} {}", "Total", quantities.total());
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), Plan2BoardError> {
    let table = plan2board_core::standards::load_standards(file)?;

    println!("Standards table is valid.");
    println!("  Room types: {}", table.len());

    // Flag room types the detector will never look for (warnings, not errors)
    let known_keys: Vec<&str> = plan2board_core::detect::ROOM_PATTERNS
        .iter()
        .map(|p| p.key)
        .collect();
    let unreachable: Vec<&str> = table
        .room_keys()
        .filter(|k| !known_keys.contains(k))
        .collect();

    if !unreachable.is_empty() {
        println!("\nWarnings:");
        for key in unreachable {
            println!("  - '{}' has no detection pattern and will never match", key);
        }
    }

    Ok(())
}
