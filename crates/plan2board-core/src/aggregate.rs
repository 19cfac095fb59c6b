use crate::detect::RoomCount;
use crate::model::{BillOfMaterials, RoomInstance};
use crate::standards::StandardsTable;

/// Expand room-type counts into named room instances.
///
/// A room type contributes instances only when its count is > 0 AND the
/// standards table defines it; anything else is skipped silently.
/// Instances are ordered by pattern order, then instance index, which
/// fixes the row order of every downstream table.
pub fn build_rooms(counts: &[RoomCount], standards: &StandardsTable) -> Vec<RoomInstance> {
    let mut rooms = Vec::new();
    for rc in counts {
        if rc.count == 0 {
            continue;
        }
        let Some(quantities) = standards.get(&rc.key) else {
            continue;
        };
        for index in 1..=rc.count {
            rooms.push(RoomInstance {
                label: room_label(&rc.key, index, rc.count),
                room_key: rc.key.clone(),
                quantities: *quantities,
            });
        }
    }
    rooms
}

/// Sum device quantities across all room instances. Kinds no room
/// contributes to stay at zero rather than being omitted.
pub fn build_bom(rooms: &[RoomInstance]) -> BillOfMaterials {
    let mut bom = BillOfMaterials::default();
    for room in rooms {
        bom.add(&room.quantities);
    }
    bom
}

/// "kitchen" with 1 occurrence -> "Kitchen"; with 3 occurrences ->
/// "Kitchen 1".."Kitchen 3" (1-indexed).
fn room_label(key: &str, index: usize, count: usize) -> String {
    let capitalized = capitalize(key);
    if count > 1 {
        format!("{} {}", capitalized, index)
    } else {
        capitalized
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeviceKind, DeviceQuantities};
    use crate::standards::parse_standards_str;

    fn count(key: &str, count: usize) -> RoomCount {
        RoomCount {
            key: key.to_string(),
            count,
        }
    }

    fn standards() -> StandardsTable {
        parse_standards_str(
            r#"{
                "kitchen": { "touch_switches": 1, "dimmer_channels": 2 },
                "office": { "touch_switches": 1, "relay_channels": 1 }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_single_occurrence_has_no_suffix() {
        let rooms = build_rooms(&[count("kitchen", 1)], &standards());
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].label, "Kitchen");
        assert_eq!(rooms[0].room_key, "kitchen");
    }

    #[test]
    fn test_multiple_occurrences_are_numbered_from_one() {
        let rooms = build_rooms(&[count("kitchen", 3)], &standards());
        let labels: Vec<&str> = rooms.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["Kitchen 1", "Kitchen 2", "Kitchen 3"]);
    }

    #[test]
    fn test_zero_count_skipped() {
        let rooms = build_rooms(&[count("kitchen", 0), count("office", 1)], &standards());
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].label, "Office");
    }

    #[test]
    fn test_room_type_without_standard_skipped() {
        // "hallway" is detected but has no entry in this table
        let rooms = build_rooms(&[count("hallway", 2), count("kitchen", 1)], &standards());
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].room_key, "kitchen");
    }

    #[test]
    fn test_instances_share_the_standard_quantities() {
        let rooms = build_rooms(&[count("kitchen", 2)], &standards());
        assert_eq!(rooms[0].quantities, rooms[1].quantities);
        assert_eq!(rooms[0].quantities.dimmer_channels, 2);
    }

    #[test]
    fn test_bom_is_fieldwise_sum_over_instances() {
        let rooms = build_rooms(&[count("kitchen", 2), count("office", 1)], &standards());
        let bom = build_bom(&rooms);
        assert_eq!(bom.get(DeviceKind::TouchSwitch), 3);
        assert_eq!(bom.get(DeviceKind::DimmerChannel), 4);
        assert_eq!(bom.get(DeviceKind::RelayChannel), 1);
        assert_eq!(bom.get(DeviceKind::BlindActuator), 0);

        // conservation: each field equals the sum over instances
        for kind in DeviceKind::ALL {
            let sum: u32 = rooms.iter().map(|r| r.quantities.get(kind)).sum();
            assert_eq!(bom.get(kind), sum);
        }
    }

    #[test]
    fn test_empty_input_yields_empty_bom() {
        let bom = build_bom(&[]);
        assert_eq!(bom.totals, DeviceQuantities::default());
    }
}
