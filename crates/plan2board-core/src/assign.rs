use crate::model::{DeviceKind, RoomInstance};
use serde::{Deserialize, Serialize};

/// Dimmer modules carry 4 channels, relay modules 16. Blinds are
/// numbered sequentially without banking.
pub const DIMMER_BANK_SIZE: u32 = 4;
pub const RELAY_BANK_SIZE: u32 = 16;

/// One row of the draft I/O map: a single physical device unit and the
/// channel it was assigned. The channel is empty for bus devices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IoEntry {
    pub room: String,
    pub device: DeviceKind,
    pub channel: String,
}

/// Walk the room list in order and hand out channels sequentially.
///
/// Counters are global for the whole document and never reset per
/// room, so channels on one module span room boundaries. This is a
/// draft for preview, not a validated hardware plan.
pub fn assign_channels(rooms: &[RoomInstance]) -> Vec<IoEntry> {
    let mut dimmer_counter = 1u32;
    let mut relay_counter = 1u32;
    let mut blind_counter = 1u32;
    let mut entries = Vec::new();

    for room in rooms {
        for kind in DeviceKind::ALL {
            for _ in 0..room.quantities.get(kind) {
                let channel = match kind {
                    DeviceKind::DimmerChannel => {
                        let label = bank_label("Dimmer", dimmer_counter, DIMMER_BANK_SIZE);
                        dimmer_counter += 1;
                        label
                    }
                    DeviceKind::RelayChannel => {
                        let label = bank_label("Relay", relay_counter, RELAY_BANK_SIZE);
                        relay_counter += 1;
                        label
                    }
                    DeviceKind::BlindActuator => {
                        let label = format!("Blind {}", blind_counter);
                        blind_counter += 1;
                        label
                    }
                    _ => String::new(),
                };
                entries.push(IoEntry {
                    room: room.label.clone(),
                    device: kind,
                    channel,
                });
            }
        }
    }

    entries
}

/// "Dimmer 2 ch1" for counter 5 at bank size 4: bank = ceil(n / size),
/// slot = ((n - 1) mod size) + 1.
fn bank_label(prefix: &str, counter: u32, bank_size: u32) -> String {
    let bank = (counter - 1) / bank_size + 1;
    let slot = (counter - 1) % bank_size + 1;
    format!("{} {} ch{}", prefix, bank, slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeviceQuantities;

    fn room(label: &str, quantities: DeviceQuantities) -> RoomInstance {
        RoomInstance {
            label: label.to_string(),
            room_key: label.to_lowercase(),
            quantities,
        }
    }

    #[test]
    fn test_dimmer_bank_rollover_at_four() {
        let expected = [
            "Dimmer 1 ch1",
            "Dimmer 1 ch2",
            "Dimmer 1 ch3",
            "Dimmer 1 ch4",
            "Dimmer 2 ch1",
            "Dimmer 2 ch2",
            "Dimmer 2 ch3",
            "Dimmer 2 ch4",
        ];
        for (i, want) in expected.iter().enumerate() {
            assert_eq!(bank_label("Dimmer", i as u32 + 1, DIMMER_BANK_SIZE), *want);
        }
    }

    #[test]
    fn test_relay_bank_rollover_at_sixteen() {
        assert_eq!(bank_label("Relay", 1, RELAY_BANK_SIZE), "Relay 1 ch1");
        assert_eq!(bank_label("Relay", 16, RELAY_BANK_SIZE), "Relay 1 ch16");
        assert_eq!(bank_label("Relay", 17, RELAY_BANK_SIZE), "Relay 2 ch1");
    }

    #[test]
    fn test_one_entry_per_physical_unit() {
        let rooms = vec![room(
            "Kitchen",
            DeviceQuantities {
                touch_switches: 3,
                ..Default::default()
            },
        )];
        let entries = assign_channels(&rooms);
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.device == DeviceKind::TouchSwitch));
        assert!(entries.iter().all(|e| e.channel.is_empty()));
    }

    #[test]
    fn test_counters_span_room_boundaries() {
        let q = DeviceQuantities {
            dimmer_channels: 3,
            ..Default::default()
        };
        let rooms = vec![room("Kitchen", q), room("Office", q)];
        let entries = assign_channels(&rooms);
        let channels: Vec<&str> = entries.iter().map(|e| e.channel.as_str()).collect();
        assert_eq!(
            channels,
            [
                "Dimmer 1 ch1",
                "Dimmer 1 ch2",
                "Dimmer 1 ch3",
                "Dimmer 1 ch4",
                "Dimmer 2 ch1",
                "Dimmer 2 ch2",
            ]
        );
        assert_eq!(entries[3].room, "Office");
    }

    #[test]
    fn test_blinds_numbered_without_banking() {
        let q = DeviceQuantities {
            blind_actuators: 2,
            ..Default::default()
        };
        let rooms = vec![room("Living", q), room("Bedroom", q)];
        let entries = assign_channels(&rooms);
        let channels: Vec<&str> = entries.iter().map(|e| e.channel.as_str()).collect();
        assert_eq!(channels, ["Blind 1", "Blind 2", "Blind 3", "Blind 4"]);
    }

    #[test]
    fn test_device_kind_order_within_a_room() {
        let rooms = vec![room(
            "Bath",
            DeviceQuantities {
                touch_switches: 1,
                presence_sensors: 1,
                dimmer_channels: 1,
                relay_channels: 1,
                blind_actuators: 1,
                leak_sensors: 1,
                temperature_sensors: 1,
            },
        )];
        let entries = assign_channels(&rooms);
        let kinds: Vec<DeviceKind> = entries.iter().map(|e| e.device).collect();
        assert_eq!(kinds, DeviceKind::ALL);
    }
}
