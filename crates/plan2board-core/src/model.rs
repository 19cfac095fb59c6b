use serde::{Deserialize, Serialize};
use std::fmt;

/// The device types a room standard can prescribe.
///
/// `ALL` fixes the order in which devices are listed per room and in
/// which channel assignment walks a room's devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    TouchSwitch,
    PresenceSensor,
    DimmerChannel,
    RelayChannel,
    BlindActuator,
    LeakSensor,
    TemperatureSensor,
}

impl DeviceKind {
    pub const ALL: [DeviceKind; 7] = [
        DeviceKind::TouchSwitch,
        DeviceKind::PresenceSensor,
        DeviceKind::DimmerChannel,
        DeviceKind::RelayChannel,
        DeviceKind::BlindActuator,
        DeviceKind::LeakSensor,
        DeviceKind::TemperatureSensor,
    ];

    /// Singular display label, used for I/O map rows.
    pub fn label(&self) -> &'static str {
        match self {
            DeviceKind::TouchSwitch => "Touch switch",
            DeviceKind::PresenceSensor => "Presence sensor",
            DeviceKind::DimmerChannel => "Dimmer channel",
            DeviceKind::RelayChannel => "Relay channel",
            DeviceKind::BlindActuator => "Blind actuator",
            DeviceKind::LeakSensor => "Leak sensor",
            DeviceKind::TemperatureSensor => "Temperature sensor",
        }
    }

    /// Plural display label, used for bill-of-materials rows.
    pub fn bom_label(&self) -> &'static str {
        match self {
            DeviceKind::TouchSwitch => "Touch switches",
            DeviceKind::PresenceSensor => "Presence sensors",
            DeviceKind::DimmerChannel => "Dimmer channels",
            DeviceKind::RelayChannel => "Relay channels",
            DeviceKind::BlindActuator => "Blind actuators",
            DeviceKind::LeakSensor => "Leak sensors",
            DeviceKind::TemperatureSensor => "Temperature sensors",
        }
    }

    /// True if one unit of this device occupies a channel slot on a
    /// hardware module (dimmer, relay or blind). The rest are bus
    /// devices and get an empty channel label.
    pub fn consumes_channel(&self) -> bool {
        matches!(
            self,
            DeviceKind::DimmerChannel | DeviceKind::RelayChannel | DeviceKind::BlindActuator
        )
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Device counts prescribed for one room type. Missing JSON keys
/// default to 0 so partial standards entries are valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceQuantities {
    #[serde(default)]
    pub touch_switches: u32,
    #[serde(default)]
    pub presence_sensors: u32,
    #[serde(default)]
    pub dimmer_channels: u32,
    #[serde(default)]
    pub relay_channels: u32,
    #[serde(default)]
    pub blind_actuators: u32,
    #[serde(default)]
    pub leak_sensors: u32,
    #[serde(default)]
    pub temperature_sensors: u32,
}

impl DeviceQuantities {
    pub fn get(&self, kind: DeviceKind) -> u32 {
        match kind {
            DeviceKind::TouchSwitch => self.touch_switches,
            DeviceKind::PresenceSensor => self.presence_sensors,
            DeviceKind::DimmerChannel => self.dimmer_channels,
            DeviceKind::RelayChannel => self.relay_channels,
            DeviceKind::BlindActuator => self.blind_actuators,
            DeviceKind::LeakSensor => self.leak_sensors,
            DeviceKind::TemperatureSensor => self.temperature_sensors,
        }
    }

    fn get_mut(&mut self, kind: DeviceKind) -> &mut u32 {
        match kind {
            DeviceKind::TouchSwitch => &mut self.touch_switches,
            DeviceKind::PresenceSensor => &mut self.presence_sensors,
            DeviceKind::DimmerChannel => &mut self.dimmer_channels,
            DeviceKind::RelayChannel => &mut self.relay_channels,
            DeviceKind::BlindActuator => &mut self.blind_actuators,
            DeviceKind::LeakSensor => &mut self.leak_sensors,
            DeviceKind::TemperatureSensor => &mut self.temperature_sensors,
        }
    }

    /// Total device count across all kinds.
    pub fn total(&self) -> u32 {
        DeviceKind::ALL.iter().map(|k| self.get(*k)).sum()
    }
}

/// One concrete room detected on the plan, bound to the device
/// quantities its room type's standard prescribes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomInstance {
    /// Display label, e.g. "Kitchen" or "Kitchen 2".
    pub label: String,
    /// Canonical room-type key, e.g. "kitchen". Always present in the
    /// standards table the instance was built from.
    pub room_key: String,
    pub quantities: DeviceQuantities,
}

/// Aggregate device counts across all detected rooms, kept zeroed for
/// kinds no room contributes to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillOfMaterials {
    pub totals: DeviceQuantities,
}

impl BillOfMaterials {
    pub fn add(&mut self, quantities: &DeviceQuantities) {
        for kind in DeviceKind::ALL {
            *self.totals.get_mut(kind) += quantities.get(kind);
        }
    }

    pub fn get(&self, kind: DeviceKind) -> u32 {
        self.totals.get(kind)
    }

    /// Rows in fixed device-kind order, including zero quantities.
    pub fn rows(&self) -> impl Iterator<Item = (DeviceKind, u32)> + '_ {
        DeviceKind::ALL.into_iter().map(|k| (k, self.totals.get(k)))
    }
}
