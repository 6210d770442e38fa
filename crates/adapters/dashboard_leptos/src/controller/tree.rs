//! Protocol trees built from the device listing.

use plcbridge_domain::device::DeviceSummary;
use plcbridge_domain::protocol::Protocol;

/// One device in a protocol tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceNode {
    pub device_name: String,
    pub protocol: Protocol,
}

impl DeviceNode {
    /// Node text, e.g. `PLC1 (modbus)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.device_name, self.protocol)
    }
}

/// Devices split by protocol, in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceTree {
    modbus: Vec<DeviceNode>,
    s7: Vec<DeviceNode>,
}

impl DeviceTree {
    /// Sort devices into their trees. Unrecognised protocols are dropped.
    #[must_use]
    pub fn from_devices(devices: &[DeviceSummary]) -> Self {
        let mut tree = Self::default();
        for device in devices {
            let Some(protocol) = device.known_protocol() else {
                continue;
            };
            let node = DeviceNode {
                device_name: device.device_name.clone(),
                protocol,
            };
            match protocol {
                Protocol::Modbus => tree.modbus.push(node),
                Protocol::S7 => tree.s7.push(node),
            }
        }
        tree
    }

    #[must_use]
    pub fn branch(&self, protocol: Protocol) -> &[DeviceNode] {
        match protocol {
            Protocol::Modbus => &self.modbus,
            Protocol::S7 => &self.s7,
        }
    }
}

/// Session-local tag list under a device node. Nothing here reaches the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagEditor {
    pub input: String,
    tags: Vec<String>,
}

impl TagEditor {
    /// Handle a key press in the tag input.
    ///
    /// Enter with non-blank input appends the trimmed text and clears the
    /// input. An Enter that confirms an IME composition is not a submit.
    /// Returns whether a tag was added.
    pub fn key(&mut self, key: &str, composing: bool) -> bool {
        if key != "Enter" || composing {
            return false;
        }
        let tag = self.input.trim();
        if tag.is_empty() {
            return false;
        }
        self.tags.push(tag.to_string());
        self.input.clear();
        true
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}
