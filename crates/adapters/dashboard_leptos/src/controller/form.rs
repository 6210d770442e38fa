//! The add-device form and its open/remove/save lifecycle.

use plcbridge_domain::config::{DEFAULT_MODBUS_PORT, DEFAULT_S7_RACK, DEFAULT_S7_SLOT};
use plcbridge_domain::protocol::Protocol;
use serde::Serialize;

use crate::api::{ApiError, StatusReply};

/// Alert shown when "Add Device" is activated while a form is still mounted.
pub const ALREADY_OPEN_MESSAGE: &str =
    "A device form is already open. Please save or remove the current form before adding a new one.";

/// Raw text of every field in the add-device form.
///
/// Values stay exactly as typed; the backend owns number parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceFormState {
    pub device_name: String,
    pub protocol: Protocol,
    pub modbus_ip: String,
    pub modbus_port: String,
    pub s7_ip: String,
    pub s7_rack: String,
    pub s7_slot: String,
}

impl Default for DeviceFormState {
    fn default() -> Self {
        Self {
            device_name: String::new(),
            protocol: Protocol::default(),
            modbus_ip: String::new(),
            modbus_port: DEFAULT_MODBUS_PORT.to_string(),
            s7_ip: String::new(),
            s7_rack: DEFAULT_S7_RACK.to_string(),
            s7_slot: DEFAULT_S7_SLOT.to_string(),
        }
    }
}

impl DeviceFormState {
    /// Apply a value coming from the protocol `<select>`.
    ///
    /// The select only offers known protocols, so anything else is ignored.
    pub fn select_protocol(&mut self, value: &str) {
        if let Ok(protocol) = value.parse() {
            self.protocol = protocol;
        }
    }

    /// Whether the config panel for `protocol` is the one on display.
    ///
    /// Exactly one panel is visible at any time.
    #[must_use]
    pub fn is_panel_visible(&self, protocol: Protocol) -> bool {
        self.protocol == protocol
    }

    /// Serialize the form into the `/add_device` payload.
    #[must_use]
    pub fn to_request(&self) -> AddDeviceRequest {
        let config = match self.protocol {
            Protocol::Modbus => ConfigPayload::Modbus {
                ip: self.modbus_ip.clone(),
                port: self.modbus_port.clone(),
            },
            Protocol::S7 => ConfigPayload::S7 {
                ip: self.s7_ip.clone(),
                rack: self.s7_rack.clone(),
                slot: self.s7_slot.clone(),
            },
        };
        AddDeviceRequest {
            device_name: self.device_name.clone(),
            protocol: self.protocol,
            config,
        }
    }
}

/// Body of `POST /add_device`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddDeviceRequest {
    pub device_name: String,
    pub protocol: Protocol,
    pub config: ConfigPayload,
}

/// Protocol-specific part of [`AddDeviceRequest`], sent as typed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigPayload {
    Modbus { ip: String, port: String },
    S7 { ip: String, rack: String, slot: String },
}

/// What the page should do once the backend answered a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The form was unmounted; reload the page.
    Reload,
    /// The form stays mounted; show this alert.
    Alert(String),
    /// The request never got a reply; log this to the console.
    Log(String),
}

/// Returned by [`FormLifecycle::open`] when a form is already mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlreadyOpen;

/// Single-instance form lifecycle tied to the "Add Device" trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLifecycle {
    form: Option<DeviceFormState>,
    trigger_enabled: bool,
}

impl Default for FormLifecycle {
    fn default() -> Self {
        Self {
            form: None,
            trigger_enabled: true,
        }
    }
}

impl FormLifecycle {
    /// Mount a fresh form and disable the trigger.
    ///
    /// # Errors
    ///
    /// Returns [`AlreadyOpen`] and changes nothing if a form is mounted.
    pub fn open(&mut self) -> Result<(), AlreadyOpen> {
        if self.form.is_some() {
            return Err(AlreadyOpen);
        }
        self.form = Some(DeviceFormState::default());
        self.trigger_enabled = false;
        Ok(())
    }

    /// Unmount the form. The trigger stays disabled until the page reloads.
    pub fn remove(&mut self) {
        self.form = None;
    }

    /// Unmount the form after the backend accepted it and re-enable the trigger.
    pub fn save_succeeded(&mut self) {
        self.form = None;
        self.trigger_enabled = true;
    }

    /// Apply the backend's answer to a save.
    ///
    /// Only a `success` status unmounts the form.
    pub fn apply_save_reply(&mut self, reply: Result<StatusReply, ApiError>) -> SaveOutcome {
        match reply {
            Ok(reply) if reply.is_success() => {
                self.save_succeeded();
                SaveOutcome::Reload
            }
            Ok(reply) => SaveOutcome::Alert(save_error_message(reply.message.as_deref())),
            Err(err) => SaveOutcome::Log(format!("failed to add device: {err}")),
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.form.is_some()
    }

    #[must_use]
    pub fn trigger_enabled(&self) -> bool {
        self.trigger_enabled
    }

    #[must_use]
    pub fn form(&self) -> Option<&DeviceFormState> {
        self.form.as_ref()
    }

    /// Edit the mounted form, if any.
    pub fn edit(&mut self, f: impl FnOnce(&mut DeviceFormState)) {
        if let Some(form) = self.form.as_mut() {
            f(form);
        }
    }
}

/// Alert text for a rejected save.
#[must_use]
fn save_error_message(message: Option<&str>) -> String {
    format!("Error adding device: {}", message.unwrap_or_default())
}
