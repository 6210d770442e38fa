//! Start/stop button for the OPC-UA server.
//!
//! The button label is the only state: the next action is read from it.

use crate::api::{ApiError, StatusReply};

pub const START_LABEL: &str = "Start Server";
pub const STOP_LABEL: &str = "Stop Server";

/// What a click on the toggle asks the backend to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerAction {
    Start,
    Stop,
}

impl ServerAction {
    /// `Start` when the label mentions "Start", `Stop` otherwise.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.contains("Start") {
            Self::Start
        } else {
            Self::Stop
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Start => "/opcua/start",
            Self::Stop => "/opcua/stop",
        }
    }

    /// Label to show once the backend confirmed the action.
    #[must_use]
    pub fn label_after_success(self) -> &'static str {
        match self {
            Self::Start => STOP_LABEL,
            Self::Stop => START_LABEL,
        }
    }
}

/// What the page should do once a toggle request finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Show this alert; the label may have flipped.
    Alert(String),
    /// The request never got a reply; log this to the console.
    Log(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerToggle {
    label: String,
}

impl Default for ServerToggle {
    fn default() -> Self {
        Self {
            label: START_LABEL.to_string(),
        }
    }
}

impl ServerToggle {
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn action(&self) -> ServerAction {
        ServerAction::from_label(&self.label)
    }

    /// Flip the label for an action the backend accepted.
    ///
    /// Takes the action captured at click time, not the current label.
    pub fn confirm(&mut self, action: ServerAction) {
        self.label = action.label_after_success().to_string();
    }

    /// Apply the backend's answer to `action`.
    ///
    /// The label flips on a `success` status only; any reply is alerted.
    pub fn apply_reply(
        &mut self,
        action: ServerAction,
        reply: Result<StatusReply, ApiError>,
    ) -> ToggleOutcome {
        match reply {
            Ok(reply) => {
                if reply.is_success() {
                    self.confirm(action);
                }
                ToggleOutcome::Alert(reply.message.unwrap_or_default())
            }
            Err(err) => ToggleOutcome::Log(format!("Error: {err}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_when_label_says_start() {
        let toggle = ServerToggle::default();
        assert_eq!(toggle.action(), ServerAction::Start);
        assert_eq!(toggle.action().path(), "/opcua/start");
    }

    #[test]
    fn should_flip_label_after_confirmed_start_and_stop() {
        let mut toggle = ServerToggle::default();
        toggle.confirm(toggle.action());
        assert_eq!(toggle.label(), "Stop Server");
        assert_eq!(toggle.action(), ServerAction::Stop);
        assert_eq!(toggle.action().path(), "/opcua/stop");

        toggle.confirm(toggle.action());
        assert_eq!(toggle.label(), "Start Server");
    }

    fn reply(status: &str, message: Option<&str>) -> StatusReply {
        StatusReply {
            status: status.to_string(),
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn should_flip_label_and_alert_on_success_reply() {
        let mut toggle = ServerToggle::default();
        let outcome = toggle.apply_reply(
            ServerAction::Start,
            Ok(reply("success", Some("OPC UA Server started at opc.tcp://0.0.0.0:4840"))),
        );

        assert_eq!(
            outcome,
            ToggleOutcome::Alert("OPC UA Server started at opc.tcp://0.0.0.0:4840".to_string())
        );
        assert_eq!(toggle.label(), STOP_LABEL);
    }

    #[test]
    fn should_keep_label_and_alert_on_error_reply() {
        let mut toggle = ServerToggle::default();
        let outcome = toggle.apply_reply(
            ServerAction::Start,
            Ok(reply("error", Some("OPC UA Server is already running"))),
        );

        assert_eq!(
            outcome,
            ToggleOutcome::Alert("OPC UA Server is already running".to_string())
        );
        assert_eq!(toggle.label(), START_LABEL);
    }

    #[test]
    fn should_alert_empty_text_when_reply_has_no_message() {
        let mut toggle = ServerToggle::default();
        let outcome = toggle.apply_reply(ServerAction::Start, Ok(reply("error", None)));
        assert_eq!(outcome, ToggleOutcome::Alert(String::new()));
        assert_eq!(toggle.label(), START_LABEL);
    }

    #[test]
    fn should_keep_label_and_only_log_transport_failure() {
        let mut toggle = ServerToggle::default();
        let outcome = toggle.apply_reply(
            ServerAction::Start,
            Err(ApiError {
                message: "connection refused".to_string(),
            }),
        );

        assert_eq!(outcome, ToggleOutcome::Log("Error: connection refused".to_string()));
        assert_eq!(toggle.label(), START_LABEL);
    }

    #[test]
    fn should_derive_stop_from_any_label_without_start() {
        assert_eq!(ServerAction::from_label("Stop Server"), ServerAction::Stop);
        assert_eq!(ServerAction::from_label(""), ServerAction::Stop);
        assert_eq!(ServerAction::from_label("Start"), ServerAction::Start);
    }
}
