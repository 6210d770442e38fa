//! HTTP client wrapping `gloo-net` for the backend endpoints.

use gloo_net::http::Request;
use plcbridge_domain::device::DeviceSummary;
use serde::Deserialize;

use crate::controller::form::AddDeviceRequest;
use crate::controller::server_toggle::ServerAction;

/// Status value the backend uses for accepted requests.
const STATUS_SUCCESS: &str = "success";

/// Transport or decoding failure.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// `{status, message}` payload returned by the mutating endpoints.
///
/// Read whatever the HTTP status code is: only `status` decides success.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusReply {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// Submit the add-device form.
pub async fn add_device(request: &AddDeviceRequest) -> Result<StatusReply, ApiError> {
    let resp = Request::post("/add_device").json(request)?.send().await?;
    Ok(resp.json().await?)
}

/// Fetch the `{device_name, protocol}` listing.
pub async fn list_devices() -> Result<Vec<DeviceSummary>, ApiError> {
    let resp = Request::get("/list_devices").send().await?;
    Ok(resp.json().await?)
}

/// Start or stop the OPC-UA server.
pub async fn toggle_server(action: ServerAction) -> Result<StatusReply, ApiError> {
    let resp = Request::post(action.path())
        .json(&serde_json::json!({}))?
        .send()
        .await?;
    Ok(resp.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_only_success_status_as_success() {
        let ok: StatusReply = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert!(ok.is_success());
        assert_eq!(ok.message, None);

        let err: StatusReply =
            serde_json::from_str(r#"{"status":"error","message":"Invalid protocol"}"#).unwrap();
        assert!(!err.is_success());
        assert_eq!(err.message.as_deref(), Some("Invalid protocol"));
    }
}
