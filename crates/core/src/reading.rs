//! Sensor reading submitted by a device.

use serde::{Deserialize, Serialize};

/// One reading as submitted by a device.
///
/// Field names follow the device wire format (`firmwareVersion`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceReadingRequest {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity.
    pub humidity: f64,
    /// Firmware version reported by the device, expected in semver form.
    pub firmware_version: String,
}
