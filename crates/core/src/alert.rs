//! Sensor range alerts and the threshold checks that produce them.
//!
//! Pure logic. The evaluator calls [`derive_alerts`] once the device has been
//! authorized and its firmware version accepted.

use serde::{Deserialize, Serialize};

use crate::reading::DeviceReadingRequest;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Valid humidity range, inclusive on both ends.
pub const HUMIDITY_RANGE: SensorRange = SensorRange { min: 0.0, max: 50.0 };

/// Valid temperature range, inclusive on both ends.
pub const TEMPERATURE_RANGE: SensorRange = SensorRange { min: 0.0, max: 50.0 };

pub const HUMIDITY_OUT_OF_RANGE_MESSAGE: &str = "Invalid range of humidity";
pub const TEMPERATURE_OUT_OF_RANGE_MESSAGE: &str = "Invalid range of temperature";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Kind of sensor violation an [`Alert`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertType {
    HumiditySensorOutOfRange,
    TemperatureSensorOutOfRange,
}

/// A single sensor reading that fell outside its valid range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub message: String,
}

impl Alert {
    pub fn new(alert_type: AlertType, message: impl Into<String>) -> Self {
        Self {
            alert_type,
            message: message.into(),
        }
    }
}

/// Closed numeric range `[min, max]` a sensor value must lie within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorRange {
    pub min: f64,
    pub max: f64,
}

impl SensorRange {
    /// True when `value` is strictly below `min` or strictly above `max`.
    ///
    /// NaN is never out of range: both comparisons are false.
    pub fn is_violated_by(&self, value: f64) -> bool {
        value > self.max || value < self.min
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Check humidity then temperature and return the violations in that order.
pub fn derive_alerts(reading: &DeviceReadingRequest) -> Vec<Alert> {
    let mut alerts = Vec::new();

    check_range(
        &mut alerts,
        reading.humidity,
        &HUMIDITY_RANGE,
        AlertType::HumiditySensorOutOfRange,
        HUMIDITY_OUT_OF_RANGE_MESSAGE,
    );
    check_range(
        &mut alerts,
        reading.temperature,
        &TEMPERATURE_RANGE,
        AlertType::TemperatureSensorOutOfRange,
        TEMPERATURE_OUT_OF_RANGE_MESSAGE,
    );

    alerts
}

fn check_range(
    alerts: &mut Vec<Alert>,
    value: f64,
    range: &SensorRange,
    alert_type: AlertType,
    message: &str,
) {
    if range.is_violated_by(value) {
        alerts.push(Alert::new(alert_type, message));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(humidity: f64, temperature: f64) -> DeviceReadingRequest {
        DeviceReadingRequest {
            temperature,
            humidity,
            firmware_version: "1.0.0".to_string(),
        }
    }

    fn types(alerts: &[Alert]) -> Vec<AlertType> {
        alerts.iter().map(|a| a.alert_type).collect()
    }

    #[test]
    fn no_alerts_within_range() {
        assert!(derive_alerts(&reading(30.0, 20.0)).is_empty());
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert!(derive_alerts(&reading(0.0, 0.0)).is_empty());
        assert!(derive_alerts(&reading(50.0, 50.0)).is_empty());
    }

    #[test]
    fn humidity_just_outside_range_alerts() {
        assert_eq!(
            types(&derive_alerts(&reading(50.01, 20.0))),
            vec![AlertType::HumiditySensorOutOfRange]
        );
        assert_eq!(
            types(&derive_alerts(&reading(-0.01, 20.0))),
            vec![AlertType::HumiditySensorOutOfRange]
        );
    }

    #[test]
    fn temperature_just_outside_range_alerts() {
        let alerts = derive_alerts(&reading(30.0, 50.5));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].alert_type, AlertType::TemperatureSensorOutOfRange);
        assert_eq!(alerts[0].message, "Invalid range of temperature");
    }

    #[test]
    fn humidity_alert_precedes_temperature_alert() {
        let alerts = derive_alerts(&reading(-5.0, 80.0));
        assert_eq!(
            types(&alerts),
            vec![
                AlertType::HumiditySensorOutOfRange,
                AlertType::TemperatureSensorOutOfRange,
            ]
        );
        assert_eq!(alerts[0].message, "Invalid range of humidity");
    }

    #[test]
    fn nan_does_not_alert() {
        assert!(derive_alerts(&reading(f64::NAN, f64::NAN)).is_empty());
    }

    #[test]
    fn alert_serializes_with_type_key() {
        let alert = Alert::new(AlertType::HumiditySensorOutOfRange, "Invalid range of humidity");
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["type"], "HumiditySensorOutOfRange");
        assert_eq!(json["message"], "Invalid range of humidity");
    }
}
