//! Reading evaluation: authorization, firmware format, then thresholds.
//!
//! Each stage is terminal on failure, so a rejected secret is never reported
//! alongside a bad firmware version, and a bad firmware version suppresses
//! threshold alerts.

use std::sync::Arc;

use crate::alert::{derive_alerts, Alert};
use crate::error::{single_field_error, CoreError, FieldErrors};
use crate::firmware::{is_valid_semantic_version, FIRMWARE_VERSION_FIELD, INVALID_FIRMWARE_MESSAGE};
use crate::reading::DeviceReadingRequest;
use crate::secret::SecretValidator;

/// Detail reported to devices whose secret is rejected.
pub const UNAUTHORIZED_DETAIL: &str = "Device secret is not within the valid range.";

/// Result of evaluating one reading.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationOutcome {
    /// The device secret was missing or not authorized.
    Unauthorized,
    /// The firmware version is not a semantic version.
    InvalidFirmwareFormat(FieldErrors),
    /// Threshold violations, humidity first. Empty when all values are in range.
    Alerts(Vec<Alert>),
}

impl EvaluationOutcome {
    /// Convert into a `Result` so handlers can propagate failures with `?`.
    pub fn into_result(self) -> Result<Vec<Alert>, CoreError> {
        match self {
            EvaluationOutcome::Unauthorized => {
                Err(CoreError::Unauthorized(UNAUTHORIZED_DETAIL.to_string()))
            }
            EvaluationOutcome::InvalidFirmwareFormat(errors) => {
                Err(CoreError::FieldValidation(errors))
            }
            EvaluationOutcome::Alerts(alerts) => Ok(alerts),
        }
    }
}

/// Evaluates readings against a shared [`SecretValidator`].
///
/// Holds no mutable state; one instance serves all requests.
#[derive(Clone)]
pub struct ReadingEvaluator {
    validator: Arc<dyn SecretValidator>,
}

impl ReadingEvaluator {
    pub fn new(validator: Arc<dyn SecretValidator>) -> Self {
        Self { validator }
    }

    /// Run the auth, format and threshold checks in order.
    pub fn evaluate(
        &self,
        secret: Option<&str>,
        reading: &DeviceReadingRequest,
    ) -> EvaluationOutcome {
        if !self.validator.validate_device_secret(secret) {
            return EvaluationOutcome::Unauthorized;
        }

        if !is_valid_semantic_version(&reading.firmware_version) {
            return EvaluationOutcome::InvalidFirmwareFormat(single_field_error(
                FIRMWARE_VERSION_FIELD,
                INVALID_FIRMWARE_MESSAGE,
            ));
        }

        EvaluationOutcome::Alerts(derive_alerts(reading))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
