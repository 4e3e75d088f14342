//! Handlers for device reading submissions.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use climate_core::alert::Alert;
use climate_core::evaluator::EvaluationOutcome;
use climate_core::reading::DeviceReadingRequest;

use crate::error::{AppError, AppResult};
use crate::middleware::device_secret::DeviceSecret;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /readings/evaluate
///
/// Evaluate one sensor reading and return the alerts it raises. Devices whose
/// firmware version is rejected here request a firmware update elsewhere.
pub async fn evaluate_reading(
    State(state): State<AppState>,
    DeviceSecret(secret): DeviceSecret,
    payload: Result<Json<DeviceReadingRequest>, JsonRejection>,
) -> AppResult<Json<DataResponse<Vec<Alert>>>> {
    let Json(reading) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected reading payload");
        AppError::BadRequest(rejection.body_text())
    })?;

    let outcome = state.evaluator.evaluate(secret.as_deref(), &reading);

    match &outcome {
        EvaluationOutcome::Unauthorized => {
            tracing::info!(has_secret = secret.is_some(), "Rejected device secret");
        }
        EvaluationOutcome::InvalidFirmwareFormat(_) => {
            tracing::info!(
                firmware_version = %reading.firmware_version,
                "Rejected firmware version format"
            );
        }
        EvaluationOutcome::Alerts(alerts) => {
            tracing::debug!(
                humidity = reading.humidity,
                temperature = reading.temperature,
                firmware_version = %reading.firmware_version,
                alert_count = alerts.len(),
                "Evaluated reading"
            );
        }
    }

    let alerts = outcome.into_result()?;
    Ok(Json(DataResponse { data: alerts }))
}
