//! Device secret extractor for Axum handlers.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderName;

/// Header carrying the device's pre-shared secret.
pub const DEVICE_SECRET_HEADER: HeaderName = HeaderName::from_static("x-device-shared-secret");

/// The secret a device presented, if any.
///
/// Never rejects: a missing header or a value that is not valid UTF-8 yields
/// `None`, and deciding what that means is left to the evaluator.
///
/// ```ignore
/// async fn my_handler(DeviceSecret(secret): DeviceSecret) { /* ... */ }
/// ```
#[derive(Debug, Clone)]
pub struct DeviceSecret(pub Option<String>);

impl<S> FromRequestParts<S> for DeviceSecret
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let secret = parts
            .headers
            .get(&DEVICE_SECRET_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Ok(DeviceSecret(secret))
    }
}
