//! Request extractors.
//!
//! - [`device_secret::DeviceSecret`] -- Reads the device's pre-shared secret header.

pub mod device_secret;
