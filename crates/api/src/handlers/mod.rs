//! Request handlers.
//!
//! Handlers stay thin: extract typed inputs, delegate to `climate_core`, and
//! map failures via [`AppError`](crate::error::AppError).

pub mod readings;
