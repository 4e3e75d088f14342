//! Domain logic for the climate monitor.
//!
//! Everything in this crate is pure: no HTTP types, no async, no I/O. The
//! `api` crate wires these pieces into request handlers.

pub mod alert;
pub mod error;
pub mod evaluator;
pub mod firmware;
pub mod hashing;
pub mod reading;
pub mod secret;
