//! Core library components.
//!
//! This module contains the reusable logic for fetching organization keys,
//! sealing secret values and submitting them, independent of the CLI.

pub mod api;
pub mod cipher;
pub mod config;
pub mod constants;
pub mod csv;
pub mod secrets;
pub mod types;
pub mod validation;
