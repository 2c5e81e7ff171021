//! Protocol layer for device communication.
//!
//! This module builds requests for the METF firmware HTTP API and validates
//! its plain-text responses.

pub mod hex;
pub mod requests;
pub mod response;
pub mod serial;
