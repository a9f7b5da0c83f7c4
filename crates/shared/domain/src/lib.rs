//! # Domain Models
//!
//! Pure data types for the launch sequence with minimal dependencies
//! (`serde`, `bitflags`). Keep it lean: no I/O, no logging, no heavy
//! logic—just data and simple helpers.

pub mod config;
pub mod constants;
pub mod integrations;
pub mod launch;
pub mod registry;
