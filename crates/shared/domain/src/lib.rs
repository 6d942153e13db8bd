//! # Domain Models
//!
//! Pure types shared by the watchface settings crates, with minimal dependencies
//! (`serde`, `bitflags`). Keep it lean: no I/O or validation logic, just data and
//! simple helpers.

pub mod config;
pub mod constants;
pub mod field;
pub mod flags;
