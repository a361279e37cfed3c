//! apest-core
//!
//! Pure domain types for the assessment and content platform: persisted row
//! shapes, API response DTOs, create/update inputs, and the mappers between
//! them. No database or HTTP dependency; this is the shared vocabulary the
//! scoring engine and the service layer speak.

pub mod error;
pub mod format;
pub mod mapping;
pub mod models;
mod serde_ext;
