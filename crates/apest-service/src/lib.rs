//! apest-service
//!
//! The assessment lifecycle over a pluggable row store: authoring
//! assessments and questions, opening attempts, recording answers and
//! scoring completed attempts. Inputs are checked against an injected
//! [`validation::Schemas`] before anything is mapped or stored.

pub mod audit;
pub mod config;
pub mod error;
pub mod service;
pub mod store;
pub mod telemetry;
pub mod validation;

pub use error::ServiceError;
pub use service::AssessmentService;
