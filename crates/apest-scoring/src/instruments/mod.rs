pub mod binary;
pub mod likert;
