use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid decimal for {field}: {value:?}")]
    InvalidDecimal { field: &'static str, value: String },

    #[error("invalid timestamp for {field}: {value:?}")]
    InvalidTimestamp { field: &'static str, value: String },
}
