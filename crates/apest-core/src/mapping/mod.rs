//! Row <-> DTO mappers.
//!
//! Read paths: `to_*_response` turns a persisted row into the API shape
//! (nulls dropped, decimals parsed, timestamps in ISO-8601, computed fields
//! filled in). Write paths: `from_create_*` builds an insert row and
//! `from_update_*` builds a partial patch stamped with `updated_at`.
//!
//! Mappers are structural only. Business rules are checked by the caller
//! before these run.
//!
//! A mapper returns `Result<_, CoreError>` only when it has a string to
//! parse: a decimal column on the read side (assessment validity and
//! reliability, question weight, attempt consistency) or an ISO timestamp
//! input on the write side (assessments, attempts, content items, series).
//! The answer mappers, the category and question write mappers, and the
//! content read mappers cannot fail and return the value directly.

pub mod answer;
pub mod assessment;
pub mod content;
pub mod question;
pub mod user_assessment;

pub use answer::{from_create_answer, from_update_answer, to_answer_response};
pub use assessment::{from_create_assessment, from_update_assessment, to_assessment_response};
pub use content::{
    from_create_category, from_create_content_item, from_create_series, from_update_category,
    from_update_content_item, from_update_series, to_category_response, to_content_item_response,
    to_series_response,
};
pub use question::{from_create_question, from_update_question, to_question_response};
pub use user_assessment::{
    from_create_user_assessment, from_update_user_assessment, to_user_assessment_response,
};

use jiff::Timestamp;

use crate::error::CoreError;
use crate::format::{format_decimal, parse_optional_timestamp};

fn patch_decimal(value: Option<Option<f64>>) -> Option<Option<String>> {
    value.map(|v| v.map(format_decimal))
}

fn patch_timestamp(
    field: &'static str,
    value: Option<Option<String>>,
) -> Result<Option<Option<Timestamp>>, CoreError> {
    value
        .map(|v| parse_optional_timestamp(field, v.as_deref()))
        .transpose()
}
