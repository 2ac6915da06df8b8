//! Parsing of `value` annotations into typed defaults.

use crate::{FlagError, FlagResult, ValueKind};

pub(super) fn parse_int(field: &str, raw: &str) -> FlagResult<i64> {
    raw.parse()
        .map_err(|err| FlagError::value_parse(field, raw, ValueKind::Int, err))
}

pub(super) fn parse_float(field: &str, raw: &str) -> FlagResult<f64> {
    raw.parse()
        .map_err(|err| FlagError::value_parse(field, raw, ValueKind::Float, err))
}

/// Accepts the usual spellings of a boolean literal: `1`, `t`, `T`, `TRUE`,
/// `true` and `True`, and their false counterparts.
pub(super) fn parse_bool(field: &str, raw: &str) -> FlagResult<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(FlagError::value_parse(
            field,
            raw,
            ValueKind::Bool,
            InvalidBool,
        )),
    }
}

#[derive(Debug, thiserror::Error)]
#[error("provided string was not a recognised boolean literal")]
struct InvalidBool;
