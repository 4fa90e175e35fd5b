//! Scalar argument validators

use crate::error::{Error, Result};
use crate::types::TestSize;

const PATH_SEPARATOR: char = ':';
const LIST_SEPARATOR: char = ',';

/// Only the exact string `"true"` is true. Anything else, malformed input
/// included, is false and never an error.
pub fn parse_bool(value: &str) -> bool {
    value == "true"
}

/// Parse a non-negative base-10 `u64`
pub fn parse_unsigned_long(key: &str, value: &str) -> Result<u64> {
    let parsed: i128 = value
        .parse()
        .map_err(|_| Error::invalid_number(key, value))?;
    u64::try_from(parsed).map_err(|_| Error::invalid_number(key, value))
}

/// Parse a non-negative base-10 `u32`
pub fn parse_unsigned_int(key: &str, value: &str) -> Result<u32> {
    let parsed = parse_unsigned_long(key, value)?;
    u32::try_from(parsed).map_err(|_| Error::invalid_number(key, value))
}

/// Parse one of the known test sizes
pub fn parse_test_size(key: &str, value: &str) -> Result<TestSize> {
    value.parse().map_err(|_| Error::InvalidEnumArgument {
        key: key.to_string(),
        value: value.to_string(),
        expected: TestSize::ALL
            .iter()
            .map(TestSize::as_str)
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Split a `:`-delimited path list. Empty input yields an empty list.
pub fn parse_path_list(value: &str) -> Vec<String> {
    split_non_empty(value, PATH_SEPARATOR)
}

/// Split a `,`-delimited list of names
pub fn parse_string_list(value: &str) -> Vec<String> {
    split_non_empty(value, LIST_SEPARATOR)
}

fn split_non_empty(value: &str, separator: char) -> Vec<String> {
    value
        .split(separator)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
