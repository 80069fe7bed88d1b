// Author: Dustin Pilgrim
// License: MIT

use once_cell::sync::Lazy;
use regex::Regex;

use super::{INDEX_BRACKETS, PATH_DELIMITER};

static KEY_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("key token regex"));

// Decimal only, no sign and no leading zeros except for the literal "0".
static INDEX_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0|[1-9][0-9]*)$").expect("index token regex"));

pub(super) fn is_key_token(s: &str) -> bool {
    KEY_TOKEN.is_match(s)
}

pub(super) fn is_index_token(s: &str) -> bool {
    INDEX_TOKEN.is_match(s)
}

/// Byte offset of the next structural delimiter (`.` or `[`), if any.
pub(super) fn find_delimiter(s: &str) -> Option<usize> {
    s.find([PATH_DELIMITER, INDEX_BRACKETS.0])
}

/// Byte offset of the closing index bracket, if any.
pub(super) fn find_closing_bracket(s: &str) -> Option<usize> {
    s.find(INDEX_BRACKETS.1)
}
