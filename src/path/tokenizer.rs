// Author: Dustin Pilgrim
// License: MIT

use log::trace;

use super::scanner::{find_closing_bracket, find_delimiter, is_index_token, is_key_token};
use super::*;
use crate::error::{ParseError, ParseErrorKind};

/// One scanned segment plus what is left of the input after it.
struct Scanned<'s> {
    segment: Segment,
    rest: &'s str,
}

pub(super) fn tokenize(input: &str) -> Result<Option<Path>, ParseError> {
    let mut segments = Vec::new();
    let mut rest = input;

    while !rest.is_empty() {
        let scanned = if rest.starts_with(INDEX_BRACKETS.0) {
            scan_index(rest)
        } else {
            scan_key(rest)
        };

        match scanned {
            Ok(scanned) => {
                trace!("path token {:?}, remaining {:?}", scanned.segment, scanned.rest);
                segments.push(scanned.segment);
                rest = scanned.rest;
            }
            Err(mut e) => {
                // Most recently parsed token goes first.
                for seg in segments.iter().rev() {
                    e.push_token(seg.to_string());
                }
                return Err(e);
            }
        }
    }

    Ok(Path::from_segments(segments))
}

/// A `.` right after a segment is consumed; a `[` is left for the next one.
fn skip_delimiter(rest: &str) -> &str {
    rest.strip_prefix(PATH_DELIMITER).unwrap_or(rest)
}

fn scan_index(input: &str) -> Result<Scanned<'_>, ParseError> {
    let close = find_closing_bracket(input).ok_or_else(|| {
        ParseError::new(ParseErrorKind::UnbalancedBrackets, "Unbalanced brackets.")
            .with_hint(format!("Close the index with '{}'", INDEX_BRACKETS.1))
    })?;

    let digits = &input[INDEX_BRACKETS.0.len_utf8()..close];
    if !is_index_token(digits) {
        return Err(bad_integer(digits));
    }
    let index: usize = digits.parse().map_err(|_| bad_integer(digits))?;

    Ok(Scanned {
        segment: Segment::Index(index),
        rest: skip_delimiter(&input[close + INDEX_BRACKETS.1.len_utf8()..]),
    })
}

fn scan_key(input: &str) -> Result<Scanned<'_>, ParseError> {
    let end = find_delimiter(input).unwrap_or(input.len());
    let key = &input[..end];

    if key.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyToken, "Empty path str-token provided"));
    }
    if !is_key_token(key) {
        return Err(ParseError::new(
            ParseErrorKind::BadStringToken,
            format!("Bad string path token: \"{}\"", key),
        )
        .with_hint("Keys start with a letter or '_' followed by letters, digits or '_'"));
    }

    Ok(Scanned {
        segment: Segment::Key(key.to_string()),
        rest: skip_delimiter(&input[end..]),
    })
}

fn bad_integer(digits: &str) -> ParseError {
    ParseError::new(
        ParseErrorKind::BadIntegerToken,
        format!("Bad integer path token: \"{}\"", digits),
    )
    .with_hint("Indices are base-10 integers without sign or leading zeros")
}
