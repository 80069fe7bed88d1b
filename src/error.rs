// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use crate::path::Segment;
use crate::value::Discriminant;

fn hint_suffix(hint: &Option<String>) -> String {
    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
}

fn code_suffix(code: &Option<u32>) -> String {
    code.map_or(String::new(), |c| format!(" Code: {}", c))
}

/// What went wrong while tokenizing a path string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A key segment was empty (`.two`, `one..two`).
    EmptyToken,
    /// A key segment did not match `[A-Za-z_][A-Za-z0-9_]*`.
    BadStringToken,
    /// An index segment did not hold a canonical base-10 integer.
    BadIntegerToken,
    /// An index segment was opened with `[` but never closed.
    UnbalancedBrackets,
}

impl ParseErrorKind {
    pub fn code(self) -> u32 {
        match self {
            ParseErrorKind::EmptyToken => 101,
            ParseErrorKind::BadStringToken => 102,
            ParseErrorKind::BadIntegerToken => 103,
            ParseErrorKind::UnbalancedBrackets => 104,
        }
    }
}

/// Raised when a path string can not be tokenized.
///
/// Besides the reason, the error keeps the text of every token that was parsed
/// successfully before the failure, pushed most-recent first.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    stack: Vec<String>,
    pub hint: Option<String>,
    pub code: Option<u32>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            stack: Vec::new(),
            hint: None,
            code: Some(kind.code()),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Records a token that parsed fine before the failure happened deeper in.
    pub fn push_token(&mut self, token: impl Into<String>) {
        self.stack.push(token.into());
    }

    /// Successfully parsed tokens, most-recent first.
    pub fn stack(&self) -> &[String] {
        &self.stack
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[PARAM] Path Error: {}; stack:", self.message)?;
        for tok in self.stack.iter().rev() {
            write!(f, " \"{}\"", tok)?;
        }
        write!(f, "{}{}", hint_suffix(&self.hint), code_suffix(&self.code))
    }
}

impl std::error::Error for ParseError {}

/// Why a path could not be walked against a parameter tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionErrorKind {
    /// A key segment was applied to something other than a dictionary.
    NotADict,
    /// An index segment was applied to something other than a tuple.
    NotATuple,
    KeyNotFound,
    IndexNotFound,
}

impl ResolutionErrorKind {
    pub fn code(self) -> u32 {
        match self {
            ResolutionErrorKind::NotADict => 201,
            ResolutionErrorKind::NotATuple => 202,
            ResolutionErrorKind::KeyNotFound => 203,
            ResolutionErrorKind::IndexNotFound => 204,
        }
    }

    /// True for the "shape is right but the entry is missing" kinds.
    pub fn is_missing(self) -> bool {
        matches!(
            self,
            ResolutionErrorKind::KeyNotFound | ResolutionErrorKind::IndexNotFound
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionError {
    pub kind: ResolutionErrorKind,
    /// The segment that could not be applied.
    pub token: Segment,
    /// Kind of the node the segment was applied to.
    pub found: Discriminant,
    pub hint: Option<String>,
    pub code: Option<u32>,
}

impl ResolutionError {
    pub fn new(kind: ResolutionErrorKind, token: Segment, found: Discriminant) -> Self {
        let hint = match kind {
            ResolutionErrorKind::NotADict => Some("Key segments only dereference dictionaries".into()),
            ResolutionErrorKind::NotATuple => Some("Index segments only dereference tuples".into()),
            ResolutionErrorKind::KeyNotFound | ResolutionErrorKind::IndexNotFound => None,
        };
        Self {
            kind,
            token,
            found,
            hint,
            code: Some(kind.code()),
        }
    }
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let found = if self.found.is_scalar() {
            format!("scalar of kind {}", self.found)
        } else {
            self.found.to_string()
        };
        match self.kind {
            ResolutionErrorKind::NotADict => write!(
                f,
                "[PARAM] Resolution Error: unable to retrieve \"{}\": expected dictionary, found {}",
                self.token, found
            )?,
            ResolutionErrorKind::NotATuple => write!(
                f,
                "[PARAM] Resolution Error: unable to retrieve {}: expected tuple, found {}",
                self.token, found
            )?,
            ResolutionErrorKind::KeyNotFound => write!(
                f,
                "[PARAM] Resolution Error: key \"{}\" not found in {}",
                self.token, found
            )?,
            ResolutionErrorKind::IndexNotFound => write!(
                f,
                "[PARAM] Resolution Error: index {} not found in {}",
                self.token, found
            )?,
        }
        write!(f, "{}{}", hint_suffix(&self.hint), code_suffix(&self.code))
    }
}

impl std::error::Error for ResolutionError {}

/// The main error type for parameter tree access.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    Parse(ParseError),
    Resolution(ResolutionError),
    /// Raised by the checked downcast when the node holds another kind.
    TypeMismatch {
        expected: Discriminant,
        found: Discriminant,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// An integer node does not fit the requested Rust integer type.
    OutOfRange {
        value: i64,
        target: &'static str,
        hint: Option<String>,
        code: Option<u32>,
    },
    ValidationError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    RegistryError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl ParamError {
    pub fn type_mismatch(expected: Discriminant, found: Discriminant) -> Self {
        ParamError::TypeMismatch {
            expected,
            found,
            hint: Some(format!("Node holds {} data but {} was requested", found, expected)),
            code: Some(401),
        }
    }

    /// The resolution error kind, if this error came from walking a path.
    pub fn resolution_kind(&self) -> Option<ResolutionErrorKind> {
        match self {
            ParamError::Resolution(e) => Some(e.kind),
            _ => None,
        }
    }

    /// The parse error kind, if this error came from tokenizing a path.
    pub fn parse_kind(&self) -> Option<ParseErrorKind> {
        match self {
            ParamError::Parse(e) => Some(e.kind),
            _ => None,
        }
    }
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::Parse(e) => e.fmt(f),
            ParamError::Resolution(e) => e.fmt(f),
            ParamError::TypeMismatch { expected, found, hint, code } =>
                write!(f, "[PARAM] Type Mismatch: expected {}, found {}{}{}",
                    expected, found,
                    hint_suffix(hint),
                    code_suffix(code)
                ),
            ParamError::OutOfRange { value, target, hint, code } =>
                write!(f, "[PARAM] Out Of Range: {} does not fit into {}{}{}",
                    value, target,
                    hint_suffix(hint),
                    code_suffix(code)
                ),
            ParamError::ValidationError { message, path, hint, code } =>
                write!(f, "[PARAM] Validation Error at '{}': {}{}{}",
                    path, message,
                    hint_suffix(hint),
                    code_suffix(code)
                ),
            ParamError::RegistryError { message, hint, code } =>
                write!(f, "[PARAM] Registry Error: {}{}{}",
                    message,
                    hint_suffix(hint),
                    code_suffix(code)
                ),
        }
    }
}

impl std::error::Error for ParamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParamError::Parse(e) => Some(e),
            ParamError::Resolution(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for ParamError {
    fn from(e: ParseError) -> Self {
        ParamError::Parse(e)
    }
}

impl From<ResolutionError> for ParamError {
    fn from(e: ResolutionError) -> Self {
        ParamError::Resolution(e)
    }
}
