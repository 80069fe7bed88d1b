// Author: Dustin Pilgrim
// License: MIT

use std::mem;

use super::*;
use crate::error::ParamError;
use crate::path::Segment;
use crate::resolver;
use crate::value::Discriminant;

impl ParamConfig {
    /// Get a typed value using the path grammar (`a.b[3].c`).
    ///
    /// # Examples
    /// ```
    /// # use param_tree::{Dictionary, ParamConfig, Tuple};
    /// # fn main() -> Result<(), param_tree::ParamError> {
    /// let config = ParamConfig::new(
    ///     Dictionary::new()
    ///         .with("debug", true)
    ///         .with("hosts", Tuple::new().with(0, "alpha")),
    /// );
    /// let debug: bool = config.get("debug")?;
    /// let host: &str = config.get("hosts[0]")?;
    /// assert!(debug);
    /// assert_eq!(host, "alpha");
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if the path is malformed, does not exist, or the node
    /// holds a different kind of value than `T`.
    pub fn get<'a, T>(&'a self, path: &str) -> Result<T, ParamError>
    where
        T: TryFrom<&'a ParameterValue, Error = ParamError>,
    {
        T::try_from(self.get_value(path)?)
    }

    /// Get an optional typed value - returns `None` if the key or index doesn't exist.
    ///
    /// Malformed paths, shape mismatches and type mismatches are still errors.
    pub fn get_optional<'a, T>(&'a self, path: &str) -> Result<Option<T>, ParamError>
    where
        T: TryFrom<&'a ParameterValue, Error = ParamError>,
    {
        match self.get_value(path) {
            Ok(value) => Ok(Some(T::try_from(value)?)),
            Err(ParamError::Resolution(e)) if e.kind.is_missing() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    pub fn get_or<'a, T>(&'a self, path: &str, default: T) -> T
    where
        T: TryFrom<&'a ParameterValue, Error = ParamError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get the raw node a path addresses. The empty path yields the root.
    pub fn get_value(&self, path: &str) -> Result<&ParameterValue, ParamError> {
        resolver::resolve_str(&self.root, path)
    }

    /// Get the keys one level below `path`.
    ///
    /// Dictionary keys come back in insertion order, tuple indices ascending
    /// and rendered as `[n]`.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, ParamError> {
        match self.get_value(path)? {
            ParameterValue::Dict(d) => Ok(d.keys().map(str::to_string).collect()),
            ParameterValue::Tuple(t) => Ok(t.indices().map(|i| Segment::Index(i).to_string()).collect()),
            other => Err(ParamError::TypeMismatch {
                expected: Discriminant::Dict,
                found: other.type_code(),
                hint: Some(format!("Path '{}' is a scalar; only dictionaries and tuples have keys", path)),
                code: Some(401),
            }),
        }
    }

    /// Check if a path resolves to a node.
    pub fn has(&self, path: &str) -> bool {
        self.get_value(path).is_ok()
    }

    /// Replace the node at an existing path and return the previous one.
    ///
    /// The path must already resolve; nothing is created on the way.
    pub fn set(&mut self, path: &str, value: impl Into<ParameterValue>) -> Result<ParameterValue, ParamError> {
        let slot = resolver::resolve_str_mut(&mut self.root, path)?;
        Ok(mem::replace(slot, value.into()))
    }
}
