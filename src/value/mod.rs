// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use crate::error::{ParamError, ResolutionError, ResolutionErrorKind};
use crate::path::Segment;

mod collections;
mod conversion;

pub use collections::{Dictionary, Tuple};

/// Tag identifying which variant a tree node holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discriminant {
    Bool,
    Int,
    Real,
    String,
    Tuple,
    Dict,
}

impl Discriminant {
    pub fn is_scalar(self) -> bool {
        !self.is_collection()
    }

    pub fn is_collection(self) -> bool {
        matches!(self, Discriminant::Tuple | Discriminant::Dict)
    }
}

impl fmt::Display for Discriminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Discriminant::Bool => "boolean",
            Discriminant::Int => "integer",
            Discriminant::Real => "real",
            Discriminant::String => "string",
            Discriminant::Tuple => "tuple",
            Discriminant::Dict => "dictionary",
        };
        f.write_str(name)
    }
}

/// One node of the parameter tree.
///
/// Collections own their children, so a tree is always acyclic and dropping a
/// node drops everything below it. Dropping, cloning and comparing recurse once
/// per nesting level, so tree depth is bounded by the thread's stack.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Bool(bool),
    Int(i64),
    Real(f64),
    String(String),
    Tuple(Tuple),
    Dict(Dictionary),
}

impl ParameterValue {
    pub fn type_code(&self) -> Discriminant {
        match self {
            ParameterValue::Bool(_) => Discriminant::Bool,
            ParameterValue::Int(_) => Discriminant::Int,
            ParameterValue::Real(_) => Discriminant::Real,
            ParameterValue::String(_) => Discriminant::String,
            ParameterValue::Tuple(_) => Discriminant::Tuple,
            ParameterValue::Dict(_) => Discriminant::Dict,
        }
    }

    pub fn as_bool(&self) -> Result<bool, ParamError> {
        match self {
            ParameterValue::Bool(b) => Ok(*b),
            other => Err(ParamError::type_mismatch(Discriminant::Bool, other.type_code())),
        }
    }

    pub fn as_int(&self) -> Result<i64, ParamError> {
        match self {
            ParameterValue::Int(n) => Ok(*n),
            other => Err(ParamError::type_mismatch(Discriminant::Int, other.type_code())),
        }
    }

    pub fn as_real(&self) -> Result<&f64, ParamError> {
        match self {
            ParameterValue::Real(r) => Ok(r),
            other => Err(ParamError::type_mismatch(Discriminant::Real, other.type_code())),
        }
    }

    pub fn as_str(&self) -> Result<&str, ParamError> {
        match self {
            ParameterValue::String(s) => Ok(s),
            other => Err(ParamError::type_mismatch(Discriminant::String, other.type_code())),
        }
    }

    pub fn as_tuple(&self) -> Result<&Tuple, ParamError> {
        match self {
            ParameterValue::Tuple(t) => Ok(t),
            other => Err(ParamError::type_mismatch(Discriminant::Tuple, other.type_code())),
        }
    }

    pub fn as_dict(&self) -> Result<&Dictionary, ParamError> {
        match self {
            ParameterValue::Dict(d) => Ok(d),
            other => Err(ParamError::type_mismatch(Discriminant::Dict, other.type_code())),
        }
    }

    pub fn as_tuple_mut(&mut self) -> Result<&mut Tuple, ParamError> {
        match self {
            ParameterValue::Tuple(t) => Ok(t),
            other => Err(ParamError::type_mismatch(Discriminant::Tuple, other.type_code())),
        }
    }

    pub fn as_dict_mut(&mut self) -> Result<&mut Dictionary, ParamError> {
        match self {
            ParameterValue::Dict(d) => Ok(d),
            other => Err(ParamError::type_mismatch(Discriminant::Dict, other.type_code())),
        }
    }

    /// Checked downcast into any type with a `TryFrom<&ParameterValue>` impl.
    ///
    /// # Examples
    /// ```
    /// # use param_tree::ParameterValue;
    /// let v = ParameterValue::from(2);
    /// assert_eq!(v.extract::<i64>().unwrap(), 2);
    /// assert!(v.extract::<f64>().is_err());
    /// ```
    pub fn extract<'a, T>(&'a self) -> Result<T, ParamError>
    where
        T: TryFrom<&'a ParameterValue, Error = ParamError>,
    {
        T::try_from(self)
    }

    /// Dereferences one path segment against this node.
    pub fn child(&self, segment: &Segment) -> Result<&ParameterValue, ResolutionError> {
        match (segment, self) {
            (Segment::Key(key), ParameterValue::Dict(d)) => d.get(key).ok_or_else(|| {
                ResolutionError::new(ResolutionErrorKind::KeyNotFound, segment.clone(), Discriminant::Dict)
            }),
            (Segment::Index(n), ParameterValue::Tuple(t)) => t.get(*n).ok_or_else(|| {
                ResolutionError::new(ResolutionErrorKind::IndexNotFound, segment.clone(), Discriminant::Tuple)
            }),
            (Segment::Key(_), other) => Err(ResolutionError::new(
                ResolutionErrorKind::NotADict,
                segment.clone(),
                other.type_code(),
            )),
            (Segment::Index(_), other) => Err(ResolutionError::new(
                ResolutionErrorKind::NotATuple,
                segment.clone(),
                other.type_code(),
            )),
        }
    }

    pub fn child_mut(&mut self, segment: &Segment) -> Result<&mut ParameterValue, ResolutionError> {
        let found = self.type_code();
        match (segment, self) {
            (Segment::Key(key), ParameterValue::Dict(d)) => d.get_mut(key).ok_or_else(|| {
                ResolutionError::new(ResolutionErrorKind::KeyNotFound, segment.clone(), found)
            }),
            (Segment::Index(n), ParameterValue::Tuple(t)) => t.get_mut(*n).ok_or_else(|| {
                ResolutionError::new(ResolutionErrorKind::IndexNotFound, segment.clone(), found)
            }),
            (Segment::Key(_), _) => Err(ResolutionError::new(
                ResolutionErrorKind::NotADict,
                segment.clone(),
                found,
            )),
            (Segment::Index(_), _) => Err(ResolutionError::new(
                ResolutionErrorKind::NotATuple,
                segment.clone(),
                found,
            )),
        }
    }
}

impl From<bool> for ParameterValue {
    fn from(b: bool) -> Self {
        ParameterValue::Bool(b)
    }
}

impl From<i64> for ParameterValue {
    fn from(n: i64) -> Self {
        ParameterValue::Int(n)
    }
}

impl From<i32> for ParameterValue {
    fn from(n: i32) -> Self {
        ParameterValue::Int(n as i64)
    }
}

impl From<f64> for ParameterValue {
    fn from(r: f64) -> Self {
        ParameterValue::Real(r)
    }
}

impl From<&str> for ParameterValue {
    fn from(s: &str) -> Self {
        ParameterValue::String(s.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(s: String) -> Self {
        ParameterValue::String(s)
    }
}

impl From<Tuple> for ParameterValue {
    fn from(t: Tuple) -> Self {
        ParameterValue::Tuple(t)
    }
}

impl From<Dictionary> for ParameterValue {
    fn from(d: Dictionary) -> Self {
        ParameterValue::Dict(d)
    }
}

#[cfg(test)]
mod tests;
