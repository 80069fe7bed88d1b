// Author: Dustin Pilgrim
// License: MIT

use crate::value::ParameterValue;

mod access;
mod validation;

/// Owns a parameter tree and gives typed, path-based access to it.
///
/// This is the lookup surface meant for collaborators such as the handler
/// registry: they hand in a path string and get back a concrete scalar.
///
/// # Example
/// ```
/// use param_tree::{Dictionary, ParamConfig};
///
/// let config = ParamConfig::new(
///     Dictionary::new().with("server", Dictionary::new().with("port", 8080)),
/// );
/// let port: u16 = config.get("server.port").unwrap();
/// assert_eq!(port, 8080);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParamConfig {
    root: ParameterValue,
}

impl ParamConfig {
    pub fn new(root: impl Into<ParameterValue>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &ParameterValue {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut ParameterValue {
        &mut self.root
    }

    pub fn into_root(self) -> ParameterValue {
        self.root
    }
}

impl From<ParameterValue> for ParamConfig {
    fn from(root: ParameterValue) -> Self {
        Self::new(root)
    }
}
