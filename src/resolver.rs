// Author: Dustin Pilgrim
// License: MIT

use log::debug;

use crate::error::{ParamError, ResolutionError};
use crate::path::{tokenize, Path};
use crate::value::ParameterValue;

/// Walks `path` down from `root` and returns the node it addresses.
///
/// `None` addresses `root` itself. Key segments only dereference dictionaries
/// and index segments only dereference tuples; the first mismatch or missing
/// entry ends the walk. The tree is never modified.
pub fn resolve<'a>(
    root: &'a ParameterValue,
    path: Option<&Path>,
) -> Result<&'a ParameterValue, ResolutionError> {
    let mut node = root;
    for seg in path.into_iter().flatten() {
        node = node.child(seg).inspect_err(|e| {
            debug!("resolution stopped at {}: {}", seg, e);
        })?;
    }
    Ok(node)
}

/// Mutable counterpart of [`resolve`].
///
/// Only navigates: missing intermediate nodes are reported, never created.
pub fn resolve_mut<'a>(
    root: &'a mut ParameterValue,
    path: Option<&Path>,
) -> Result<&'a mut ParameterValue, ResolutionError> {
    let mut node = root;
    for seg in path.into_iter().flatten() {
        node = node.child_mut(seg).inspect_err(|e| {
            debug!("resolution stopped at {}: {}", seg, e);
        })?;
    }
    Ok(node)
}

/// Tokenizes `path` and resolves it against `root` in one step.
///
/// # Examples
/// ```
/// use param_tree::{resolver, Dictionary, ParameterValue, Tuple};
///
/// let root = ParameterValue::from(
///     Tuple::new().with(106, Dictionary::new().with("foo", "some")),
/// );
/// let node = resolver::resolve_str(&root, "[106].foo").unwrap();
/// assert_eq!(node.as_str().unwrap(), "some");
/// ```
pub fn resolve_str<'a>(root: &'a ParameterValue, path: &str) -> Result<&'a ParameterValue, ParamError> {
    let tokens = tokenize(path)?;
    Ok(resolve(root, tokens.as_ref())?)
}

/// Mutable counterpart of [`resolve_str`].
pub fn resolve_str_mut<'a>(
    root: &'a mut ParameterValue,
    path: &str,
) -> Result<&'a mut ParameterValue, ParamError> {
    let tokens = tokenize(path)?;
    Ok(resolve_mut(root, tokens.as_ref())?)
}

// -- Tests --
