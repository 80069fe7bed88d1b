// Author: Dustin Pilgrim
// License: MIT

use std::any::type_name;

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::error::ParamError;

/// Name of a Rust type taking part in a handler signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeDescriptor {
    pub name: &'static str,
}

impl TypeDescriptor {
    pub fn of<T: ?Sized>() -> Self {
        Self { name: type_name::<T>() }
    }
}

/// Return and argument types of a registered handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerDescription {
    pub return_type: TypeDescriptor,
    pub argument_types: Vec<TypeDescriptor>,
}

/// Implemented for plain function pointers with one to six arguments.
///
/// Handlers without any argument have no input port and can't be described.
pub trait Signature {
    fn description() -> HandlerDescription;
}

macro_rules! impl_signature {
    ($($arg:ident),+) => {
        impl<R, $($arg),+> Signature for fn($($arg),+) -> R {
            fn description() -> HandlerDescription {
                HandlerDescription {
                    return_type: TypeDescriptor::of::<R>(),
                    argument_types: vec![$(TypeDescriptor::of::<$arg>()),+],
                }
            }
        }
    };
}

impl_signature!(A1);
impl_signature!(A1, A2);
impl_signature!(A1, A2, A3);
impl_signature!(A1, A2, A3, A4);
impl_signature!(A1, A2, A3, A4, A5);
impl_signature!(A1, A2, A3, A4, A5, A6);

/// Table mapping handler names to their signatures.
///
/// Only records descriptions; invoking handlers is up to whoever owns the table.
///
/// # Examples
/// ```
/// use param_tree::registry::HandlerRegistry;
///
/// fn scale(x: f64, factor: i64) -> f64 { x * factor as f64 }
///
/// let mut registry = HandlerRegistry::new();
/// registry.register_fn("scale", scale as fn(f64, i64) -> f64).unwrap();
/// assert_eq!(registry.get("scale").unwrap().argument_types.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HandlerRegistry {
    handlers: IndexMap<String, HandlerDescription>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, description: HandlerDescription) -> Result<(), ParamError> {
        let name = name.into();
        if description.argument_types.is_empty() {
            return Err(ParamError::RegistryError {
                message: format!("Unable to declare handler '{}' with no I/O ports", name),
                hint: Some("Handlers take at least one argument".into()),
                code: Some(502),
            });
        }
        if self.handlers.contains_key(&name) {
            return Err(ParamError::RegistryError {
                message: format!("Handler '{}' is already registered", name),
                hint: Some("Pick a unique handler name".into()),
                code: Some(501),
            });
        }
        debug!("registered handler '{}' -> {}", name, description.return_type.name);
        self.handlers.insert(name, description);
        Ok(())
    }

    /// Registers a function pointer, reading its signature from the type.
    pub fn register_fn<F: Signature>(&mut self, name: impl Into<String>, _handler: F) -> Result<(), ParamError> {
        self.register(name, F::description())
    }

    pub fn get(&self, name: &str) -> Option<&HandlerDescription> {
        self.handlers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Handler names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Export the table as pretty-printed JSON, keyed by handler name.
    pub fn to_json(&self) -> Result<String, ParamError> {
        serde_json::to_string_pretty(&self.handlers).map_err(|e| ParamError::RegistryError {
            message: format!("Failed to serialize handler table: {}", e),
            hint: None,
            code: Some(503),
        })
    }
}

// -- Tests --
