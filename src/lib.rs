pub mod config;
pub mod error;
pub mod path;
pub mod registry;
pub mod resolver;
pub mod value;

pub use config::ParamConfig;
pub use error::{ParamError, ParseError, ParseErrorKind, ResolutionError, ResolutionErrorKind};
pub use path::{Path, Segment, tokenize};
pub use resolver::{resolve, resolve_mut};
pub use value::{Dictionary, Discriminant, ParameterValue, Tuple};
