//! Error types for parsing, AST construction, and writing.
//!
//! Three independent concerns, three enums:
//!
//! - [`CssParseError`] / [`CssParseFatal`]: recoverable vs. unrecoverable
//!   parse failures, delivered through the handlers in [`crate::handler`]
//! - [`AstError`]: illegal arguments to AST constructors and mutators
//! - [`WriterError`]: version-compatibility violations at render time

use thiserror::Error;

use crate::ast::SourceLocation;
use crate::grammar::CssVersion;

///// A recoverable parse error: the grammar can skip to a synchronization
/// point (the next `;` or `}`) and continue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("CSS syntax error at {location}: {message}")]
pub struct CssParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl CssParseError {
    pub fn new(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

/// An unrecoverable parse failure: the grammar cannot resynchronize and the
/// whole parse yields no result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecoverable CSS parse failure at {location}: {message}")]
pub struct CssParseFatal {
    pub message: String,
    pub location: SourceLocation,
}

impl CssParseFatal {
    pub fn new(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

/// Illegal arguments to AST constructors or mutators. These fail fast at
/// the call site and are never silently coerced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AstError {
    #[error("declaration property must not be empty")]
    EmptyProperty,

    #[error("function name must not be empty")]
    EmptyFunctionName,

    #[error(":not() requires at least one nested selector")]
    EmptyNegation,

    #[error("color component `{component}` must not be empty")]
    EmptyColorComponent { component: &'static str },

    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A keyframes declaration appeared before any block selector.
    #[error("keyframes declaration before any block selector")]
    KeyframesDeclarationBeforeSelector,
}

/// Render-time failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WriterError {
    /// A construct's minimum CSS version exceeds the version requested for
    /// rendering.
    #[error("{construct} requires {required} but output targets {requested}")]
    VersionMismatch {
        construct: &'static str,
        required: CssVersion,
        requested: CssVersion,
    },
}
