//! Error taxonomy for the introspection runtime.
//!
//! `dir` and `doc` never surface these: a missing record shape degrades to "no fields". They are returned to
//! callers of the lower-level helpers (`exported_field_names`) and of the native export functions.

use thiserror::Error;

/// Errors produced by introspection helpers and native exports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntrospectError {
    /// Field enumeration was requested on a value whose terminal shape is not a record.
    #[error("type {type_name} is not a record")]
    NotARecord { type_name: String },

    #[error("{function}() takes {expected} argument(s) but {got} were given")]
    Arity {
        function: String,
        expected: usize,
        got: usize,
    },

    /// A script-defined function was asked to run natively.
    #[error("{function} has no native implementation")]
    NotNative { function: String },
}

/// Result type for introspection helpers.
pub type IntrospectResult<T> = Result<T, IntrospectError>;
