//! Provide the shared, pure naming rules used by the introspection runtime and its adapter generator.
//!
//! This crate is intentionally small and dependency-free. Both the `introspect` runtime crate and the
//! `introspect_derive` proc-macro crate depend on it, so the spelling rules that decide what a host type
//! exposes are evaluated identically at adapter-generation time and at introspection time.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no runtime value types.
//! - Current scope: the visibility predicate, reserved-name conventions, and identifier respelling.

pub mod conventions;
pub mod naming;

pub use conventions::{INTERNAL_PREFIX, PACKAGE_NAME_KEY, RESERVED_PREFIX, is_internal, is_reserved};
pub use naming::{exported_spelling, is_exported};
