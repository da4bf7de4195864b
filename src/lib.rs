#![forbid(unsafe_code)]
//! Introspection for values of an embedded scripting runtime.
//!
//! Given any runtime value (a module, a class, an object, or a value provided by the host program) this crate
//! answers two questions: which members does it expose (`dir`), and how should it be described to a person
//! (`doc`). The runtime registers [`exports`] as a module so scripts can call both, alongside read-only views
//! of its function and module registry.
//!
//! ## Panic Policy
//!
//! - **Production code**: `Result`/`Option` with `?`. `dir` and `doc` never fail; missing shapes degrade to
//!   empty output.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Example
//! ```rust
//! use introspect::{Module, Function, Value, dir, doc};
//!
//! let math = Value::from(Module::named("math").with("Add", Function::script("Add", &["a", "b"])));
//! assert_eq!(doc(&math), "package math\nAdd\tfn(a, b)");
//! let mut names = dir(&math);
//! names.sort();
//! assert_eq!(names, ["Add", "_name"]);
//! ```

#![deny(clippy::unwrap_used)]

// Lets generated adapters refer to `::introspect` from inside this crate's own tests.
extern crate self as introspect;

pub mod classify;
pub mod cli;
pub mod config;
pub mod dir;
pub mod doc;
pub mod errors;
pub mod exports;
pub mod host;
pub mod package;
pub mod registry;
pub mod value;
pub mod version;

pub use classify::{HostView, Kind, classify};
pub use config::DocConfig;
pub use dir::{dir, exported_field_names};
pub use doc::{doc, doc_with_config};
pub use errors::{IntrospectError, IntrospectResult};
pub use exports::{MODULE_NAME, exports};
pub use host::{FieldInfo, HostMethods, HostType, MethodInfo};
pub use introspect_core::is_exported;
pub use introspect_derive::{HostType, host_methods};
pub use package::resolve_package_name;
pub use registry::Registry;
pub use value::{Class, Function, Module, NativeFn, Object, Value};
