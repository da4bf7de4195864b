//! The introspection module as seen by scripts.
//!
//! [`exports`] builds the module the runtime binds into its global namespace: a declared name plus five
//! native functions. `fnlist`, `fntable` and `pkgs` read the injected registry; `dir` and `doc` inspect
//! their single argument.

use std::rc::Rc;

use crate::dir::dir;
use crate::doc::doc;
use crate::errors::{IntrospectError, IntrospectResult};
use crate::registry::Registry;
use crate::value::{Function, Module, Value};

/// Declared name of the export table.
pub const MODULE_NAME: &str = "introspect/meta";

/// Build the export table over `registry`.
pub fn exports(registry: Rc<Registry>) -> Module {
    let fn_list = {
        let registry = Rc::clone(&registry);
        Function::native("fnlist", "fn() -> Vec<String>", move |args| {
            no_args("fnlist", args)?;
            Ok(Value::host(registry.fn_list()))
        })
    };
    let fn_table = {
        let registry = Rc::clone(&registry);
        Function::native("fntable", "fn() -> module", move |args| {
            no_args("fntable", args)?;
            Ok(Value::from(registry.fn_table()))
        })
    };
    let pkgs = Function::native("pkgs", "fn() -> Vec<String>", move |args| {
        no_args("pkgs", args)?;
        Ok(Value::host(registry.host_modules().to_vec()))
    });
    let dir_fn = Function::native("dir", "fn(value) -> Vec<String>", |args| {
        let value = one_arg("dir", args)?;
        Ok(Value::host(dir(value)))
    });
    let doc_fn = Function::native("doc", "fn(value) -> String", |args| {
        let value = one_arg("doc", args)?;
        Ok(Value::from(doc(value)))
    });

    Module::named(MODULE_NAME)
        .with("fnlist", fn_list)
        .with("fntable", fn_table)
        .with("pkgs", pkgs)
        .with("dir", dir_fn)
        .with("doc", doc_fn)
}

fn no_args(function: &str, args: &[Value]) -> IntrospectResult<()> {
    match args {
        [] => Ok(()),
        _ => Err(arity(function, 0, args)),
    }
}

fn one_arg<'a>(function: &str, args: &'a [Value]) -> IntrospectResult<&'a Value> {
    match args {
        [value] => Ok(value),
        _ => Err(arity(function, 1, args)),
    }
}

fn arity(function: &str, expected: usize, args: &[Value]) -> IntrospectError {
    IntrospectError::Arity {
        function: function.to_string(),
        expected,
        got: args.len(),
    }
}
