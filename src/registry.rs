//! The runtime's global function and host-module registry.
//!
//! The registry is populated once while the runtime starts and is read-only afterwards. Consumers receive an
//! explicit `Rc<Registry>` rather than reaching for global state.

use std::collections::HashMap;

use introspect_core::is_internal;

use crate::value::{Function, Module, Value};

/// Global functions and the names of host-implemented modules.
#[derive(Debug, Default)]
pub struct Registry {
    functions: HashMap<String, Function>,
    modules: Vec<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a global function under its own name, replacing any previous definition.
    pub fn register_fn(&mut self, function: Function) -> &mut Self {
        self.functions.insert(function.name().to_string(), function);
        self
    }

    /// Record the name of a host-implemented module.
    pub fn register_module(&mut self, name: impl Into<String>) -> &mut Self {
        self.modules.push(name.into());
        self
    }

    /// Names of all public global functions (runtime internals excluded). Order is unspecified.
    pub fn fn_list(&self) -> Vec<String> {
        self.public_functions().map(|(name, _)| name.clone()).collect()
    }

    /// The public global functions as an unnamed module mapping name to callable.
    pub fn fn_table(&self) -> Module {
        self.public_functions()
            .map(|(name, function)| (name.clone(), Value::from(function.clone())))
            .collect()
    }

    /// Names of the host-implemented modules, in registration order.
    pub fn host_modules(&self) -> &[String] {
        &self.modules
    }

    fn public_functions(&self) -> impl Iterator<Item = (&String, &Function)> {
        self.functions.iter().filter(|(name, _)| !is_internal(name))
    }
}
