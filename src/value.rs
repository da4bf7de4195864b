//! Runtime values as seen by the introspection layer.
//!
//! These are read-only views from this crate's point of view: the hosting runtime builds modules, defines
//! classes, instantiates objects and mutates their variables. Introspection only reads.
//!
//! ## Notes
//! - Every mapping here is a `HashMap`; iteration order is unspecified and nothing in this crate relies on it.
//! - `Value` is reference counted, so cloning a value never copies a module or an object.

use std::borrow::Cow;
use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::rc::Rc;

use introspect_core::PACKAGE_NAME_KEY;

use crate::errors::{IntrospectError, IntrospectResult};
use crate::host::HostType;

/// A value of the hosting runtime.
#[derive(Clone)]
pub enum Value {
    /// An unbound slot. Carries no dynamic type.
    Nil,
    Module(Rc<Module>),
    Class(Rc<Class>),
    Object(Rc<Object>),
    /// Anything provided by the embedding program, described by its [`HostType`] adapter.
    Host(Rc<dyn HostType>),
}

impl Value {
    /// Wrap a host value.
    pub fn host<T: HostType>(value: T) -> Self {
        Value::Host(Rc::new(value))
    }

    /// The host adapter, if this is a host value.
    pub fn as_host(&self) -> Option<&dyn HostType> {
        match self {
            Value::Host(host) => Some(&**host),
            _ => None,
        }
    }

    pub fn as_module(&self) -> Option<&Module> {
        match self {
            Value::Module(module) => Some(&**module),
            _ => None,
        }
    }

    /// Downcast a host value to its concrete Rust type.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.as_host()?.as_any().downcast_ref::<T>()
    }

    /// Read a string host value (`String` or `&'static str`).
    pub fn as_str(&self) -> Option<&str> {
        let host = self.as_host()?.as_any();
        host.downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| host.downcast_ref::<&'static str>().copied())
    }

    /// The dynamic type of this value, or `None` for [`Value::Nil`].
    pub fn dynamic_type(&self) -> Option<Cow<'static, str>> {
        match self {
            Value::Nil => None,
            Value::Module(_) => Some(Cow::Borrowed("module")),
            Value::Class(_) => Some(Cow::Borrowed("class")),
            Value::Object(_) => Some(Cow::Borrowed("object")),
            Value::Host(host) => Some(host.type_name()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Module(module) => match module.declared_name() {
                Some(name) => write!(f, "module {name}"),
                None => write!(f, "module ({} bindings)", module.len()),
            },
            Value::Class(class) => write!(f, "class {}", class.name()),
            Value::Object(object) => write!(f, "{} object", object.class().name()),
            Value::Host(host) => f.write_str(&host.render()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("Nil"),
            Value::Module(module) => f.debug_tuple("Module").field(module).finish(),
            Value::Class(class) => f.debug_tuple("Class").field(class).finish(),
            Value::Object(object) => f.debug_tuple("Object").field(object).finish(),
            Value::Host(host) => f.debug_tuple("Host").field(host).finish(),
        }
    }
}

impl From<Module> for Value {
    fn from(module: Module) -> Self {
        Value::Module(Rc::new(module))
    }
}

impl From<Rc<Class>> for Value {
    fn from(class: Rc<Class>) -> Self {
        Value::Class(class)
    }
}

impl From<Class> for Value {
    fn from(class: Class) -> Self {
        Value::Class(Rc::new(class))
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(Rc::new(object))
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Value::host(function)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::host(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::host(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::host(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::host(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::host(s.to_string())
    }
}

/// A loadable unit: a string-keyed mapping of bindings.
///
/// The declared name, when present, is an ordinary binding under [`PACKAGE_NAME_KEY`] whose value is a string.
#[derive(Debug, Default, Clone)]
pub struct Module {
    bindings: HashMap<String, Value>,
}

impl Module {
    /// Create an empty, unnamed module.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a module declaring `name` under the reserved name key.
    pub fn named(name: impl Into<String>) -> Self {
        let name: String = name.into();
        Self::new().with(PACKAGE_NAME_KEY, name)
    }

    /// Add a binding (builder style).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Bind `key`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.bindings.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.bindings.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The module's declared name, if the reserved name key holds a string.
    pub fn declared_name(&self) -> Option<&str> {
        self.get(PACKAGE_NAME_KEY)?.as_str()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Module {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut module = Module::new();
        for (key, value) in iter {
            module.insert(key, value);
        }
        module
    }
}

/// A named set of member functions shared by every instance.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    fns: HashMap<String, Function>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fns: HashMap::new(),
        }
    }

    /// Add a member function (builder style). The function's own name is its key.
    pub fn with_fn(mut self, function: Function) -> Self {
        self.define(function);
        self
    }

    /// Define or replace a member function.
    pub fn define(&mut self, function: Function) -> Option<Function> {
        self.fns.insert(function.name().to_string(), function)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The function table.
    pub fn fns(&self) -> &HashMap<String, Function> {
        &self.fns
    }
}

/// An instance of a class with its own variables.
///
/// Variables are interior-mutable because the runtime mutates them through shared handles.
#[derive(Debug)]
pub struct Object {
    class: Rc<Class>,
    vars: RefCell<HashMap<String, Value>>,
}

impl Object {
    pub fn new(class: Rc<Class>) -> Self {
        Self {
            class,
            vars: RefCell::new(HashMap::new()),
        }
    }

    /// Set an instance variable (builder style).
    pub fn with_var(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_var(name, value);
        self
    }

    /// Set an instance variable, returning the previous value if any.
    pub fn set_var(&self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.vars.borrow_mut().insert(name.into(), value.into())
    }

    /// The owning class.
    pub fn class(&self) -> &Rc<Class> {
        &self.class
    }

    /// Borrow the current instance variables.
    ///
    /// ## Panics
    /// - If the runtime holds a mutable borrow of the variables at the same time.
    pub fn vars(&self) -> Ref<'_, HashMap<String, Value>> {
        self.vars.borrow()
    }

    /// Borrow the current instance variables, or `None` while the runtime is mutating them.
    pub fn try_vars(&self) -> Option<Ref<'_, HashMap<String, Value>>> {
        self.vars.try_borrow().ok()
    }

    /// Mutably borrow the instance variables for the duration of a runtime update.
    ///
    /// ## Panics
    /// - If any other borrow of the variables is alive.
    pub fn vars_mut(&self) -> RefMut<'_, HashMap<String, Value>> {
        self.vars.borrow_mut()
    }
}

/// Native implementation of a function.
pub type NativeFn = Rc<dyn Fn(&[Value]) -> IntrospectResult<Value>>;

/// A callable: a name, a function-type signature, and optionally a native implementation.
///
/// Script-defined functions carry only their signature; executing them is the runtime's job.
#[derive(Clone)]
pub struct Function {
    name: String,
    signature: String,
    native: Option<NativeFn>,
}

impl Function {
    /// Describe a script function by its parameter names.
    pub fn script(name: impl Into<String>, params: &[&str]) -> Self {
        Self {
            name: name.into(),
            signature: format!("fn({})", params.join(", ")),
            native: None,
        }
    }

    /// A function implemented by the host.
    pub fn native<F>(name: impl Into<String>, signature: impl Into<String>, f: F) -> Self
    where
        F: Fn(&[Value]) -> IntrospectResult<Value> + 'static,
    {
        Self {
            name: name.into(),
            signature: signature.into(),
            native: Some(Rc::new(f)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The function-type signature, used as the function's dynamic type.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn is_native(&self) -> bool {
        self.native.is_some()
    }

    /// Invoke a native function.
    ///
    /// ## Errors
    /// - `NotNative` if the function is script-defined.
    /// - Whatever the native implementation returns.
    pub fn call(&self, args: &[Value]) -> IntrospectResult<Value> {
        match &self.native {
            Some(native) => native(args),
            None => Err(IntrospectError::NotNative {
                function: self.name.clone(),
            }),
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .field("native", &self.native.is_some())
            .finish()
    }
}

impl HostType for Function {
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Owned(self.signature.clone())
    }

    fn render(&self) -> String {
        format!("fn {}", self.name)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
