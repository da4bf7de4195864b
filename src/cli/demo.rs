//! A small demonstration runtime for the CLI.
//!
//! Stands in for a real embedding: it registers a few global functions and host modules, binds the
//! introspection export table, and provides one value of every shape as a named target.

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::exports::exports;
use crate::registry::Registry;
use crate::value::{Class, Function, Module, Object, Value};
use crate::{HostType, host_methods};

/// A registered user account, exposed to scripts as a host record.
#[derive(Debug, HostType)]
#[host(methods)]
#[allow(dead_code)]
pub struct User {
    pub name: String,
    pub email: String,
    #[host(rename = "ID")]
    pub id: u64,
    password_hash: String,
}

#[host_methods]
#[allow(dead_code)]
impl User {
    pub fn new(name: &str, email: &str, id: u64) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            id,
            password_hash: String::new(),
        }
    }

    pub fn greet(&self, greeting: &str) -> String {
        format!("{greeting}, {}!", self.name)
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
    }

    fn verify(&self, password: &str) -> bool {
        !password.is_empty() && self.password_hash == password
    }
}

/// The demo runtime state.
pub struct DemoWorld {
    meta: Module,
    targets: BTreeMap<&'static str, Value>,
}

impl DemoWorld {
    pub fn new() -> Self {
        let mut registry = Registry::new();
        registry
            .register_fn(Function::script("print", &["args"]))
            .register_fn(Function::script("len", &["x"]))
            .register_fn(Function::script("type", &["x"]))
            .register_fn(Function::script("$index", &["x", "i"]))
            .register_module("math")
            .register_module("strings")
            .register_module("meta");
        let meta = exports(Rc::new(registry));

        let point = Rc::new(
            Class::new("Point")
                .with_fn(Function::script("Norm", &["self"]))
                .with_fn(Function::script("Scale", &["self", "k"]))
                .with_fn(Function::script("_init", &["self", "x", "y"])),
        );
        let origin = Object::new(Rc::clone(&point))
            .with_var("x", 0i64)
            .with_var("y", 0i64);

        let math = Module::named("math")
            .with("Add", Function::script("Add", &["a", "b"]))
            .with("Pi", std::f64::consts::PI)
            .with("Sqrt", Function::script("Sqrt", &["x"]));
        let settings = Module::new()
            .with("debug", true)
            .with("level", 3i64)
            .with("name", "demo");

        let targets = BTreeMap::from([
            ("math", Value::from(math)),
            ("settings", Value::from(settings)),
            ("Point", Value::from(point)),
            ("origin", Value::from(origin)),
            ("user", Value::host(Box::new(User::new("ada", "ada@example.com", 1)))),
            ("answer", Value::from(42i64)),
            ("nothing", Value::Nil),
            ("meta", Value::from(meta.clone())),
        ]);

        Self { meta, targets }
    }

    /// The introspection export table.
    pub fn meta(&self) -> &Module {
        &self.meta
    }

    pub fn target(&self, name: &str) -> Option<&Value> {
        self.targets.get(name)
    }

    /// Target names in alphabetical order.
    pub fn target_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.targets.keys().copied()
    }
}

impl Default for DemoWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc;

    #[test]
    fn test_user_adapter() {
        let user = User::new("ada", "ada@example.com", 1);
        assert_eq!(user.type_name(), "User");
        let fields: Vec<&str> = user.fields().expect("User is a record").iter().map(|f| f.name).collect();
        assert_eq!(fields, ["Name", "Email", "ID", "password_hash"]);
        let methods: Vec<&str> = user.methods().iter().map(|m| m.name).collect();
        assert_eq!(methods, ["Greet", "Rename", "verify"]);
    }

    #[test]
    fn test_user_doc() {
        let world = DemoWorld::new();
        let user = world.target("user").expect("user target exists");
        assert_eq!(
            doc(user),
            "Box<User>\nName\tString\nEmail\tString\nID\tu64\nGreet\tfn(&User, &str) -> String\nRename\tfn(&mut User, String)"
        );
    }

    #[test]
    fn test_every_target_is_listed() {
        let world = DemoWorld::new();
        let names: Vec<&str> = world.target_names().collect();
        assert_eq!(names.len(), 8);
        assert!(names.iter().all(|n| world.target(n).is_some()));
    }
}
