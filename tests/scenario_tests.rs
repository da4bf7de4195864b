//! End-to-end scenarios for `dir`, `doc` and package-name resolution.
//!
//! Map iteration order is unspecified, so every comparison of member lists is done on sets (or on sorted
//! line lists where duplicates matter).

use std::collections::BTreeSet;
use std::rc::Rc;

use introspect::{
    Class, Function, HostType, Module, Object, Value, dir, doc, host_methods, resolve_package_name,
};

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn dir_set(value: &Value) -> BTreeSet<String> {
    dir(value).into_iter().collect()
}

/// First tab-separated token of every line after the header.
fn doc_names(text: &str) -> BTreeSet<String> {
    text.lines()
        .filter_map(|line| line.split_once('\t').map(|(name, _)| name.to_string()))
        .collect()
}

fn class_c() -> Rc<Class> {
    Rc::new(
        Class::new("C")
            .with_fn(Function::script("Foo", &["self"]))
            .with_fn(Function::script("Bar", &["self", "x"])),
    )
}

#[derive(Debug, HostType)]
#[host(methods)]
struct Person {
    pub name: String,
    secret: String,
}

#[host_methods]
impl Person {
    pub fn greet(&self) -> String {
        format!("hello from {} ({})", self.name, self.secret.len())
    }
}

fn person() -> Value {
    Value::host(Box::new(Person {
        name: "Ada".to_string(),
        secret: "x".to_string(),
    }))
}

#[test]
fn module_dir_is_exactly_its_keys() {
    let module = Value::from(
        Module::new()
            .with("a", 1i64)
            .with("b", "two")
            .with("c", Function::script("c", &[])),
    );
    assert_eq!(dir_set(&module), set(&["a", "b", "c"]));
}

#[test]
fn class_dir_is_its_function_table() {
    assert_eq!(dir_set(&Value::from(class_c())), set(&["Foo", "Bar"]));
}

#[test]
fn object_dir_is_functions_and_vars() {
    let object = Value::from(Object::new(class_c()).with_var("x", 1i64));
    assert_eq!(dir_set(&object), set(&["Foo", "Bar", "x"]));
}

#[test]
fn object_dir_reflects_current_vars() {
    let object = Rc::new(Object::new(class_c()));
    let value = Value::Object(Rc::clone(&object));
    assert_eq!(dir_set(&value), set(&["Foo", "Bar"]));
    object.set_var("y", 2i64);
    assert_eq!(dir_set(&value), set(&["Foo", "Bar", "y"]));
}

#[test]
fn host_record_behind_pointer_hides_unexported_members() {
    let value = person();
    let names = dir(&value);
    assert_eq!(names.iter().cloned().collect::<BTreeSet<_>>(), set(&["Name", "Greet"]));
    assert!(!names.iter().any(|n| n == "secret"));
}

#[test]
fn doc_mentions_every_dir_name() {
    let values = [
        Value::from(Module::named("math").with("Add", Function::script("Add", &["a", "b"]))),
        Value::from(Module::new().with("x", 1i64).with("y", "hi")),
        Value::from(class_c()),
        Value::from(Object::new(class_c()).with_var("x", 1i64)),
        Value::from(Object::new(class_c()).with_var("pending", Value::Nil)),
        person(),
        Value::from(5i64),
    ];
    for value in &values {
        let described = doc_names(&doc(value));
        for name in dir(value) {
            if name == "_name" {
                // The reserved name key is reported by dir but shown as the package header by doc.
                continue;
            }
            assert!(described.contains(&name), "{name} missing from doc of {value}");
        }
    }
}

#[test]
fn scenario_a_named_module() {
    let add = Function::native("Add", "fn(i64, i64) -> i64", |_| Ok(Value::from(0i64)));
    let module = Value::from(Module::named("math").with("Add", add));

    assert_eq!(resolve_package_name(&module), Some("math"));
    let text = doc(&module);
    assert!(text.starts_with("package math"));
    assert_eq!(text, "package math\nAdd\tfn(i64, i64) -> i64");
    assert!(!text.lines().any(|line| line.starts_with("_name")));
}

#[test]
fn scenario_b_unnamed_module_renders_values() {
    let module = Value::from(Module::new().with("x", 1i64).with("y", "hi"));
    assert_eq!(resolve_package_name(&module), None);

    let text = doc(&module);
    let mut lines: Vec<&str> = text.lines().collect();
    lines.sort_unstable();
    assert_eq!(lines, ["x\t1", "y\t\"hi\""]);
}

#[test]
fn scenario_c_empty_class() {
    let class = Value::from(Class::new("Empty"));
    assert!(dir(&class).is_empty());
    assert_eq!(doc(&class), "class");
}

#[test]
fn scenario_d_plain_integer() {
    let value = Value::from(7i64);
    assert!(dir(&value).is_empty());
    assert_eq!(doc(&value), "i64");
}

#[test]
fn object_doc_lists_functions_then_vars() {
    let object = Value::from(Object::new(class_c()).with_var("x", 1i64));
    let text = doc(&object);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("object"));
    let mut rest: Vec<&str> = lines.collect();
    // Functions come before variables.
    assert_eq!(rest.last(), Some(&"x\ti64"));
    rest.sort_unstable();
    assert_eq!(rest, ["Bar\tfn(self, x)", "Foo\tfn(self)", "x\ti64"]);
}

#[test]
fn object_doc_describes_untyped_vars() {
    let object = Value::from(Object::new(class_c()).with_var("pending", Value::Nil));
    assert!(dir(&object).iter().any(|n| n == "pending"));
    assert!(doc(&object).lines().any(|line| line == "pending\tnil"));
}

#[test]
fn nil_degrades_to_minimal_output() {
    assert!(dir(&Value::Nil).is_empty());
    assert_eq!(doc(&Value::Nil), "nil");
}
