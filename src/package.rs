//! Module name resolution.

use crate::value::Value;

/// Resolve the declared name of a module value.
///
/// Returns `Some(name)` only when `value` is a module whose reserved name key (`_name`) holds a string.
/// Any other value, a missing key, or a non-string name yields `None`.
///
/// ## Examples
/// ```rust
/// use introspect::{Module, Value, resolve_package_name};
///
/// let math = Value::from(Module::named("math"));
/// assert_eq!(resolve_package_name(&math), Some("math"));
/// assert_eq!(resolve_package_name(&Value::from(Module::new())), None);
/// ```
pub fn resolve_package_name(value: &Value) -> Option<&str> {
    value.as_module()?.declared_name()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Class, Module};

    #[test]
    fn test_named_module() {
        let module = Value::from(Module::named("math").with("Add", 1i64));
        assert_eq!(resolve_package_name(&module), Some("math"));
    }

    #[test]
    fn test_non_string_name_is_ignored() {
        let module = Value::from(Module::new().with("_name", 3i64));
        assert_eq!(resolve_package_name(&module), None);
    }

    #[test]
    fn test_non_modules_have_no_package_name() {
        assert_eq!(resolve_package_name(&Value::from("math")), None);
        assert_eq!(resolve_package_name(&Value::from(Class::new("math"))), None);
        assert_eq!(resolve_package_name(&Value::Nil), None);
    }
}
