//! Kind classification.
//!
//! Every public operation classifies its argument once and dispatches on the result. Classification borrows
//! the value, never stores anything, and is recomputed on every call.

use std::borrow::Cow;

use crate::errors::{IntrospectError, IntrospectResult};
use crate::host::{FieldInfo, HostType, MethodInfo};
use crate::value::{Class, Module, Object, Value};

/// The structural variant of a value.
#[derive(Debug, Clone, Copy)]
pub enum Kind<'a> {
    Module(&'a Module),
    Class(&'a Class),
    Object(&'a Object),
    Host(HostView<'a>),
}

impl Kind<'_> {
    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Module(_) => "module",
            Kind::Class(_) => "class",
            Kind::Object(_) => "object",
            Kind::Host(_) => "host",
        }
    }
}

/// A host value together with its record sub-classification.
///
/// `Nil` is viewed as a host value with no adapter: it has no fields, no methods, and the type name `nil`.
#[derive(Debug, Clone, Copy)]
pub struct HostView<'a> {
    value: Option<&'a dyn HostType>,
    terminal: Option<&'a dyn HostType>,
    is_record: bool,
}

impl<'a> HostView<'a> {
    fn new(value: Option<&'a dyn HostType>) -> Self {
        let last = value.map(terminal);
        let is_record = last.is_some_and(|t| t.fields().is_some());
        Self {
            value,
            terminal: last,
            is_record,
        }
    }

    /// Static type name of the value itself (not of its pointee).
    pub fn type_name(&self) -> Cow<'static, str> {
        match self.value {
            Some(value) => value.type_name(),
            None => Cow::Borrowed("nil"),
        }
    }

    /// Whether the terminal shape, after following indirection, is a record.
    pub fn is_record(&self) -> bool {
        self.is_record
    }

    /// The terminal record's fields in declaration order.
    ///
    /// ## Errors
    /// - `NotARecord` if the terminal shape has no named fields.
    pub fn fields(&self) -> IntrospectResult<&'static [FieldInfo]> {
        self.terminal
            .and_then(|t| t.fields())
            .ok_or_else(|| IntrospectError::NotARecord {
                type_name: self.type_name().into_owned(),
            })
    }

    /// The value's method set.
    pub fn methods(&self) -> &'static [MethodInfo] {
        match self.value {
            Some(value) => value.methods(),
            None => &[],
        }
    }
}

/// Follow single-owner indirection until reaching a value that is not a pointer.
pub fn terminal(mut host: &dyn HostType) -> &dyn HostType {
    while let Some(next) = host.pointee() {
        host = next;
    }
    host
}

/// Determine which variant `value` is.
pub fn classify(value: &Value) -> Kind<'_> {
    match value {
        Value::Module(module) => Kind::Module(module),
        Value::Class(class) => Kind::Class(class),
        Value::Object(object) => Kind::Object(object),
        Value::Host(host) => Kind::Host(HostView::new(Some(&**host))),
        Value::Nil => Kind::Host(HostView::new(None)),
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_variants() {
        assert_eq!(classify(&Value::from(Module::new())).label(), "module");
        let class = Rc::new(Class::new("C"));
        assert_eq!(classify(&Value::from(Rc::clone(&class))).label(), "class");
        assert_eq!(classify(&Value::from(Object::new(class))).label(), "object");
        assert_eq!(classify(&Value::from(1i64)).label(), "host");
        assert_eq!(classify(&Value::Nil).label(), "host");
    }

    #[test]
    fn test_plain_host_value_is_not_a_record() {
        let value = Value::from(1i64);
        let Kind::Host(view) = classify(&value) else {
            panic!("expected a host value");
        };
        assert!(!view.is_record());
        assert_eq!(view.type_name(), "i64");
        assert_eq!(
            view.fields(),
            Err(IntrospectError::NotARecord {
                type_name: "i64".to_string()
            })
        );
    }

    #[test]
    fn test_nil_view() {
        let nil = Value::Nil;
        let Kind::Host(view) = classify(&nil) else {
            panic!("expected a host value");
        };
        assert_eq!(view.type_name(), "nil");
        assert!(view.methods().is_empty());
        assert!(view.fields().is_err());
    }

    #[test]
    fn test_terminal_follows_all_levels() {
        let value = Rc::new(Box::new(5i64));
        assert_eq!(terminal(&value).type_name(), "i64");
        assert_eq!(terminal(&7i64).type_name(), "i64");
    }
}
