//! Host value adapters.
//!
//! A *host value* is anything the embedding program hands to the runtime that is not a module, class, or
//! object. The runtime cannot reflect over arbitrary Rust types, so each host type describes itself through
//! [`HostType`]: its static type name, its record shape (if it has named fields), and the methods attached
//! to it.
//!
//! Adapters come from three places:
//! - `#[derive(HostType)]` / `#[host_methods]` (see `introspect_derive`) for application types,
//! - the hand-written impls in this module for scalars and a few containers,
//! - the indirection impls for `Box<T>`, `Rc<T>` and `Arc<T>`, which expose their pointee so the classifier
//!   can look through them.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// One named, statically typed field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldInfo {
    /// Host-visible field name.
    pub name: &'static str,
    /// Source spelling of the field's type (`Vec<String>`).
    pub type_name: &'static str,
}

/// One method attached to a host type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodInfo {
    /// Host-visible method name.
    pub name: &'static str,
    /// Function-type signature including the receiver (`fn(&User, &str) -> String`).
    pub signature: &'static str,
}

/// Describe a host type to the introspection runtime.
///
/// ## Notes
/// - `fields` returns the record shape of *this* type only. Indirection types return `None` and report the
///   value they point at through `pointee`; the classifier follows that chain to the terminal shape.
/// - `methods` is the method set of the value as seen by the runtime. Indirection types forward their
///   pointee's methods, mirroring auto-deref.
pub trait HostType: fmt::Debug + 'static {
    /// Static type name shown on the first line of `doc`.
    fn type_name(&self) -> Cow<'static, str>;

    /// Named fields in declaration order, or `None` if this type is not a record.
    fn fields(&self) -> Option<&'static [FieldInfo]> {
        None
    }

    /// Methods attached to this type, in declaration order.
    fn methods(&self) -> &'static [MethodInfo] {
        &[]
    }

    /// The value behind one level of single-owner indirection, if this type is a pointer.
    fn pointee(&self) -> Option<&dyn HostType> {
        None
    }

    /// Human-readable rendering of the current value.
    fn render(&self) -> String {
        format!("{self:?}")
    }

    fn as_any(&self) -> &dyn Any;
}

/// Method table generated by `#[host_methods]` on an inherent impl block.
pub trait HostMethods {
    fn host_methods() -> &'static [MethodInfo];
}

macro_rules! host_scalar {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl HostType for $ty {
                fn type_name(&self) -> Cow<'static, str> {
                    Cow::Borrowed($name)
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )*
    };
}

host_scalar! {
    () => "()",
    bool => "bool",
    char => "char",
    i32 => "i32",
    i64 => "i64",
    u64 => "u64",
    f64 => "f64",
    String => "String",
    &'static str => "&str",
    Vec<String> => "Vec<String>",
}

macro_rules! host_pointer {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: HostType> HostType for $ptr<T> {
                fn type_name(&self) -> Cow<'static, str> {
                    Cow::Owned(format!(concat!(stringify!($ptr), "<{}>"), (**self).type_name()))
                }

                fn methods(&self) -> &'static [MethodInfo] {
                    (**self).methods()
                }

                fn pointee(&self) -> Option<&dyn HostType> {
                    Some(&**self)
                }

                fn render(&self) -> String {
                    (**self).render()
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )*
    };
}

host_pointer!(Box, Rc, Arc);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    #[allow(dead_code)]
    struct Point {
        x: i64,
    }

    const POINT_FIELDS: &[FieldInfo] = &[FieldInfo {
        name: "X",
        type_name: "i64",
    }];
    const POINT_METHODS: &[MethodInfo] = &[MethodInfo {
        name: "Norm",
        signature: "fn(&Point) -> f64",
    }];

    impl HostType for Point {
        fn type_name(&self) -> Cow<'static, str> {
            Cow::Borrowed("Point")
        }

        fn fields(&self) -> Option<&'static [FieldInfo]> {
            Some(POINT_FIELDS)
        }

        fn methods(&self) -> &'static [MethodInfo] {
            POINT_METHODS
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_scalars_are_not_records() {
        assert_eq!(42i64.type_name(), "i64");
        assert!(42i64.fields().is_none());
        assert!(42i64.methods().is_empty());
        assert!(42i64.pointee().is_none());
    }

    #[test]
    fn test_render_uses_debug() {
        assert_eq!(1i64.render(), "1");
        assert_eq!("hi".to_string().render(), "\"hi\"");
        assert_eq!(true.render(), "true");
    }

    #[test]
    fn test_pointers_name_and_forward() {
        let boxed = Box::new(Point { x: 3 });
        assert_eq!(boxed.type_name(), "Box<Point>");
        assert!(boxed.fields().is_none(), "pointer itself has no fields");
        assert_eq!(boxed.methods(), POINT_METHODS);
        let inner = boxed.pointee().expect("box has a pointee");
        assert_eq!(inner.type_name(), "Point");
        assert_eq!(inner.fields(), Some(POINT_FIELDS));
        assert_eq!(boxed.render(), format!("{:?}", Point { x: 3 }));
    }

    #[test]
    fn test_nested_pointers() {
        let value = Rc::new(Box::new(Point { x: 1 }));
        assert_eq!(value.type_name(), "Rc<Box<Point>>");
        let level1 = value.pointee().expect("rc has a pointee");
        let level2 = level1.pointee().expect("box has a pointee");
        assert_eq!(level2.type_name(), "Point");
        assert!(level2.pointee().is_none());
    }

    #[test]
    fn test_downcast_through_as_any() {
        let value = String::from("math");
        assert_eq!(value.as_any().downcast_ref::<String>().map(String::as_str), Some("math"));
        assert!(value.as_any().downcast_ref::<i64>().is_none());
    }
}
