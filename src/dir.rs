//! Member enumeration (`dir`).

use introspect_core::is_exported;

use crate::classify::{self, HostView, Kind, classify};
use crate::errors::{IntrospectError, IntrospectResult};
use crate::host::HostType;
use crate::value::Value;

/// List the member names of `value`.
///
/// - module: every binding key, including reserved ones such as `_name`
/// - class: every function-table key
/// - object: the class's function-table keys followed by the instance-variable names
/// - host value: exported record fields (after following indirection) followed by exported methods
///
/// ## Notes
/// - The result is a set in all but type: order is unspecified and callers must not depend on it.
/// - An object variable that shares its name with a class function appears twice; no deduplication happens.
/// - Never fails. A host value whose terminal shape is not a record simply contributes no fields.
#[tracing::instrument(skip_all, fields(kind = tracing::field::Empty))]
pub fn dir(value: &Value) -> Vec<String> {
    let kind = classify(value);
    tracing::Span::current().record("kind", kind.label());
    match kind {
        Kind::Module(module) => module.keys().map(str::to_string).collect(),
        Kind::Class(class) => class.fns().keys().cloned().collect(),
        Kind::Object(object) => {
            let mut list: Vec<String> = object.class().fns().keys().cloned().collect();
            match object.try_vars() {
                Some(vars) => list.extend(vars.keys().cloned()),
                None => tracing::trace!("instance variables are being mutated; listing functions only"),
            }
            list
        }
        Kind::Host(host) => host_members(&host),
    }
}

fn host_members(host: &HostView<'_>) -> Vec<String> {
    let mut list: Vec<String> = match host.fields() {
        Ok(fields) => fields
            .iter()
            .map(|f| f.name)
            .filter(|name| is_exported(name))
            .map(str::to_string)
            .collect(),
        Err(err) => {
            tracing::trace!(%err, "no record fields to list");
            Vec::new()
        }
    };
    list.extend(
        host.methods()
            .iter()
            .map(|m| m.name)
            .filter(|name| is_exported(name))
            .map(str::to_string),
    );
    list
}

/// List the exported field names of a host value's record shape, in declaration order.
///
/// Indirection (`Box`, `Rc`, `Arc`) is followed to the terminal value first.
///
/// ## Errors
/// - `NotARecord` if the terminal value has no named fields.
pub fn exported_field_names(host: &dyn HostType) -> IntrospectResult<Vec<&'static str>> {
    let fields = classify::terminal(host)
        .fields()
        .ok_or_else(|| IntrospectError::NotARecord {
            type_name: host.type_name().into_owned(),
        })?;
    Ok(fields
        .iter()
        .map(|f| f.name)
        .filter(|name| is_exported(name))
        .collect())
}
