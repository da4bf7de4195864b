//! Human-readable descriptions (`doc`).
//!
//! Output is line oriented. A header line (when the variant has one) comes first, then one entry per member
//! as `name<TAB>detail`. Lines are separated by `\n`; there is no leading or trailing newline.

use std::borrow::Cow;
use std::fmt;

use introspect_core::{is_exported, is_reserved};

use crate::classify::{HostView, Kind, classify};
use crate::config::DocConfig;
use crate::value::{Module, Value};

/// Describe `value` using the default [`DocConfig`].
pub fn doc(value: &Value) -> String {
    doc_with_config(value, &DocConfig::default())
}

/// Describe `value`.
///
/// - module with a declared name: `package <name>`, then `key<TAB>dynamic type` for every non-reserved key
///   whose value has a dynamic type
/// - module without a declared name: `key<TAB>rendered value` for every key (no header)
/// - class: the class marker, then `name<TAB>signature` per function
/// - object: the object marker, then the class functions, then `name<TAB>dynamic type` per variable
///   (`nil` for an untyped variable)
/// - host value: the static type name, then exported record fields (declaration order) with their field
///   types, then exported methods with their signatures
///
/// Never fails; absent sub-shapes produce no entries.
#[tracing::instrument(skip_all, fields(kind = tracing::field::Empty))]
pub fn doc_with_config(value: &Value, config: &DocConfig) -> String {
    let kind = classify(value);
    tracing::Span::current().record("kind", kind.label());
    let mut out = DocWriter::default();
    match kind {
        Kind::Module(module) => describe_module(&mut out, module, config),
        Kind::Class(class) => {
            out.line(&config.class_marker);
            for (name, function) in class.fns() {
                out.entry(name, function.signature());
            }
        }
        Kind::Object(object) => {
            out.line(&config.object_marker);
            for (name, function) in object.class().fns() {
                out.entry(name, function.signature());
            }
            match object.try_vars() {
                Some(vars) => {
                    for (name, var) in vars.iter() {
                        out.entry(name, var.dynamic_type().unwrap_or(Cow::Borrowed("nil")));
                    }
                }
                None => tracing::trace!("instance variables are being mutated; describing functions only"),
            }
        }
        Kind::Host(host) => describe_host(&mut out, &host),
    }
    out.finish()
}

fn describe_module(out: &mut DocWriter, module: &Module, config: &DocConfig) {
    match module.declared_name() {
        Some(name) => {
            out.line(format_args!("{} {}", config.package_keyword, name));
            for (key, value) in module.iter() {
                if is_reserved(key) {
                    continue;
                }
                match value.dynamic_type() {
                    Some(ty) => out.entry(key, ty),
                    None => tracing::trace!(key = %key, "skipping untyped binding"),
                }
            }
        }
        None => {
            for (key, value) in module.iter() {
                out.entry(key, value);
            }
        }
    }
}

fn describe_host(out: &mut DocWriter, host: &HostView<'_>) {
    out.line(host.type_name());
    match host.fields() {
        Ok(fields) => {
            for field in fields.iter().filter(|f| is_exported(f.name)) {
                out.entry(field.name, field.type_name);
            }
        }
        Err(err) => tracing::trace!(%err, "no record fields to describe"),
    }
    for method in host.methods().iter().filter(|m| is_exported(m.name)) {
        out.entry(method.name, method.signature);
    }
}

/// Accumulates newline-separated lines.
#[derive(Default)]
struct DocWriter {
    buf: String,
    started: bool,
}

impl DocWriter {
    fn line(&mut self, text: impl fmt::Display) {
        if self.started {
            self.buf.push('\n');
        }
        self.started = true;
        self.buf.push_str(&text.to_string());
    }

    fn entry(&mut self, name: &str, detail: impl fmt::Display) {
        self.line(format_args!("{name}\t{detail}"));
    }

    fn finish(self) -> String {
        self.buf
    }
}
