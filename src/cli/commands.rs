//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! `dir`, `fnlist` and `pkgs` go through the export table, the same way a script would call them.

use crate::config::DocConfig;
use crate::doc::doc_with_config;
use crate::value::{Function, Value};

use super::demo::DemoWorld;
use super::{CliError, CliResult, ExitCode, ListOptions};

/// Print the members of a demo value.
pub fn dir_target(world: &DemoWorld, target: &str, opts: ListOptions) -> CliResult<ExitCode> {
    let value = lookup(world, target)?.clone();
    let list = call_export(world, "dir", &[value])?;
    print_list(as_list(&list)?, opts)
}

/// Print the description of a demo value.
pub fn doc_target(
    world: &DemoWorld,
    target: &str,
    class_marker: Option<String>,
    object_marker: Option<String>,
) -> CliResult<ExitCode> {
    let value = lookup(world, target)?;
    let mut config = DocConfig::new();
    if let Some(marker) = class_marker {
        config = config.with_class_marker(marker);
    }
    if let Some(marker) = object_marker {
        config = config.with_object_marker(marker);
    }
    println!("{}", doc_with_config(value, &config));
    Ok(ExitCode::SUCCESS)
}

/// Print the public global functions.
pub fn fn_list(world: &DemoWorld, opts: ListOptions) -> CliResult<ExitCode> {
    let list = call_export(world, "fnlist", &[])?;
    print_list(as_list(&list)?, opts)
}

/// Print the host-implemented modules.
pub fn pkgs(world: &DemoWorld, opts: ListOptions) -> CliResult<ExitCode> {
    let list = call_export(world, "pkgs", &[])?;
    print_list(as_list(&list)?, opts)
}

/// Print the demo target names.
pub fn targets(world: &DemoWorld, opts: ListOptions) -> CliResult<ExitCode> {
    let names: Vec<String> = world.target_names().map(str::to_string).collect();
    print_list(&names, opts)
}

fn lookup<'w>(world: &'w DemoWorld, target: &str) -> CliResult<&'w Value> {
    world.target(target).ok_or_else(|| {
        let known: Vec<&str> = world.target_names().collect();
        CliError::failure(format!(
            "Unknown target '{}'. Available targets: {}",
            target,
            known.join(", ")
        ))
    })
}

fn call_export(world: &DemoWorld, name: &str, args: &[Value]) -> CliResult<Value> {
    let function = world
        .meta()
        .get(name)
        .and_then(|v| v.downcast_ref::<Function>())
        .ok_or_else(|| CliError::failure(format!("Export '{}' is missing from the meta module", name)))?;
    tracing::debug!(export = name, args = args.len(), "calling export");
    Ok(function.call(args)?)
}

fn as_list(value: &Value) -> CliResult<&[String]> {
    value
        .downcast_ref::<Vec<String>>()
        .map(Vec::as_slice)
        .ok_or_else(|| CliError::failure(format!("Expected a list of names, got {}", value)))
}

fn print_list(list: &[String], opts: ListOptions) -> CliResult<ExitCode> {
    let mut list = list.to_vec();
    if opts.sorted {
        list.sort();
    }
    if opts.json {
        let json = serde_json::to_string_pretty(&list)
            .map_err(|e| CliError::failure(format!("Error rendering JSON: {}", e)))?;
        println!("{json}");
    } else {
        for name in &list {
            println!("{name}");
        }
    }
    Ok(ExitCode::SUCCESS)
}
