//! CLI module for introspect
//!
//! Runs the introspection operations against a built-in demonstration runtime.
//!
//! ## Commands
//!
//! - `dir <target>` - List the members of a value
//! - `doc <target>` - Describe a value
//! - `fnlist` - List public global functions
//! - `pkgs` - List host-implemented modules
//! - `targets` - List the demo values
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod demo;

use std::fmt;
use std::process;

use clap::{Args, Parser, Subcommand};

use crate::version::INTROSPECT_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::IntrospectError> for CliError {
    fn from(err: crate::errors::IntrospectError) -> Self {
        CliError::failure(format!("Error: {err}"))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Inspect values of the demonstration runtime
#[derive(Parser, Debug)]
#[command(name = "introspect")]
#[command(version = INTROSPECT_VERSION)]
#[command(about = "Inspect members and descriptions of runtime values", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Output options shared by list-producing commands.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct ListOptions {
    /// Print the list as a JSON array
    #[arg(long)]
    pub json: bool,
    /// Sort the list before printing (display only)
    #[arg(long)]
    pub sorted: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the members of a value
    Dir {
        /// Name of the demo value (see `targets`)
        #[arg(value_name = "TARGET")]
        target: String,
        #[command(flatten)]
        list: ListOptions,
    },

    /// Describe a value
    Doc {
        /// Name of the demo value (see `targets`)
        #[arg(value_name = "TARGET")]
        target: String,
        /// First line printed for classes
        #[arg(long, value_name = "TEXT")]
        class_marker: Option<String>,
        /// First line printed for objects
        #[arg(long, value_name = "TEXT")]
        object_marker: Option<String>,
    },

    /// List public global functions
    Fnlist {
        #[command(flatten)]
        list: ListOptions,
    },

    /// List host-implemented modules
    Pkgs {
        #[command(flatten)]
        list: ListOptions,
    },

    /// List the demo values available as targets
    Targets {
        #[command(flatten)]
        list: ListOptions,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let world = demo::DemoWorld::new();
    match cli.command {
        Command::Dir { target, list } => commands::dir_target(&world, &target, list),
        Command::Doc {
            target,
            class_marker,
            object_marker,
        } => commands::doc_target(&world, &target, class_marker, object_marker),
        Command::Fnlist { list } => commands::fn_list(&world, list),
        Command::Pkgs { list } => commands::pkgs(&world, list),
        Command::Targets { list } => commands::targets(&world, list),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_dir() {
        let cli = Cli::try_parse_from(["introspect", "dir", "math", "--sorted"]).unwrap();
        if let Command::Dir { target, list } = cli.command {
            assert_eq!(target, "math");
            assert!(list.sorted);
            assert!(!list.json);
        } else {
            panic!("Expected Dir command");
        }
    }

    #[test]
    fn test_cli_parse_doc_markers() {
        let cli = Cli::try_parse_from(["introspect", "doc", "Point", "--class-marker", "<class>"]).unwrap();
        if let Command::Doc {
            target, class_marker, ..
        } = cli.command
        {
            assert_eq!(target, "Point");
            assert_eq!(class_marker.as_deref(), Some("<class>"));
        } else {
            panic!("Expected Doc command");
        }
    }

    #[test]
    fn test_cli_parse_list_commands() {
        let cli = Cli::try_parse_from(["introspect", "fnlist", "--json"]).unwrap();
        assert!(matches!(cli.command, Command::Fnlist { list } if list.json));

        let cli = Cli::try_parse_from(["introspect", "pkgs"]).unwrap();
        assert!(matches!(cli.command, Command::Pkgs { .. }));

        let cli = Cli::try_parse_from(["introspect", "targets"]).unwrap();
        assert!(matches!(cli.command, Command::Targets { .. }));
    }

    #[test]
    fn test_cli_requires_a_command() {
        assert!(Cli::try_parse_from(["introspect"]).is_err());
        assert!(Cli::try_parse_from(["introspect", "dir"]).is_err());
    }

    #[test]
    fn test_unknown_target_fails() {
        let cli = Cli::try_parse_from(["introspect", "doc", "missing"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("missing"));
    }
}
