//! Terminal output.
//!
//! Results go to stdout, everything else to stderr. Diagnostics are only
//! printed when the caller says so; there is no global verbosity switch.

mod formatter;

pub use formatter::{
    format_boundary_warning, format_diagnostic, format_error, format_version, PROGRAM,
};

use crate::boundary::BoundaryWarning;
use crate::domain::Version;

/// Print a fatal error to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print a diagnostic to stderr when `verbose` is on.
pub fn display_diagnostic(verbose: bool, message: &str) {
    if verbose {
        eprintln!("{}", format_diagnostic(message));
    }
}

/// Print why a tag was skipped when `verbose` is on.
pub fn display_boundary_warning(verbose: bool, warning: &BoundaryWarning) {
    if verbose {
        eprintln!("{}", format_boundary_warning(warning));
    }
}

/// Print the resulting version to stdout.
pub fn display_version(prefix: &str, version: &Version) {
    println!("{}", format_version(prefix, version));
}

/// Print the program version to stderr.
pub fn display_app_version() {
    eprintln!("{} version {}", PROGRAM, env!("CARGO_PKG_VERSION"));
}
