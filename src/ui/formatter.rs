//! Pure formatting functions for UI output.
//!
//! Everything here builds strings; printing happens in the parent module.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::Version;

/// Program name used to prefix messages written to stderr.
pub const PROGRAM: &str = "nextver";

/// Format a fatal error line, e.g. `nextver: no version ... has been found`.
pub fn format_error(message: &str) -> String {
    format!(
        "{}: {}",
        style(PROGRAM).for_stderr().red().bold(),
        message
    )
}

/// Format a verbose diagnostic line.
pub fn format_diagnostic(message: &str) -> String {
    format!("{}: {}", style(PROGRAM).for_stderr().dim(), message)
}

/// Format the skip notice for a tag.
pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format_diagnostic(&style(warning).for_stderr().yellow().to_string())
}

/// Render a version the way it is printed: prefix followed by `x.y.z`.
pub fn format_version(prefix: &str, version: &Version) -> String {
    format!("{}{}", prefix, version)
}
