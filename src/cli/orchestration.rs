//! Main workflow orchestration logic
//!
//! Ties the tag source, the selector and the bump together. Argument parsing
//! and printing stay in `main.rs`, so the workflow can be driven from tests
//! with a [`MockTagSource`](crate::git::MockTagSource).

use crate::boundary::BoundaryWarning;
use crate::domain::{Bump, TagSelector, Version};
use crate::error::{NextverError, Result};
use crate::git::TagSource;
use crate::ui;

/// Arguments for the version workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowArgs {
    /// Tag prefix used both to filter tags and to render the result
    pub prefix: String,

    /// Which version to produce
    pub bump: Bump,
}

/// Result of a successful workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowResult {
    /// Version of the highest matching tag
    pub current: Version,

    /// Version after applying the bump
    pub next: Version,

    /// `next` with the prefix in front, ready to print
    pub rendered: String,
}

/// Determine the current version from `source` and apply the requested bump.
///
/// Skipped tags are reported to `on_skip` as they are encountered.
///
/// # Errors
/// * Whatever the tag source fails with
/// * [`NextverError::NoVersionFound`] if no tag yields a version
pub fn run_workflow<S, F>(source: &S, args: &WorkflowArgs, on_skip: F) -> Result<WorkflowResult>
where
    S: TagSource + ?Sized,
    F: FnMut(&BoundaryWarning),
{
    let tags = source.list_tags_by_version()?;

    let selector = TagSelector::new(args.prefix.as_str());
    let current = selector
        .select_current(tags, on_skip)
        .ok_or_else(|| NextverError::no_version(args.prefix.as_str()))?;

    let next = current.bump(args.bump);

    Ok(WorkflowResult {
        current,
        next,
        rendered: ui::format_version(&args.prefix, &next),
    })
}
