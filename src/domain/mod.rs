//! Domain logic - version grammar, bumps and tag selection, independent of git

pub mod tag;
pub mod version;

pub use tag::{Scan, TagOutcome, TagSelector};
pub use version::{Bump, Version};
