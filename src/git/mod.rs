//! Tag source abstraction
//!
//! The version selection logic never talks to git directly. It receives tags
//! from a [TagSource], already ordered highest-first, and trusts that order.
//!
//! - [repository::GitRepository]: lists tags from a real repository
//! - [mock::MockTagSource]: fixed tag list for tests
//!
//! ```rust
//! # use nextver::git::TagSource;
//! # fn example<S: TagSource>(source: &S) -> nextver::Result<()> {
//! for tag in source.list_tags_by_version()? {
//!     println!("{}", tag);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockTagSource;
pub use repository::GitRepository;

use crate::error::Result;

/// Something that can list repository tags, highest version first
///
/// ## Ordering
///
/// Implementations own the ordering. Callers take the first acceptable tag
/// and never re-sort, so a wrong order here means a wrong "current" version.
pub trait TagSource: Send + Sync {
    /// List all tag names, sorted by version in descending order
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names, highest version first
    /// * `Err` - If the tags cannot be listed
    fn list_tags_by_version(&self) -> Result<Vec<String>>;
}
