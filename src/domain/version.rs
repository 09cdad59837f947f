use crate::error::{NextverError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Semantic Versioning 2.0.0 grammar, anchored on both ends.
///
/// This is the expression suggested at
/// <https://semver.org/#is-there-a-suggested-regular-expression-regex-to-check-a-semver-string>
/// with `\d` spelled out as `[0-9]`, since the `regex` crate treats `\d` as
/// any Unicode digit.
const SEMVER_PATTERN: &str = concat!(
    r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)",
    r"(?:-((?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
    r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
    r"(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
);

fn semver_regex() -> &'static Regex {
    static SEMVER: OnceLock<Regex> = OnceLock::new();
    SEMVER.get_or_init(|| Regex::new(SEMVER_PATTERN).expect("semver pattern is a valid regex"))
}

/// Semantic version core: major, minor and patch.
///
/// Pre-release and build metadata are accepted by [`Version::parse`] but not
/// kept. No ordering is defined here; the tag source decides which version
/// is the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Which component of a version to increment.
///
/// `Current` leaves the version untouched and exists so the "print current
/// version" command goes through the same path as the bumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bump {
    Major,
    Minor,
    Patch,
    Current,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version that satisfies the Semantic Versioning 2.0.0 grammar.
    ///
    /// The whole input must match: `"v1.2.3"` or `"1.2.3 "` are rejected.
    /// Every failure is reported as [`NextverError::InvalidFormat`].
    ///
    /// # Example
    /// ```
    /// use nextver::domain::Version;
    ///
    /// let v = Version::parse("1.0.0-alpha.1+build.5").unwrap();
    /// assert_eq!(v, Version::new(1, 0, 0));
    /// assert!(Version::parse("v1.0.0").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let caps = semver_regex()
            .captures(s)
            .ok_or(NextverError::InvalidFormat)?;

        // The grammar guarantees digits only; anything past u64 is still
        // rejected rather than truncated.
        let component = |i: usize| -> Result<u64> {
            caps.get(i)
                .ok_or(NextverError::InvalidFormat)?
                .as_str()
                .parse::<u64>()
                .map_err(|_| NextverError::InvalidFormat)
        };

        Ok(Version {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
        })
    }

    /// (major + 1).0.0
    pub fn next_major(&self) -> Self {
        Version::new(self.major + 1, 0, 0)
    }

    /// major.(minor + 1).0
    pub fn next_minor(&self) -> Self {
        Version::new(self.major, self.minor + 1, 0)
    }

    /// major.minor.(patch + 1)
    pub fn next_patch(&self) -> Self {
        Version::new(self.major, self.minor, self.patch + 1)
    }

    /// Apply a bump, returning the new version
    pub fn bump(&self, bump: Bump) -> Self {
        match bump {
            Bump::Major => self.next_major(),
            Bump::Minor => self.next_minor(),
            Bump::Patch => self.next_patch(),
            Bump::Current => *self,
        }
    }
}

impl FromStr for Version {
    type Err = NextverError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
