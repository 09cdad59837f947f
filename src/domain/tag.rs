use crate::boundary::BoundaryWarning;
use crate::domain::version::Version;

/// What happened to a single tag during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagOutcome {
    /// Tag carried the prefix and the remainder is a valid version
    Matched(Version),
    /// Tag does not start with the configured prefix
    SkippedMissingPrefix,
    /// Tag carried the prefix but the remainder is not a version
    SkippedInvalid { reason: String },
}

impl TagOutcome {
    /// Convert a skipped outcome into the advisory warning shown to the user.
    ///
    /// Returns `None` for [`TagOutcome::Matched`].
    pub fn into_warning(self, tag: &str, prefix: &str) -> Option<BoundaryWarning> {
        match self {
            TagOutcome::Matched(_) => None,
            TagOutcome::SkippedMissingPrefix => Some(BoundaryWarning::MissingPrefix {
                tag: tag.to_string(),
                prefix: prefix.to_string(),
            }),
            TagOutcome::SkippedInvalid { reason } => Some(BoundaryWarning::UnparsableTag {
                tag: tag.to_string(),
                reason,
            }),
        }
    }
}

/// Picks the current version out of tags that are already ordered
/// highest-first by the tag source.
///
/// An empty prefix accepts every tag as a candidate.
#[derive(Debug, Clone, Default)]
pub struct TagSelector {
    prefix: String,
}

impl TagSelector {
    /// Create a selector that only considers tags starting with `prefix`
    pub fn new(prefix: impl Into<String>) -> Self {
        TagSelector {
            prefix: prefix.into(),
        }
    }

    /// The prefix tags must carry
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Classify a single tag without looking at any other
    pub fn classify(&self, tag: &str) -> TagOutcome {
        let Some(rest) = tag.strip_prefix(self.prefix.as_str()) else {
            return TagOutcome::SkippedMissingPrefix;
        };

        match Version::parse(rest) {
            Ok(version) => TagOutcome::Matched(version),
            Err(e) => TagOutcome::SkippedInvalid {
                reason: e.to_string(),
            },
        }
    }

    /// Lazily walk `tags` in the given order, yielding each tag with its outcome.
    ///
    /// The iterator ends right after the first [`TagOutcome::Matched`] item;
    /// tags after it are never pulled from the source.
    pub fn scan<I>(&self, tags: I) -> Scan<'_, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Scan {
            selector: self,
            tags: tags.into_iter(),
            found: false,
        }
    }

    /// Return the first tag that parses as a version, or `None` when the
    /// sequence runs out.
    ///
    /// Every skipped tag is reported to `on_skip`. Running out of tags is not
    /// an error here; callers decide what an unversioned repository means.
    pub fn select_current<I, F>(&self, tags: I, mut on_skip: F) -> Option<Version>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        F: FnMut(&BoundaryWarning),
    {
        for (tag, outcome) in self.scan(tags) {
            if let TagOutcome::Matched(version) = outcome {
                return Some(version);
            }
            if let Some(warning) = outcome.into_warning(&tag, &self.prefix) {
                on_skip(&warning);
            }
        }
        None
    }
}

/// Iterator returned by [`TagSelector::scan`]
pub struct Scan<'a, I> {
    selector: &'a TagSelector,
    tags: I,
    found: bool,
}

impl<I> Iterator for Scan<'_, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = (String, TagOutcome);

    fn next(&mut self) -> Option<Self::Item> {
        if self.found {
            return None;
        }

        let tag = self.tags.next()?;
        let tag = tag.as_ref();
        let outcome = self.selector.classify(tag);
        self.found = matches!(outcome, TagOutcome::Matched(_));

        Some((tag.to_string(), outcome))
    }
}

impl<I> std::iter::FusedIterator for Scan<'_, I>
where
    I: std::iter::FusedIterator,
    I::Item: AsRef<str>,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(tags: &[&str], prefix: &str) -> (Option<Version>, Vec<BoundaryWarning>) {
        let mut warnings = Vec::new();
        let current =
            TagSelector::new(prefix).select_current(tags, |w| warnings.push(w.clone()));
        (current, warnings)
    }

    #[test]
    fn test_first_parseable_tag_wins() {
        let (current, _) = select(
            &["release-2.0.0", "release-garbage", "release-1.5.0"],
            "release-",
        );
        assert_eq!(current, Some(Version::new(2, 0, 0)));
    }

    #[test]
    fn test_later_tags_are_not_examined() {
        let (_, warnings) = select(&["release-2.0.0", "release-garbage"], "release-");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_skips_invalid_then_matches() {
        let (current, warnings) = select(&["release-garbage", "release-1.5.0"], "release-");
        assert_eq!(current, Some(Version::new(1, 5, 0)));
        assert_eq!(
            warnings,
            vec![BoundaryWarning::UnparsableTag {
                tag: "release-garbage".to_string(),
                reason: "invalid semantic version format".to_string(),
            }]
        );
    }

    #[test]
    fn test_prefix_mismatch_is_skipped() {
        let (current, warnings) = select(&["v1.0.0", "app-2.0.0"], "app-");
        assert_eq!(current, Some(Version::new(2, 0, 0)));
        assert_eq!(
            warnings,
            vec![BoundaryWarning::MissingPrefix {
                tag: "v1.0.0".to_string(),
                prefix: "app-".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_prefix_considers_every_tag() {
        let (current, warnings) = select(&["v1.0.0", "0.9.0"], "");
        assert_eq!(current, Some(Version::new(0, 9, 0)));
        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            warnings[0],
            BoundaryWarning::UnparsableTag { .. }
        ));
    }

    #[test]
    fn test_exhaustion_returns_none() {
        assert_eq!(select(&["foo", "bar"], "").0, None);
        assert_eq!(select(&["foo", "bar"], "v").0, None);
        assert_eq!(select(&[], "v").0, None);
    }

    #[test]
    fn test_zero_version_is_found_not_absent() {
        let (current, _) = select(&["v0.0.0"], "v");
        assert_eq!(current, Some(Version::new(0, 0, 0)));
    }

    #[test]
    fn test_prefixed_prerelease_tag_matches() {
        let (current, _) = select(&["v1.2.3-rc.1+build.5"], "v");
        assert_eq!(current, Some(Version::new(1, 2, 3)));
    }

    #[test]
    fn test_prefix_is_stripped_once() {
        // "vv1.0.0" minus "v" is "v1.0.0", which the grammar rejects
        let (current, _) = select(&["vv1.0.0"], "v");
        assert_eq!(current, None);
    }

    #[test]
    fn test_scan_yields_outcomes_and_stops_after_match() {
        let selector = TagSelector::new("v");
        let outcomes: Vec<_> = selector
            .scan(["x1.0.0", "v1.x", "v1.0.0", "v0.9.0"])
            .collect();

        assert_eq!(
            outcomes,
            vec![
                ("x1.0.0".to_string(), TagOutcome::SkippedMissingPrefix),
                (
                    "v1.x".to_string(),
                    TagOutcome::SkippedInvalid {
                        reason: "invalid semantic version format".to_string()
                    }
                ),
                (
                    "v1.0.0".to_string(),
                    TagOutcome::Matched(Version::new(1, 0, 0))
                ),
            ]
        );
    }

    #[test]
    fn test_scan_does_not_pull_past_match() {
        let mut pulled = 0;
        let tags = ["1.0.0", "2.0.0", "3.0.0"].into_iter().inspect(|_| pulled += 1);

        let current = TagSelector::default().select_current(tags, |_| {});

        assert_eq!(current, Some(Version::new(1, 0, 0)));
        assert_eq!(pulled, 1);
    }

    #[test]
    fn test_accepts_owned_strings() {
        let tags = vec!["v3.1.4".to_string()];
        let current = TagSelector::new("v").select_current(tags, |_| {});
        assert_eq!(current, Some(Version::new(3, 1, 4)));
    }

    #[test]
    fn test_matched_outcome_has_no_warning() {
        let outcome = TagOutcome::Matched(Version::new(1, 0, 0));
        assert_eq!(outcome.into_warning("v1.0.0", "v"), None);
    }
}
