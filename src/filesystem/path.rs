use snafu::prelude::*;

use super::error::{FilesystemError, InvalidPathSnafu};

/// Separator character between path segments.
pub const SEPARATOR: char = '/';

/// Parent-directory segment, preserved literally for the resolver to
/// interpret.
pub const PARENT_SEGMENT: &str = "..";

/// Current-directory segment, elided during normalization.
pub const CURRENT_SEGMENT: &str = ".";

/// A raw path string broken into the parts the resolver cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPath {
    pub is_absolute: bool,
    pub has_trailing_separator: bool,
    pub segments: Vec<String>,
}

impl NormalizedPath {
    /// Splits a raw path on the separator, discarding empty components
    /// (repeated separators) and `.` components.
    ///
    /// The only rejected input is a blank string; anything else normalizes,
    /// even degenerate forms like `//` (absolute, zero segments).
    pub fn parse(raw: &str) -> Result<Self, FilesystemError> {
        ensure!(
            !raw.trim().is_empty(),
            InvalidPathSnafu {
                reason: "path cannot be blank",
            }
        );

        let is_absolute = raw.starts_with(SEPARATOR);
        // A lone separator is the absolute root, not a trailing separator.
        let has_trailing_separator = raw.len() > 1 && raw.ends_with(SEPARATOR);

        let segments = raw
            .split(SEPARATOR)
            .filter(|part| !part.is_empty() && *part != CURRENT_SEGMENT)
            .map(str::to_string)
            .collect();

        Ok(NormalizedPath {
            is_absolute,
            has_trailing_separator,
            segments,
        })
    }
}

/// Strips trailing separators, leaving a lone separator untouched.
///
/// Only `mkdir` goes through this: a creation target does not have to
/// pre-exist as a directory, so trailing separators are tolerated there and
/// rejected everywhere else.
pub fn strip_trailing_separators(raw: &str) -> &str {
    let mut trimmed = raw;
    while trimmed.len() > 1 && trimmed.ends_with(SEPARATOR) {
        trimmed = &trimmed[..trimmed.len() - 1];
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("/", true, false, &[])]
    #[case("////", true, false, &[])]
    #[case("/a/b", true, false, &["a", "b"])]
    #[case("a/b/", false, true, &["a", "b"])]
    #[case("/a//b/./", true, true, &["a", "b"])]
    #[case(".", false, false, &[])]
    #[case("./.", false, false, &[])]
    #[case("..", false, false, &[".."])]
    #[case("../../x", false, false, &["..", "..", "x"])]
    #[case("a", false, false, &["a"])]
    fn parse_splits_into_expected_parts(
        #[case] raw: &str,
        #[case] is_absolute: bool,
        #[case] has_trailing_separator: bool,
        #[case] segments: &[&str],
    ) {
        let normalized = NormalizedPath::parse(raw).unwrap();
        assert_eq!(normalized.is_absolute, is_absolute);
        assert_eq!(normalized.has_trailing_separator, has_trailing_separator);
        assert_eq!(normalized.segments, segments);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t")]
    fn parse_rejects_blank_input(#[case] raw: &str) {
        let result = NormalizedPath::parse(raw);
        assert!(matches!(result, Err(FilesystemError::InvalidPath { .. })));
    }

    #[rstest]
    #[case("/a/", "/a")]
    #[case("/a///", "/a")]
    #[case("/", "/")]
    #[case("///", "/")]
    #[case("a", "a")]
    fn strip_trailing_separators_leaves_lone_separator(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(strip_trailing_separators(raw), expected);
    }
}
