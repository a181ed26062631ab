//! Ant-style path patterns.

use std::fmt;
use std::str::FromStr;

use inflow_core::error::AppError;

/// A compiled Ant-style path pattern.
///
/// Segments are separated by `/`. A `*` segment matches exactly one path
/// segment, `**` matches any number of remaining segments including none,
/// and every other segment matches literally. `**` may appear anywhere in
/// the pattern, e.g. `/api/departments/my-department/*/members/**`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    One,
    Many,
}

impl PathPattern {
    /// Compiles a pattern string.
    pub fn new(pattern: &str) -> Self {
        let segments = split(pattern)
            .map(|s| match s {
                "*" => Segment::One,
                "**" => Segment::Many,
                literal => Segment::Literal(literal.to_string()),
            })
            .collect();
        Self {
            raw: pattern.to_string(),
            segments,
        }
    }

    /// Tests a request path against this pattern.
    pub fn matches(&self, path: &str) -> bool {
        let path_segments: Vec<&str> = split(path).collect();
        match_segments(&self.segments, &path_segments)
    }

    /// Returns the original pattern string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for PathPattern {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Splits a path or pattern on `/`, ignoring leading and trailing slashes.
fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn match_segments(pattern: &[Segment], path: &[&str]) -> bool {
    match pattern.split_first() {
        None => path.is_empty(),
        Some((Segment::Many, rest)) => {
            (0..=path.len()).any(|skip| match_segments(rest, &path[skip..]))
        }
        Some((Segment::One, rest)) => !path.is_empty() && match_segments(rest, &path[1..]),
        Some((Segment::Literal(literal), rest)) => {
            path.first().is_some_and(|s| *s == literal.as_str())
                && match_segments(rest, &path[1..])
        }
    }
}
