//! go.mod line scanning rules
//!
//! Handles:
//! - replace directives pointing the base client at its fork
//! - direct dependency lines of a module family
//! - `// indirect` markers, which always exclude a line

use regex::Regex;
use std::collections::BTreeSet;

/// Trailing marker of a transitively required dependency
const INDIRECT_MARKER: &str = "// indirect";

/// A single line of a go.mod file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestLine<'a> {
    raw: &'a str,
}

impl<'a> ManifestLine<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// The line exactly as read
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// True when the line ends with `// indirect`
    ///
    /// Only the end of the line counts; the marker elsewhere is ignored.
    pub fn is_indirect(&self) -> bool {
        self.raw.trim_end().ends_with(INDIRECT_MARKER)
    }

    /// First whitespace-delimited token of the line
    pub fn identifier(&self) -> Option<&'a str> {
        self.raw.split_whitespace().next()
    }

    /// True when the line mentions the given module family
    pub fn references_family(&self, family: &str) -> bool {
        self.raw.contains(family)
    }
}

/// A base => fork replace directive found in a go.mod
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceDirective {
    /// Version of the replaced module, if the directive pins one
    pub base_version: Option<String>,
    /// Version of the fork, if present after the fork path
    pub fork_version: Option<String>,
}

impl ReplaceDirective {
    /// Parse a line against the replace pattern
    fn from_line(line: &str, pattern: &Regex) -> Option<Self> {
        let caps = pattern.captures(line)?;
        let whole = caps.get(0)?;

        let base_version = caps
            .get(1)
            .map(|m| m.as_str().trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        let rest = &line[whole.end()..];
        let fork_version = if rest.starts_with(char::is_whitespace) {
            rest.split_whitespace().next().map(str::to_string)
        } else {
            None
        };

        Some(Self {
            base_version,
            fork_version,
        })
    }
}

/// Find the first line matching the replace pattern
pub fn scan_replace_directive(content: &str, pattern: &Regex) -> Option<ReplaceDirective> {
    content
        .lines()
        .find_map(|line| ReplaceDirective::from_line(line, pattern))
}

/// True when any line matches the replace pattern
pub fn scan_needs_replacement(content: &str, pattern: &Regex) -> bool {
    content.lines().any(|line| pattern.is_match(line))
}

/// Collect direct dependencies of `family`
///
/// Indirect lines are dropped before the family check, so an indirect family
/// dependency is never returned.
pub fn scan_dependency_targets(content: &str, family: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(ManifestLine::new)
        .filter(|line| !line.is_indirect())
        .filter(|line| line.references_family(family))
        .filter_map(|line| line.identifier())
        .map(str::to_string)
        .collect()
}
