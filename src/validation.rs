//! Structural validation of generated markup.
//!
//! Deliberately shallow: a single linear scan for an `<svg ...>` opening
//! tag with a matching `</svg>` somewhere after it. No tree parsing, no
//! attribute checks, no nesting verification. The verdict is the retry
//! trigger in the pipeline, nothing more.

use once_cell::sync::Lazy;
use regex::Regex;

// (?s) so generated markup spanning multiple lines still matches.
static SVG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<svg[^>]*>.*</svg>").expect("svg pattern is valid"));

/// Returns `true` when `artifact` contains an opening `<svg>` tag (with
/// arbitrary attributes) and a matching `</svg>` closing tag, with any
/// content in between.
///
/// Malformed input never panics; it simply yields `false`.
pub fn is_structurally_valid(artifact: &str) -> bool {
    SVG_PATTERN.is_match(artifact)
}
