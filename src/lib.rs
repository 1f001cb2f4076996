// src/lib.rs

//! `findglob` finds files and directories matching glob patterns and
//! writes their paths to an output stream, one per line.
//!
//! Its value over a plain glob is joint planning: any number of patterns
//! and anti-patterns are parsed together, grouped by shared start
//! ancestry into the minimum set of start directories, and then each
//! start is walked exactly once while a per-directory match state prunes
//! every subtree no pattern can reach. Anti-patterns both suppress
//! output and stop descent.
//!
//! # Pattern language
//!
//! Patterns are `/`-separated. A section is either `**` (any number of
//! path components), a constant name, or a name-level glob built from
//! `*` and `?` with `\*`, `\?`, and `\\` escapes. A leading `!` marks an
//! anti-pattern, a trailing `/` restricts matches to directories, and
//! the extended form `:flags:pattern` (flags `!`, `f`, `d`) spells both
//! out.
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//!
//! fn main() -> Result<(), findglob::FindglobError> {
//!     let patterns = vec!["**/*.rs".to_string(), "!**/target".to_string()];
//!     let mut stdout = io::stdout();
//!     let mut stderr = io::stderr();
//!     let clean = findglob::run(&patterns, &mut stdout, &mut stderr)?;
//!     if !clean {
//!         // at least one directory could not be enumerated
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod core;

// Re-export key types for the public API
pub use crate::core::error::FindglobError;
pub use crate::core::pattern::{Class, Glob, Pattern, Section};
pub use crate::core::roots::{RootGroup, RootPlanner};
pub use crate::core::walker::{DirEntry, Filesystem, OsFilesystem, search};

use crate::core::path::absolute_start;
use std::io::Write;

/// Parses every command-line pattern and checks that at least one
/// positive pattern is present — a run of nothing but anti-patterns has
/// nothing to search for.
pub fn parse_patterns(inputs: &[String]) -> Result<Vec<Pattern>, FindglobError> {
    let mut patterns = Vec::with_capacity(inputs.len());
    for input in inputs {
        patterns.push(Pattern::parse(input)?);
    }
    let antipatterns = patterns.iter().filter(|p| p.anti).count();
    if antipatterns == patterns.len() {
        return Err(FindglobError::NoPositivePatterns(antipatterns));
    }
    Ok(patterns)
}

/// Rewrites every pattern's start to an absolute path, resolving the
/// empty start as the current directory. Must run before [`search`]; the
/// root planner compares absolute starts.
pub fn absolutize_patterns(patterns: &mut [Pattern]) -> Result<(), FindglobError> {
    for pattern in patterns.iter_mut() {
        let shown = if pattern.start.is_empty() {
            "."
        } else {
            pattern.start.as_str()
        };
        let resolved = absolute_start(&pattern.start).map_err(|source| {
            FindglobError::StartAccess {
                path: shown.to_string(),
                source,
            }
        })?;
        pattern.rewrite_start(&resolved)?;
    }
    Ok(())
}

/// Parses, absolutizes, and searches in one call against the real
/// filesystem. Returns whether every directory enumerated cleanly; the
/// caller maps that (and any error) onto an exit code.
pub fn run(
    inputs: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<bool, FindglobError> {
    let mut patterns = parse_patterns(inputs)?;
    absolutize_patterns(&mut patterns)?;
    search(&patterns, &OsFilesystem, out, err)
}
