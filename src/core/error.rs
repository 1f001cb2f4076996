// src/core/error.rs
use thiserror::Error;

/// Errors produced while parsing patterns or walking the filesystem.
///
/// Parse errors abort the run before any traversal begins, and a failed
/// stat on a group's start point aborts the run as well. Failures to open
/// individual directories mid-walk are *not* represented here; they are
/// reported on the diagnostic stream and only affect the final exit code.
#[derive(Error, Debug)]
pub enum FindglobError {
    #[error("empty pattern not allowed")]
    EmptyPattern,
    #[error("illegal empty section")]
    EmptySection,
    #[error("illegal escape: \\{0} (legal escapes are \\* \\? \\\\)")]
    IllegalEscape(char),
    #[error("illegal trailing '\\'")]
    TrailingEscape,
    #[error("consecutive * wildcards not allowed (x/** is legal but x** is not)")]
    ConsecutiveStars,
    #[error("a pattern cannot have two consecutive '**' elements")]
    ConsecutiveAny,
    #[error("duplicate '{0}' in extended syntax pattern")]
    DuplicateFlag(char),
    #[error("unrecognized flag '{0}' in extended syntax pattern")]
    UnknownFlag(char),
    #[error("incomplete extended syntax pattern: missing closing ':'")]
    MissingFlagClose,
    #[error("pattern start is too long")]
    StartTooLong,
    #[error("resolved pattern start is too long")]
    ResolvedStartTooLong,
    #[error("you provided {0} antipatterns but no patterns at all")]
    NoPositivePatterns(usize),
    #[error("{path}: {source}")]
    StartAccess {
        path: String,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
