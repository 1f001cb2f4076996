// src/core/pattern/mod.rs

//! Pattern parsing and representation.
//!
//! A pattern is a `/`-separated list of [`Section`]s plus metadata: an
//! anti flag, a class filter, and a *start* — the concatenation of the
//! leading constant sections, which is where a traversal for the pattern
//! can begin. Parsing keeps the start relative; a separate
//! [`Pattern::rewrite_start`] step splices in the absolutized form, which
//! keeps the parser unit-testable without touching the filesystem.

pub mod section;

pub use section::{Glob, Section};

use crate::core::error::FindglobError;
use crate::core::path::{self, PATH_MAX, PathIter};

/// Which directory-entry kinds a pattern may terminally match: a two-bit
/// set of FILE and DIR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Class(u8);

impl Class {
    pub const NONE: Class = Class(0);
    pub const FILE: Class = Class(1);
    pub const DIR: Class = Class(2);
    pub const ANY: Class = Class(3);

    pub fn contains(self, other: Class) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOrAssign for Class {
    fn bitor_assign(&mut self, rhs: Class) {
        self.0 |= rhs.0;
    }
}

/// A parsed pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub sections: Vec<Section>,
    /// Anti-patterns suppress matches and prune traversal instead of
    /// producing output.
    pub anti: bool,
    pub class: Class,
    /// The leading constant sections joined with `/`. Rewritten to an
    /// absolute path before any traversal.
    pub start: String,
    /// The user-supplied form of the start, used to build printed paths.
    pub printstart: String,
}

// Extended syntax: `:flags:payload`. Returns the parsed flags and the
// payload remainder.
fn parse_extended(input: &str) -> Result<(bool, Class, &str), FindglobError> {
    let mut anti = false;
    let mut class = Class::NONE;
    let mut chars = input.char_indices();
    chars.next(); // the opening ':'
    for (i, c) in chars {
        match c {
            ':' => {
                // no type flags implies all type flags
                if class.is_empty() {
                    class = Class::ANY;
                }
                return Ok((anti, class, &input[i + 1..]));
            }
            '!' => {
                if anti {
                    return Err(FindglobError::DuplicateFlag('!'));
                }
                anti = true;
            }
            'd' => {
                if class.contains(Class::DIR) {
                    return Err(FindglobError::DuplicateFlag('d'));
                }
                class |= Class::DIR;
            }
            'f' => {
                if class.contains(Class::FILE) {
                    return Err(FindglobError::DuplicateFlag('f'));
                }
                class |= Class::FILE;
            }
            other => return Err(FindglobError::UnknownFlag(other)),
        }
    }
    Err(FindglobError::MissingFlagClose)
}

impl Pattern {
    /// Parses one user-supplied pattern string.
    ///
    /// Shorthand: a leading `!` marks an anti-pattern and a trailing `/`
    /// restricts the class to directories. The extended form
    /// `:flags:payload` spells both out (`!`, `f`, `d`). A leading volume
    /// becomes a constant section; wildcards are not recognized inside it.
    pub fn parse(input: &str) -> Result<Pattern, FindglobError> {
        if input.is_empty() || input == "!" {
            return Err(FindglobError::EmptyPattern);
        }

        let mut anti = false;
        let mut class = Class::ANY;
        let mut rest = input;
        if input.starts_with(':') {
            (anti, class, rest) = parse_extended(input)?;
        } else {
            if let Some(stripped) = rest.strip_prefix('!') {
                rest = stripped;
                anti = true;
            }
            if rest.as_bytes().last().copied().is_some_and(path::is_sep) {
                class = Class::DIR;
            }
        }

        let mut sections = Vec::new();
        for segment in PathIter::new(rest) {
            if segment.is_volume {
                // wildcards are not allowed in a volume
                sections.push(Section::Constant(segment.text.to_string()));
            } else {
                sections.push(Section::parse(segment.text)?);
            }
        }

        if sections.windows(2).any(|pair| pair[0] == Section::Any && pair[1] == Section::Any) {
            return Err(FindglobError::ConsecutiveAny);
        }

        let mut start = String::new();
        for section in &sections {
            let Section::Constant(text) = section else { break };
            path::path_extend(&mut start, text, PATH_MAX)?;
        }
        let printstart = start.clone();

        Ok(Pattern {
            sections,
            anti,
            class,
            start,
            printstart,
        })
    }

    /// Replaces the start — including its constant sections — with
    /// `new_start`, converting the pattern from relative to absolute.
    /// `printstart` keeps the user-supplied form.
    pub fn rewrite_start(&mut self, new_start: &str) -> Result<(), FindglobError> {
        if new_start.len() > PATH_MAX {
            return Err(FindglobError::ResolvedStartTooLong);
        }
        let nold = PathIter::new(&self.start).count();
        let replacement: Vec<Section> = PathIter::new(new_start)
            .map(|segment| Section::Constant(segment.text.to_string()))
            .collect();
        self.sections.splice(..nold, replacement);
        self.start.clear();
        self.start.push_str(new_start);
        Ok(())
    }

    /// Renders the pattern from section `skip` onward back to glob
    /// syntax, for test assertions about match state.
    #[cfg(test)]
    pub(crate) fn render(&self, skip: usize) -> String {
        let mut out = String::new();
        if self.anti {
            out.push('!');
        }
        for (i, section) in self.sections[skip..].iter().enumerate() {
            if i > 0 && !out.ends_with('/') {
                out.push('/');
            }
            section.render(&mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANY: &str = "\u{0}any";

    // Asserts sections against expected strings; the ANY sentinel marks a
    // `**` section, everything else must be a constant.
    fn assert_sections(pattern: &Pattern, expected: &[&str]) {
        assert_eq!(pattern.sections.len(), expected.len(), "section count");
        for (section, want) in pattern.sections.iter().zip(expected) {
            match section {
                Section::Any => assert_eq!(*want, ANY, "unexpected '**' section"),
                Section::Constant(text) => assert_eq!(text, want),
                Section::Glob(_) => panic!("glob sections are covered by section tests"),
            }
        }
    }

    #[test]
    fn parses_absolute_and_relative_starts() {
        let p = Pattern::parse("/asdf/**/zxcv").unwrap();
        assert!(!p.anti);
        assert_eq!(p.start, "/asdf");
        assert_sections(&p, &["/", "asdf", ANY, "zxcv"]);

        let p = Pattern::parse("asdf/**/zxcv").unwrap();
        assert_eq!(p.start, "asdf");
        assert_sections(&p, &["asdf", ANY, "zxcv"]);
    }

    #[test]
    fn rejects_consecutive_double_stars() {
        assert!(matches!(
            Pattern::parse("**/**"),
            Err(FindglobError::ConsecutiveAny)
        ));
    }

    #[test]
    fn parses_anti_shorthand() {
        let p = Pattern::parse("!/asdf/**/zxcv").unwrap();
        assert!(p.anti);
        assert_eq!(p.start, "/asdf");
        assert_sections(&p, &["/", "asdf", ANY, "zxcv"]);

        let p = Pattern::parse("!asdf/**/zxcv").unwrap();
        assert!(p.anti);
        assert_eq!(p.start, "asdf");
    }

    #[test]
    fn start_uses_parsed_section_text() {
        // the escape is resolved before the start is assembled
        let p = Pattern::parse("a\\*b/**").unwrap();
        assert_eq!(p.start, "a*b");
        assert_sections(&p, &["a*b", ANY]);
    }

    #[test]
    fn volume_only_starts() {
        let p = Pattern::parse("/**").unwrap();
        assert_eq!(p.start, "/");
        assert_sections(&p, &["/", ANY]);

        let p = Pattern::parse("/a/**").unwrap();
        assert_eq!(p.start, "/a");
        assert_sections(&p, &["/", "a", ANY]);
    }

    #[test]
    fn class_shorthand_and_flags() {
        assert_eq!(Pattern::parse("a").unwrap().class, Class::ANY);
        assert_eq!(Pattern::parse("a/").unwrap().class, Class::DIR);
        assert_eq!(Pattern::parse(":f:a").unwrap().class, Class::FILE);
        assert_eq!(Pattern::parse(":d:a").unwrap().class, Class::DIR);
        assert_eq!(Pattern::parse(":fd:a").unwrap().class, Class::ANY);
        assert_eq!(Pattern::parse("::a").unwrap().class, Class::ANY);

        let p = Pattern::parse(":!d:**/build").unwrap();
        assert!(p.anti);
        assert_eq!(p.class, Class::DIR);
        // a trailing '/' inside an extended payload does not change class
        assert_eq!(Pattern::parse(":f:a/").unwrap().class, Class::FILE);
    }

    #[test]
    fn rejects_malformed_extended_syntax() {
        assert!(matches!(
            Pattern::parse(":f"),
            Err(FindglobError::MissingFlagClose)
        ));
        assert!(matches!(
            Pattern::parse(":!!:a"),
            Err(FindglobError::DuplicateFlag('!'))
        ));
        assert!(matches!(
            Pattern::parse(":ff:a"),
            Err(FindglobError::DuplicateFlag('f'))
        ));
        assert!(matches!(
            Pattern::parse(":x:a"),
            Err(FindglobError::UnknownFlag('x'))
        ));
    }

    #[test]
    fn rejects_empty_patterns() {
        assert!(matches!(Pattern::parse(""), Err(FindglobError::EmptyPattern)));
        assert!(matches!(Pattern::parse("!"), Err(FindglobError::EmptyPattern)));
    }

    fn rewritten(input: &str, new_start: &str) -> Pattern {
        let mut p = Pattern::parse(input).unwrap();
        p.rewrite_start(new_start).unwrap();
        p
    }

    #[test]
    fn rewrite_start_splices_constant_sections() {
        let p = rewritten("b/**", "/a/b");
        assert_eq!(p.start, "/a/b");
        assert_sections(&p, &["/", "a", "b", ANY]);

        let p = rewritten("b/**/c", "/a/b");
        assert_sections(&p, &["/", "a", "b", ANY, "c"]);
    }

    #[test]
    fn rewrite_start_handles_empty_and_dotted_starts() {
        // an empty start resolves to the current directory
        let p = rewritten("**", "/a/b");
        assert_sections(&p, &["/", "a", "b", ANY]);
        let p = rewritten("**/c", "/a/b");
        assert_sections(&p, &["/", "a", "b", ANY, "c"]);
        // `..` is swallowed by resolution
        let p = rewritten("../**/c", "/a/b");
        assert_sections(&p, &["/", "a", "b", ANY, "c"]);
    }

    #[test]
    fn rewrite_start_can_shorten_or_be_identity() {
        let p = rewritten("/a/b/**/c", "a");
        assert_eq!(p.start, "a");
        assert_sections(&p, &["a", ANY, "c"]);

        let p = rewritten("/a/b/**/c", "/a/b");
        assert_sections(&p, &["/", "a", "b", ANY, "c"]);
    }

    #[test]
    fn rewrite_start_on_all_constant_patterns() {
        let p = rewritten("/a/b/c", "/a/b");
        assert_sections(&p, &["/", "a", "b"]);
        let p = rewritten("/a/b/c", "/a/b/c");
        assert_sections(&p, &["/", "a", "b", "c"]);
        let p = rewritten("/a/b/c", "/a/b/c/d");
        assert_sections(&p, &["/", "a", "b", "c", "d"]);
    }

    #[test]
    fn parse_then_render_round_trips() {
        // canonical inputs (no escapes) come back byte-identical
        for input in [
            "a/b/c",
            "/a/b",
            "**/a",
            "*.c",
            "x*",
            "a*b",
            "*mid*",
            "a?b",
            "**/x/**",
            "!foo/**",
        ] {
            let p = Pattern::parse(input).unwrap();
            assert_eq!(p.render(0), input, "render drifted for {input:?}");
        }
        // escaped input round-trips to an equivalent canonical form
        let p = Pattern::parse("a\\*b/c").unwrap();
        assert_eq!(p.render(0), "a*b/c");
    }

    #[test]
    fn printstart_keeps_the_user_form() {
        let mut p = Pattern::parse("b/**").unwrap();
        p.rewrite_start("/a/b").unwrap();
        assert_eq!(p.start, "/a/b");
        assert_eq!(p.printstart, "b");
    }
}
