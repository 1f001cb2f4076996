// src/core/matcher.rs

//! The path-descent state machine.
//!
//! A [`Match`] pairs a pattern with the number of leading sections the
//! descent has already consumed. Feeding it one path component yields a
//! set of [`Transitions`]: ways the match survives into the next level,
//! plus whether the pattern is fully satisfied at this component.

use crate::core::pattern::{Class, Pattern, Section};
use std::ops::{BitOr, BitOrAssign};

/// The set of ways a live match responds to one path component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transitions(u8);

impl Transitions {
    /// No transition: the match dies at this component.
    pub const NONE: Transitions = Transitions(0);
    /// Consume the component without advancing (only possible on `**`).
    pub const STAY: Transitions = Transitions(1);
    /// Consume the component and advance past one section.
    pub const ADVANCE: Transitions = Transitions(2);
    /// Consume the component and advance past a `**` plus the section
    /// after it.
    pub const SKIP: Transitions = Transitions(4);
    /// The pattern fully matches at this component.
    pub const TERMINAL: Transitions = Transitions(8);

    pub fn contains(self, other: Transitions) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Transitions {
    type Output = Transitions;
    fn bitor(self, rhs: Transitions) -> Transitions {
        Transitions(self.0 | rhs.0)
    }
}

impl BitOrAssign for Transitions {
    fn bitor_assign(&mut self, rhs: Transitions) {
        self.0 |= rhs.0;
    }
}

fn terminal_if(cond: bool) -> Transitions {
    if cond {
        Transitions::TERMINAL
    } else {
        Transitions::NONE
    }
}

/// The state of one pattern mid-descent.
#[derive(Debug, Clone, Copy)]
pub struct Match<'p> {
    pub pattern: &'p Pattern,
    /// How many leading sections the descent has consumed.
    pub matched: usize,
}

// How one component transitions a match, by example:
//
// pattern   | name | transitions       | remaining pattern(s)
// ----------|------|-------------------|---------------------
// x         |  a   | (none)            | -
// a         |  a   | TERMINAL [1]      |
// a/x       |  a   | ADVANCE           | x
// a/**      |  a   | ADVANCE, TERM [2] | **
// a/**/x    |  a   | ADVANCE           | **/x
// **        |  a   | STAY, TERM [1]    | **
// **/a      |  a   | STAY, TERM [1]    | **/a
// **/a/**   |  a   | SKIP, TERM [2]    | **
// **/a/**/x |  a   | SKIP              | **/x
// **/a/x    |  a   | STAY, SKIP        | **/a/x, x
// **/x      |  a   | STAY              | **/x
//
// [1] TERMINAL only if the pattern's class covers the entry's class
// [2] TERMINAL only if classes match AND the entry is a directory
//
// Some combinations that are logically possible are left out because
// another reported transition subsumes them (`**` can match emptily):
// **/a gets no ADVANCE since **/a still matches a; **/a/** gets no STAY
// since the remaining ** already matches a; **/a/x gets no ADVANCE since
// **/a/x still matches a/x. Dropping them keeps the live set small.
impl<'p> Match<'p> {
    pub fn new(pattern: &'p Pattern) -> Match<'p> {
        Match {
            pattern,
            matched: 0,
        }
    }

    /// The same match advanced past `n` more sections.
    pub fn advanced(self, n: usize) -> Match<'p> {
        debug_assert!(self.matched + n < self.pattern.sections.len());
        Match {
            pattern: self.pattern,
            matched: self.matched + n,
        }
    }

    /// Computes the transitions for one component `name` whose entry kind
    /// is `class` (`Class::FILE` or `Class::DIR`).
    pub fn transitions(&self, name: &str, class: Class) -> Transitions {
        let sections = &self.pattern.sections;
        let section = &sections[self.matched];
        let classmatch = self.pattern.class.contains(class);
        let isdir = class == Class::DIR;
        let remains = sections.len() - self.matched;

        if !section.matches(name) {
            return Transitions::NONE;
        }
        if matches!(section, Section::Any) {
            if remains == 1 {
                // **
                return Transitions::STAY | terminal_if(classmatch);
            }
            let next = &sections[self.matched + 1];
            if !next.matches(name) {
                // **/x
                return Transitions::STAY;
            }
            if remains == 2 {
                // **/a
                return Transitions::STAY | terminal_if(classmatch);
            }
            if matches!(sections[self.matched + 2], Section::Any) {
                if remains == 3 {
                    // **/a/**
                    return Transitions::SKIP | terminal_if(classmatch && isdir);
                }
                // **/a/**/x
                return Transitions::SKIP;
            }
            // **/a/x
            return Transitions::STAY | Transitions::SKIP;
        }
        if remains == 1 {
            // a
            return terminal_if(classmatch);
        }
        if remains == 2 && matches!(sections[self.matched + 1], Section::Any) {
            // a/**
            return Transitions::ADVANCE | terminal_if(classmatch && isdir);
        }
        // a/x, a/**/x
        Transitions::ADVANCE
    }
}
