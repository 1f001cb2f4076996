// src/core/roots.rs

//! Root planning.
//!
//! Every non-anti pattern belongs to exactly one traversal group. A
//! pattern is a *root* when no other non-anti pattern's start is an
//! ancestor of (or, at equal starts, comes before) its own; each root's
//! group then collects every non-anti pattern whose start lies at or
//! beneath the root's start, so one walk from the root covers them all
//! without revisiting any tree. Anti-patterns are never roots and ride
//! along in every group.

use crate::core::path::path_startswith;
use crate::core::pattern::Pattern;

/// One traversal group: indices into the pattern list, root first, the
/// rest in original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootGroup {
    pub members: Vec<usize>,
}

impl RootGroup {
    pub fn root(&self) -> usize {
        self.members[0]
    }
}

/// Iterates the groups in increasing root-index order.
#[derive(Debug)]
pub struct RootPlanner<'p> {
    patterns: &'p [Pattern],
    next: usize,
}

impl<'p> RootPlanner<'p> {
    pub fn new(patterns: &'p [Pattern]) -> RootPlanner<'p> {
        RootPlanner { patterns, next: 0 }
    }
}

impl Iterator for RootPlanner<'_> {
    type Item = RootGroup;

    fn next(&mut self) -> Option<RootGroup> {
        'candidates: for i in self.next..self.patterns.len() {
            if self.patterns[i].anti {
                continue;
            }
            let a = &self.patterns[i].start;
            let mut members = vec![i];
            for (j, other) in self.patterns.iter().enumerate() {
                if j == i {
                    continue;
                }
                if other.anti {
                    members.push(j);
                    continue;
                }
                let b = &other.start;
                // i is not a root if b is an ancestor of a, or if the
                // starts are equal and j comes first
                if path_startswith(a, b) && (a.len() != b.len() || i > j) {
                    continue 'candidates;
                }
                if path_startswith(b, a) {
                    members.push(j);
                }
            }
            self.next = i + 1;
            return Some(RootGroup { members });
        }
        self.next = self.patterns.len();
        None
    }
}
