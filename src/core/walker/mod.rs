// src/core/walker/mod.rs

//! The walk engine.
//!
//! One traversal runs per root group. The group's start is consumed
//! segment by segment to seed the live match set, then each directory is
//! enumerated, filtered down to entries some non-anti match can still
//! reach, sorted, printed where terminal, and recursed where
//! intermediate. A terminal anti-pattern match kills an entry entirely:
//! it is neither printed nor descended into.
//!
//! The walker owns a single growable path buffer (truncated on return
//! from each level) and pools its per-level vectors, so a traversal
//! allocates proportionally to its depth rather than to the number of
//! directories visited.

pub mod filesystem;

pub use filesystem::{DirEntry, Filesystem, OsFilesystem};

use std::io::{self, Write};

use crate::core::error::FindglobError;
use crate::core::matcher::{Match, Transitions};
use crate::core::path::PathIter;
use crate::core::pattern::{Class, Pattern};
use crate::core::roots::RootPlanner;
use crate::core::util::Pool;

/// Runs every root group's traversal in planner order, writing matched
/// paths to `out` and per-directory failures to `err`.
///
/// Returns `Ok(true)` when every directory enumerated cleanly and
/// `Ok(false)` when at least one did not (the walk still visits
/// everything it can). Fatal conditions — a failed stat on a group's
/// start, a write error, out-of-memory — surface as `Err`.
pub fn search(
    patterns: &[Pattern],
    fs: &dyn Filesystem,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<bool, FindglobError> {
    let mut walker = Walker {
        fs,
        out,
        err,
        path: String::new(),
        entry_pool: Pool::new(),
        match_pool: Pool::new(),
        clean: true,
    };
    for group in RootPlanner::new(patterns) {
        let root = &patterns[group.root()];
        let mut members: Vec<&Pattern> = group.members.iter().map(|&i| &patterns[i]).collect();
        // anti-patterns first, so their terminal matches short-circuit
        // before any positive match reports; the sort is stable, so
        // equal-start patterns keep their command-line order
        members.sort_by_key(|p| !p.anti);
        walker.run_group(&members, root)?;
    }
    Ok(walker.clean)
}

// Shared state across one search: the platform, the writer pair, the
// reused path buffer, and the per-level vector pools.
struct Walker<'w, 'p> {
    fs: &'w dyn Filesystem,
    out: &'w mut dyn Write,
    err: &'w mut dyn Write,
    path: String,
    entry_pool: Pool<DirEntry>,
    match_pool: Pool<Match<'p>>,
    clean: bool,
}

impl<'w, 'p> Walker<'w, 'p> {
    fn run_group(&mut self, members: &[&'p Pattern], root: &Pattern) -> Result<(), FindglobError> {
        let is_dir = self
            .fs
            .is_dir(&root.start)
            .map_err(|source| FindglobError::StartAccess {
                path: root.start.clone(),
                source,
            })?;

        if !is_dir {
            // the start is a file: simulate the descent and print on a
            // kept terminal match
            if initial_file_match(members, &root.start, &mut self.match_pool) {
                writeln!(self.out, "{}", root.printstart)?;
            }
            return Ok(());
        }

        let (matches, terminal) = initial_matches(members, &root.start, &mut self.match_pool);
        if terminal {
            // the empty print-start renders as the current directory
            let shown = if root.printstart.is_empty() {
                "."
            } else {
                root.printstart.as_str()
            };
            writeln!(self.out, "{shown}")?;
        }
        if !matches.is_empty() {
            self.path.clear();
            self.path.push_str(&root.printstart);
            self.walk(&matches)?;
        }
        self.match_pool.put(matches);
        Ok(())
    }

    fn walk(&mut self, matches: &[Match<'p>]) -> Result<(), FindglobError> {
        let open_path = if self.path.is_empty() { "." } else { self.path.as_str() };
        let entries = match self.fs.read_dir(open_path) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::OutOfMemory => return Err(e.into()),
            Err(e) => {
                // per-directory failure: report, keep walking elsewhere
                writeln!(self.err, "{open_path}: {e}")?;
                self.clean = false;
                return Ok(());
            }
        };

        let mut kept = self.entry_pool.get();
        for entry in entries {
            let keep = if entry.is_dir {
                keep_dir(matches, &entry.name)
            } else {
                keep_file(matches, &entry.name)
            };
            if keep {
                kept.push(entry);
            }
        }
        // deterministic output: byte-ordered siblings
        kept.sort_unstable_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));

        let parent_len = self.path.len();
        for entry in &kept {
            // volumes already end in a separator and need no joiner
            if !self.path.is_empty() && !self.path.ends_with('/') {
                self.path.push('/');
            }
            self.path.push_str(&entry.name);
            if !entry.is_dir {
                // keep_file only admits terminal matches
                writeln!(self.out, "{}", self.path)?;
            } else {
                let mut next = self.match_pool.get();
                let (intermediate, terminal) = process_dir(&entry.name, matches, &mut next);
                if terminal {
                    writeln!(self.out, "{}", self.path)?;
                }
                if intermediate {
                    self.walk(&next)?;
                }
                self.match_pool.put(next);
            }
            self.path.truncate(parent_len);
        }
        self.entry_pool.put(kept);
        Ok(())
    }
}

/// Applies one directory component to every live match, collecting the
/// surviving states into `next`. Returns `(intermediate, terminal)`
/// judged over the non-anti members only; a terminal anti-pattern match
/// clears `next` and reports dead on both counts, which is why groups
/// order anti-patterns first.
fn process_dir<'p>(name: &str, matches: &[Match<'p>], next: &mut Vec<Match<'p>>) -> (bool, bool) {
    let mut intermediate = false;
    let mut terminal = false;
    for &m in matches {
        let anti = m.pattern.anti;
        let transitions = m.transitions(name, Class::DIR);
        if transitions.contains(Transitions::TERMINAL) {
            if anti {
                next.clear();
                return (false, false);
            }
            terminal = true;
        }
        for (flag, advance) in [
            (Transitions::STAY, 0),
            (Transitions::ADVANCE, 1),
            (Transitions::SKIP, 2),
        ] {
            if transitions.contains(flag) {
                next.push(m.advanced(advance));
                if !anti {
                    intermediate = true;
                }
            }
        }
    }
    (intermediate, terminal)
}

/// Drops directories no live non-anti match could reach, along with `.`
/// and `..`.
fn keep_dir(matches: &[Match<'_>], name: &str) -> bool {
    if name == "." || name == ".." {
        return false;
    }
    matches
        .iter()
        .any(|m| !m.pattern.anti && m.pattern.sections[m.matched].matches(name))
}

/// Keeps only files with a terminal match; the first terminal decides,
/// so with anti-patterns sorted first an anti match suppresses the file.
fn keep_file(matches: &[Match<'_>], name: &str) -> bool {
    for &m in matches {
        let transitions = m.transitions(name, Class::FILE);
        if transitions.contains(Transitions::TERMINAL) {
            return !m.pattern.anti;
        }
    }
    false
}

// Seeds a group's match set by consuming the start, one segment at a
// time. Returns the live set after the full start plus whether the start
// itself is a terminal match (to be printed by the caller).
fn initial_matches<'p>(
    members: &[&'p Pattern],
    start: &str,
    pool: &mut Pool<Match<'p>>,
) -> (Vec<Match<'p>>, bool) {
    let mut matches = pool.get();
    matches.extend(members.iter().map(|&p| Match::new(p)));

    let segments: Vec<&str> = PathIter::new(start).map(|s| s.text).collect();
    let mut terminal = false;
    for (i, segment) in segments.iter().enumerate() {
        let mut next = pool.get();
        let (intermediate, t) = process_dir(segment, &matches, &mut next);
        pool.put(std::mem::replace(&mut matches, next));
        terminal = t && i + 1 == segments.len();
        if !intermediate {
            matches.clear();
            break;
        }
    }
    (matches, terminal)
}

// The file-start variant: intermediate segments descend as directories,
// the final segment is judged as a file.
fn initial_file_match<'p>(
    members: &[&'p Pattern],
    start: &str,
    pool: &mut Pool<Match<'p>>,
) -> bool {
    let mut matches = pool.get();
    matches.extend(members.iter().map(|&p| Match::new(p)));

    let segments: Vec<&str> = PathIter::new(start).map(|s| s.text).collect();
    let mut kept = false;
    for (i, segment) in segments.iter().enumerate() {
        if i + 1 == segments.len() {
            kept = keep_file(&matches, segment);
            break;
        }
        let mut next = pool.get();
        let (intermediate, _) = process_dir(segment, &matches, &mut next);
        pool.put(std::mem::replace(&mut matches, next));
        if !intermediate {
            break;
        }
    }
    pool.put(matches);
    kept
}
