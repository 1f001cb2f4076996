// src/cli/args.rs
use clap::Parser;

const AFTER_HELP: &str = "\
Examples:

    # find all .c files below the current directory
    findglob '**/*.c'

    # find all .c AND .h files
    findglob '**/*.c' '**/*.h'

    # the same, while avoiding searching through the .git directory
    findglob '**/*.c' '**/*.h' '!.git'

    # find all .py files, skipping .git and any __pycache__ directory
    findglob '**/*.py' '!.git' '!**/__pycache__'

    # find all .c files but ignore any .in.c files
    findglob '**/*.c' '!**/*.in.c'

Some details of how patterns work:

  - a PATTERN starting with ** begins searching in the current directory

  - a PATTERN starting with prefix/** begins searching at prefix/

  - PATTERNs of a/** and b/** search a/ and b/ in sequence

  - PATTERNs of **/a and **/b share a start point (the current
    directory), so a single search covers both

  - PATTERNs of a/** and a/b/** search a/ once, since the start point of
    the first pattern is a parent of the start point of the second

  - PATTERNs ending with a file separator ('/') only match directories

  - ANTIPATTERNs start with a '!', and cause matching files to not be
    printed and matching directories to not be searched

  - ANTIPATTERNs follow the same start-point rules, so !**/.git prevents
    matching anything beneath the current directory named .git, while
    !/**/.git, whose start point is /, prevents matching anything named
    .git across the entire filesystem.  Unlike PATTERNs, an ANTIPATTERN
    with a start point of '/' is not enough to cause findglob to search
    through all of '/'.

  - PATTERNs and ANTIPATTERNs may have types.  Dir-type patterns match
    directories but not files, file-type patterns match files but not
    dirs, and untyped patterns match either.  Dir-type patterns may be
    written with a trailing file separator (/); file-type patterns need
    the extended syntax.

  - on Windows, using '\\' as a separator is not allowed; use '/' instead

Extended syntax:

  Extended-syntax patterns begin with a ':', followed by zero or more
  flags, followed by another ':', followed by the pattern.  The following
  flags are supported:

    - ! -> an ANTIPATTERN
    - f -> match against files
    - d -> match against directories
    - if no type flag is supplied, the pattern matches all types

  Example:
      # find files (not dirs) named 'build' except those in build dirs:
      findglob ':f:**/build' ':!d:**/build'
";

#[derive(Parser, Debug)]
#[command(
    name = "findglob",
    version,
    about = "Find matching files and directories and write them to stdout.",
    after_help = AFTER_HELP
)]
pub struct CliArgs {
    /// Glob patterns to search for; a leading '!' (or the extended
    /// ':flags:' form) marks an anti-pattern
    #[arg(required = true, value_name = "PATTERN")]
    pub patterns: Vec<String>,
}
