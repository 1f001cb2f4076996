// tests/common.rs
use anyhow::Result;
use std::fs::{self, File};
use tempfile::{TempDir, tempdir};

pub mod common_test_utils {
    use super::*;

    /// Builds the canonical example tree used across the suites:
    /// example/
    ///   a          (file)
    ///   b/
    ///   d/
    ///     a/
    ///       c/
    ///     e/
    ///     f        (file)
    #[allow(dead_code)] // used by other test files
    pub fn setup_example_tree() -> Result<TempDir> {
        let dir = tempdir()?;
        let base = dir.path().join("example");
        fs::create_dir(&base)?;
        File::create(base.join("a"))?;
        fs::create_dir(base.join("b"))?;
        fs::create_dir(base.join("d"))?;
        fs::create_dir(base.join("d/a"))?;
        fs::create_dir(base.join("d/a/c"))?;
        fs::create_dir(base.join("d/e"))?;
        File::create(base.join("d/f"))?;
        Ok(dir)
    }

    /// Builds a small source-style tree for glob-shape coverage:
    /// src/
    ///   main.c
    ///   main.h
    ///   util.c
    ///   notes.txt
    ///   vendor/
    ///     lib.c
    #[allow(dead_code)] // used by other test files
    pub fn setup_source_tree() -> Result<TempDir> {
        let dir = tempdir()?;
        let base = dir.path().join("src");
        fs::create_dir(&base)?;
        for name in ["main.c", "main.h", "util.c", "notes.txt"] {
            File::create(base.join(name))?;
        }
        fs::create_dir(base.join("vendor"))?;
        File::create(base.join("vendor/lib.c"))?;
        Ok(dir)
    }
}
