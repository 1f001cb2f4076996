// src/core/util.rs

//! General-purpose helpers for the core module.

/// A free-list of vectors, so the walker allocates one set of arrays per
/// recursion depth instead of one per directory visited. `get` pops a
/// cleared vector (allocating only when the pool is empty) and `put`
/// returns one for reuse.
#[derive(Debug)]
pub struct Pool<T> {
    free: Vec<Vec<T>>,
}

impl<T> Pool<T> {
    pub fn new() -> Pool<T> {
        Pool { free: Vec::new() }
    }

    pub fn get(&mut self) -> Vec<T> {
        self.free.pop().unwrap_or_default()
    }

    pub fn put(&mut self, mut vec: Vec<T>) {
        vec.clear();
        self.free.push(vec);
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Pool<T> {
        Pool::new()
    }
}
