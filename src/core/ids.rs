//! Identifier generators
//!
//! - [`UuidGenerator`]: random v4 UUIDs, the production default
//! - [`SequentialIdGenerator`]: predictable `prefix-N` identifiers for tests,
//!   benchmarks and reproducible dumps

use super::traits::IdGenerator;
use uuid::Uuid;

/// Random v4 UUID identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Counter-based identifiers of the form `{prefix}-{n}`, starting at 1
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    /// Create a generator whose identifiers start with `prefix`
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
