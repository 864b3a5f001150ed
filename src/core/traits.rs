//! Core traits for the ledger's external collaborators
//!
//! The ledger never invents identifiers itself: payments and favorites get
//! their identifiers from an injected [`IdGenerator`].

/// Source of globally unique string identifiers
///
/// Implementations must never return the same identifier twice for the
/// lifetime of a ledger. The default implementation is
/// [`UuidGenerator`](crate::core::ids::UuidGenerator).
pub trait IdGenerator {
    /// Produce the next identifier
    fn next_id(&mut self) -> String;
}
