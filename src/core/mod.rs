//! Core ledger module
//!
//! This module contains the ledger store and its collaborators:
//! - `traits` - The identifier source abstraction
//! - `ids` - Identifier generator implementations
//! - `ledger` - Account, payment and favorite storage and operations

pub mod ids;
pub mod ledger;
pub mod traits;

pub use ids::{SequentialIdGenerator, UuidGenerator};
pub use ledger::Ledger;
pub use traits::IdGenerator;
