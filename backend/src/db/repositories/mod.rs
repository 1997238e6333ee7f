//! Repository implementations module.
//!
//! - `catalog`: the class catalog (conflict detection, ID assignment)
//! - `ledger`: the date-indexed booking ledger
//! - `local`: in-memory repository composing both behind the repository traits
pub mod catalog;
pub mod ledger;
pub mod local;

pub use catalog::ClassCatalog;
pub use ledger::BookingLedger;
pub use local::LocalRepository;
