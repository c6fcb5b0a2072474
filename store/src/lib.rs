//! Abstract storage traits for the Patina provenance registry.
//!
//! Durability is delegated to an external store (a relational database in
//! production, [`patina-nullables`]' in-memory store in tests). Every backend
//! implements these traits; the rest of the workspace depends only on them.

pub mod antiques;
pub mod codes;
pub mod error;
pub mod ledger;

pub use antiques::AntiqueStore;
pub use codes::AccessCodeStore;
pub use error::StoreError;
pub use ledger::LedgerStore;
