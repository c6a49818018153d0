//! Common types for all list records

pub mod choice;
pub mod lookup;

// Re-exports
pub use choice::Choice;
pub use lookup::{LookupKind, LookupOption};
