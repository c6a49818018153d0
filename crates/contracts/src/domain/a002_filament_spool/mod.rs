pub mod aggregate;

pub use aggregate::{FilamentSpool, SPOOL_STATUSES};
