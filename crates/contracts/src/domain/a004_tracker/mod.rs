pub mod aggregate;

pub use aggregate::{Tracker, CREATION_MODES, STORAGE_TYPES};
