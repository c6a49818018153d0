pub mod aggregate;

pub use aggregate::{Project, PROJECT_STATUSES};
