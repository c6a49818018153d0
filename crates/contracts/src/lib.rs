//! DTOs shared between the PrintVault REST backend and the frontend.

pub mod domain;
