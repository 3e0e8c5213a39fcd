//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod history_repository;

pub use history_repository::*;
