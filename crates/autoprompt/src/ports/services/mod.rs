//! Service Ports
//!
//! Abstract interfaces for external services.

mod completion_client;

pub use completion_client::*;
