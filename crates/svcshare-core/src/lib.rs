//! # svcshare-core
//!
//! Envelope types, configuration and the error taxonomy shared by the
//! ServiceShare client crates.
//!
//! This crate is HTTP-agnostic: it describes what goes on the wire and what
//! can go wrong, while `svcshare-client` performs the calls.

pub mod codes;
pub mod config;
pub mod defaults;
pub mod envelope;
pub mod error;
pub mod logging;
pub mod request_id;

// Re-export commonly used types at crate root
pub use codes::{fun_code, PaymentType};
pub use config::{Config, SignaturePolicy};
pub use envelope::{RequestMessage, ResponseMessage};
pub use error::{ApiError, Error, Result};
pub use request_id::RequestIdStrategy;
