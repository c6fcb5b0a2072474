//! The registry service — the transport-agnostic operations of the system.
//!
//! Ties the fingerprint engine, ledger, verifier, and access-code gate
//! together behind validated request/response contracts. Transport, retry,
//! and timeout policy belong to whatever layer embeds this crate.

pub mod config;
pub mod error;
pub mod request;
pub mod service;

pub use config::ServiceConfig;
pub use error::{ServiceError, ValidationError};
pub use request::RegisterRequest;
pub use service::{Registration, RegistryService};
