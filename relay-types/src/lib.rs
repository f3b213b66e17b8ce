//! # Relay Types
//!
//! Domain types and port traits for the PIX payment relay.
//! This crate has ZERO IO dependencies - only data structures,
//! the request normalization rules, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Credentials, transaction identifiers, upstream responses
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Inbound request and the normalized outbound transaction
//! - `error/` - Provider and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{ProviderCredentials, TransactionId, UpstreamResponse};
pub use dto::*;
pub use error::{AppError, ProviderError};
pub use ports::PaymentProvider;
