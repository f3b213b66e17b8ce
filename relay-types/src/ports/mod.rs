//! Port traits (interfaces for adapters).
//!
//! The application layer depends on these traits, not on a concrete
//! HTTP client.

mod provider;

pub use provider::PaymentProvider;
