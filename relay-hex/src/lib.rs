//! # Relay Hex
//!
//! Application service layer and HTTP adapter for the PIX relay.
//!
//! ## Architecture
//!
//! - `service/` - Relay service (normalizes, forwards, collapses failures)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served by the adapter
//!
//! The service is generic over `P: PaymentProvider`, allowing the real
//! GhostsPays adapter or an in-memory mock to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::RelayService;
