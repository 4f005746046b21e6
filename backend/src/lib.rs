//! Backend library for the Soulful training/commerce platform.
//!
//! The crate is laid out hexagonally: `domain` holds the transport-agnostic
//! core (schema registry, document store port, catalog/checkout/intake
//! services), `inbound` exposes the HTTP surface, `outbound` provides the
//! persistence adapters, and `server` wires everything together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
