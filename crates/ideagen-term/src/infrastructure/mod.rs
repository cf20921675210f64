//! Infrastructure layer providing external integrations.
//!
//! This module wires the generation service client to the configured endpoint.

pub mod clients;
