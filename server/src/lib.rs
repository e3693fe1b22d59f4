//! Encore Server - Event-discovery facade.
//!
//! This crate provides the Encore backend, responsible for:
//! - Proxying an upstream event-discovery provider
//! - Normalizing its deeply nested records into flat, display-ready shapes
//! - Filtering, sorting, and paginating event listings
//!
//! # Architecture
//!
//! The server sits between browsing clients and the provider. Each request
//! is served by a stateless pipeline: fetch from the provider, reshape, and
//! respond. Nothing is cached or stored.

pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod pagination;
pub mod pipeline;
pub mod rank;
pub mod routes;
pub mod types;
pub mod upstream;
