//! ChromaGen - palette generation and accessibility service
//!
//! HTTP service around the `color-engine` crate: prompt-driven palette
//! generation, dominant-color extraction from uploaded images, and WCAG
//! contrast reports.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
