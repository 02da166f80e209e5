//! HVAC reviews service library
//!
//! Exposes the cache, upstream client and HTTP router for the binary and for
//! integration tests.

pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod reviews;
pub mod server;
