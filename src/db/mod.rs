//! MongoDB connection module.
//!
//! Builds a pooled driver client from [`DatabaseConfig`](crate::config::DatabaseConfig).

mod client;

pub use client::connect;
