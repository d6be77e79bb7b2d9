//! Core types and trait definitions for the Visage store layer.
//!
//! This crate is deliberately free of HTTP, database, and async-runtime
//! dependencies. All other crates depend on it; it depends on nothing heavy.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod analysis;
pub mod classify;
pub mod error;
pub mod identity;
pub mod notify;
pub mod slot;

pub use error::{Error, Result};
