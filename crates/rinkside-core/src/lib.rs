//! Core types and list operations for the Rinkside dashboard and catalog.
//!
//! This crate is deliberately free of HTTP and I/O. Every store operation is a
//! pure transformation of an in-memory sequence; the caller owns the result
//! and decides where the new sequence lives.

pub mod camp;
pub mod entity;
pub mod error;
pub mod filter;
pub mod player;
pub mod sample;
pub mod seed;
pub mod store;
pub mod summary;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
