//! Configuration modules, each loaded from environment variables.
//!
//! - [`cors`]: allowed origins for the CORS layer
//! - [`jwt`]: token secret and expiry
//! - [`storage`]: location of the JSON data directory

pub mod cors;
pub mod jwt;
pub mod storage;
