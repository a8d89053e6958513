//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external libraries and the filesystem.

pub mod config;
pub mod decoding;

// Re-export adapters
pub use config::XdgConfigStore;
pub use decoding::SymphoniaDecoder;
