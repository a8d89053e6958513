//! Decoding infrastructure module
//!
//! Turns uploaded containers into PCM for the optimizer.

mod symphonia_decoder;

pub use symphonia_decoder::SymphoniaDecoder;
