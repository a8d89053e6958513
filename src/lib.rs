//! audio-slim - shrink recordings to fit an upload size limit
//!
//! Decodes any common audio container, mixes it to mono, picks the highest
//! sample rate whose 16-bit WAV fits under a byte ceiling, resamples,
//! caps the duration at ten minutes and writes a compact WAV file.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Audio buffers, the DSP pipeline stages, sizes, upload rules and errors
//! - **Application**: The optimize use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Symphonia decoding, XDG config)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
