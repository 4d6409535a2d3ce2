//! Synthesis: descriptor → concrete type.

mod error;
mod synthesizer;

#[cfg(test)]
mod synthesizer_tests;

pub use error::SynthesizeError;
