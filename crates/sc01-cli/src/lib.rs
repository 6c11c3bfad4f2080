//! SC-01 CLI library.
//!
//! This crate provides the command implementations behind the `sc01` binary:
//! rendering phoneme codes to PCM, listing the phoneme table, and checking a
//! sample directory.

pub mod commands;
pub mod logging;
