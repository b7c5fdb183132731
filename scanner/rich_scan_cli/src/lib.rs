//! Library half of the `richscan` binary.
//!
//! Command handlers live in [`commands`] so they can be tested without
//! spawning the binary.

pub mod commands;
