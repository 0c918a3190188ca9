//! artgen library crate.
//!
//! Turns images into text art and asks text-generation providers for art
//! from a prompt. The binary in `main.rs` is a thin wrapper over [`cli`].

pub mod ascii;
pub mod cli;
pub mod config;
pub mod image_source;
pub mod providers;
