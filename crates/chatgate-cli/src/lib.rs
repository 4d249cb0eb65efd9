#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tempfile as _;

// Used by the main.rs binary
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod commands;
pub mod handlers;
pub mod parser;

pub use commands::{Commands, ServeArgs};
pub use parser::Cli;
