// crates/ethica-server/src/lib.rs
// Ethica - Ethical Thinking for AI Agents

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod error;
pub mod mcp;
pub mod thought;
pub use error::{EthicaError, Result};
