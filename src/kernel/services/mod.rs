//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the app (kernel-facing).
//! - `adapters`: terminal/filesystem specific implementations.

#[cfg(feature = "tui")]
pub mod adapters;
pub mod ports;
