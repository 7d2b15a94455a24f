//! Generator constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

mod cave;

pub use cave::*;
