// Shared utilities

pub mod constants;
pub mod cookies;

pub use constants::*;
